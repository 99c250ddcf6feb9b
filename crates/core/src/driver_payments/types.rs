//! Driver payment data types.

use chrono::{DateTime, NaiveDate, Utc};
use rotafin_shared::types::DriverPaymentId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::{Collection, Record};
use crate::sync::{Settlement, parse_flag};

/// Payment status of a driver payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverPaymentStatus {
    /// Not yet paid to the driver.
    #[default]
    Pending,
    /// Paid.
    Paid,
}

impl DriverPaymentStatus {
    /// Parses a stored code or pt-BR label.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        parse_flag(raw, &["paid", "pago", "paga"]).map(Self::from_settled)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Paid => "Pago",
        }
    }
}

impl Settlement for DriverPaymentStatus {
    fn is_settled(self) -> bool {
        matches!(self, Self::Paid)
    }

    fn from_settled(settled: bool) -> Self {
        if settled { Self::Paid } else { Self::Pending }
    }
}

/// Amount agreed with a driver for one trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPayment {
    /// Payment ID.
    pub id: DriverPaymentId,
    /// Invoice number the trip was billed on (free text, not a link).
    pub invoice: String,
    /// Trip departure date; also the due date of the derived payable.
    pub departure_date: NaiveDate,
    /// Driver name.
    pub driver_name: String,
    /// Agreed amount.
    pub agreed_amount: Decimal,
    /// Payment status.
    pub status: DriverPaymentStatus,
    /// Bank account details.
    #[serde(default)]
    pub bank_account: String,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Record for DriverPayment {
    const COLLECTION: Collection = Collection::DriverPayments;
}

/// Form input for creating or editing a driver payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPaymentInput {
    /// Invoice number.
    pub invoice: String,
    /// Departure date.
    pub departure_date: NaiveDate,
    /// Driver name.
    pub driver_name: String,
    /// Agreed amount.
    pub agreed_amount: Decimal,
    /// Payment status.
    #[serde(default)]
    pub status: DriverPaymentStatus,
    /// Bank account details.
    #[serde(default)]
    pub bank_account: String,
    /// Free text.
    #[serde(default)]
    pub description: String,
}
