//! Accounts-payable data types.

use chrono::{DateTime, NaiveDate, Utc};
use rotafin_shared::types::{DriverPaymentId, PayableId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entries::LedgerEntry;
use crate::store::{Collection, Record};
use crate::sync::{Settlement, parse_flag};

/// Category given to payables derived from driver payments.
pub const DRIVER_CATEGORY: &str = "Motoristas";

/// Payment status of a payable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayableStatus {
    /// Not yet paid.
    #[default]
    Pending,
    /// Paid.
    Paid,
}

impl PayableStatus {
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

impl Settlement for PayableStatus {
    fn is_settled(self) -> bool {
        matches!(self, Self::Paid)
    }

    fn from_settled(settled: bool) -> Self {
        if settled { Self::Paid } else { Self::Pending }
    }
}

/// Where a payable comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PayableKind {
    /// Entered by hand.
    #[default]
    Manual,
    /// Generated from a driver payment; read-only.
    DriverPayment {
        /// Source payment.
        driver_payment_id: DriverPaymentId,
    },
}

impl PayableKind {
    /// Source driver payment, if any.
    #[must_use]
    pub const fn driver_payment_id(self) -> Option<DriverPaymentId> {
        match self {
            Self::Manual => None,
            Self::DriverPayment { driver_payment_id } => Some(driver_payment_id),
        }
    }

    /// Display label (`Manual` / `Motorista`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::DriverPayment { .. } => "Motorista",
        }
    }
}

/// An accounts-payable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayableEntry {
    /// Entry ID.
    pub id: PayableId,
    /// Description.
    pub description: String,
    /// Amount to pay.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Payment status.
    pub status: PayableStatus,
    /// Supplier (the driver for derived entries).
    pub supplier: String,
    /// Expense category.
    #[serde(default)]
    pub category: String,
    /// Manual or driver-payment-derived.
    #[serde(default)]
    pub kind: PayableKind,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Record for PayableEntry {
    const COLLECTION: Collection = Collection::AccountsPayable;
}

impl LedgerEntry for PayableEntry {
    type Id = PayableId;
    type Status = PayableStatus;

    const COLLECTION_NAME: &'static str = "accounts_payable";
    const SOURCE_KIND: &'static str = "driver payment";

    fn id(&self) -> PayableId {
        self.id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn status(&self) -> PayableStatus {
        self.status
    }

    fn counterparty(&self) -> &str {
        &self.supplier
    }

    fn is_derived(&self) -> bool {
        self.kind.driver_payment_id().is_some()
    }
}

/// Form input for a manual payable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayableInput {
    /// Description.
    pub description: String,
    /// Amount to pay.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Payment status.
    #[serde(default)]
    pub status: PayableStatus,
    /// Supplier.
    #[serde(default)]
    pub supplier: String,
    /// Expense category.
    #[serde(default)]
    pub category: String,
}
