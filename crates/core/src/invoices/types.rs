//! Invoice data types.

use chrono::{DateTime, NaiveDate, Utc};
use rotafin_shared::types::InvoiceId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::{Collection, Record};
use crate::sync::{Settlement, parse_flag};

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Awaiting payment.
    #[default]
    Pending,
    /// Paid by the client.
    Paid,
}

impl InvoiceStatus {
    /// Parses a stored code or pt-BR label (`paid`, `Pago`, `Paga`, ...).
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

impl Settlement for InvoiceStatus {
    fn is_settled(self) -> bool {
        matches!(self, Self::Paid)
    }

    fn from_settled(settled: bool) -> Self {
        if settled { Self::Paid } else { Self::Pending }
    }
}

/// An invoice issued to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub id: InvoiceId,
    /// Invoice number, the natural key for imports.
    pub number: String,
    /// Billed client.
    pub client: String,
    /// Billed amount.
    pub amount: Decimal,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Payment status.
    pub status: InvoiceStatus,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Record for Invoice {
    const COLLECTION: Collection = Collection::Invoices;
}

/// Form input for creating or editing an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceInput {
    /// Invoice number.
    pub number: String,
    /// Billed client.
    pub client: String,
    /// Billed amount.
    pub amount: Decimal,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Payment status.
    #[serde(default)]
    pub status: InvoiceStatus,
    /// Free text.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_and_label() {
        assert_eq!(InvoiceStatus::parse("Pago"), Some(InvoiceStatus::Paid));
        assert_eq!(InvoiceStatus::parse("pending"), Some(InvoiceStatus::Pending));
        assert_eq!(InvoiceStatus::parse("received"), None);
        assert_eq!(InvoiceStatus::Paid.label(), "Pago");
        assert_eq!(InvoiceStatus::Pending.toggled(), InvoiceStatus::Paid);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&InvoiceStatus::Paid).unwrap(), "\"paid\"");
    }
}
