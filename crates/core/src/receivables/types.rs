//! Accounts-receivable data types.

use chrono::{DateTime, NaiveDate, Utc};
use rotafin_shared::types::{InvoiceId, ReceivableId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entries::LedgerEntry;
use crate::store::{Collection, Record};
use crate::sync::{Settlement, parse_flag};

/// Collection status of a receivable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableStatus {
    /// Not yet received.
    #[default]
    Pending,
    /// Money received.
    Received,
}

impl ReceivableStatus {
    /// Parses a stored code or pt-BR label (`received`, `Recebido`, ...).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        parse_flag(raw, &["received", "recebido", "recebida"]).map(Self::from_settled)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Received => "Recebido",
        }
    }
}

impl Settlement for ReceivableStatus {
    fn is_settled(self) -> bool {
        matches!(self, Self::Received)
    }

    fn from_settled(settled: bool) -> Self {
        if settled { Self::Received } else { Self::Pending }
    }
}

/// Where a receivable comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReceivableKind {
    /// Entered by hand.
    #[default]
    Manual,
    /// Generated from an invoice; read-only.
    Invoice {
        /// Source invoice.
        invoice_id: InvoiceId,
    },
}

impl ReceivableKind {
    /// Source invoice, if any.
    #[must_use]
    pub const fn invoice_id(self) -> Option<InvoiceId> {
        match self {
            Self::Manual => None,
            Self::Invoice { invoice_id } => Some(invoice_id),
        }
    }

    /// Display label (`Manual` / `Fatura`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Invoice { .. } => "Fatura",
        }
    }
}

/// An accounts-receivable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivableEntry {
    /// Entry ID.
    pub id: ReceivableId,
    /// Description.
    pub description: String,
    /// Amount to receive.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Collection status.
    pub status: ReceivableStatus,
    /// Paying client.
    pub client: String,
    /// Manual or invoice-derived.
    #[serde(default)]
    pub kind: ReceivableKind,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Record for ReceivableEntry {
    const COLLECTION: Collection = Collection::AccountsReceivable;
}

impl LedgerEntry for ReceivableEntry {
    type Id = ReceivableId;
    type Status = ReceivableStatus;

    const COLLECTION_NAME: &'static str = "accounts_receivable";
    const SOURCE_KIND: &'static str = "invoice";

    fn id(&self) -> ReceivableId {
        self.id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn status(&self) -> ReceivableStatus {
        self.status
    }

    fn counterparty(&self) -> &str {
        &self.client
    }

    fn is_derived(&self) -> bool {
        self.kind.invoice_id().is_some()
    }
}

/// Form input for a manual receivable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivableInput {
    /// Description.
    pub description: String,
    /// Amount to receive.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Collection status.
    #[serde(default)]
    pub status: ReceivableStatus,
    /// Paying client.
    #[serde(default)]
    pub client: String,
}
