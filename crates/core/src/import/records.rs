//! Row mappings for each importable collection.

use chrono::{DateTime, NaiveDate, Utc};
use rotafin_shared::types::{DriverPaymentId, InvoiceId, NoteId, PayableId, ReceivableId};
use rust_decimal::Decimal;

use super::error::RowError;
use super::reconcile::Importable;
use super::schema::{self, MappedRow, Schema};
use crate::driver_payments::{DriverPayment, DriverPaymentStatus};
use crate::entries::EntryService;
use crate::invoices::{Invoice, InvoiceStatus};
use crate::notes::{Note, NoteStatus};
use crate::payables::{PayableEntry, PayableKind, PayableStatus};
use crate::receivables::{ReceivableEntry, ReceivableKind, ReceivableStatus};

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn required<T>(value: Option<T>, schema: &Schema, key: &'static str) -> Result<T, RowError> {
    value.ok_or_else(|| RowError::MissingForCreate(schema.header_of(key)))
}

/// Invoice fields read from a row.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    number: String,
    client: Option<String>,
    amount: Option<Decimal>,
    due_date: Option<NaiveDate>,
    status: Option<InvoiceStatus>,
    description: Option<String>,
}

impl Importable for Invoice {
    type Draft = InvoiceDraft;
    type Key = String;

    const SCHEMA: &'static Schema = &schema::INVOICES;

    fn draft(row: &MappedRow<'_>) -> Result<InvoiceDraft, RowError> {
        Ok(InvoiceDraft {
            number: row.key("number")?,
            client: row.text("client"),
            amount: row.amount("amount")?,
            due_date: row.date("due_date")?,
            status: row.parse("status", InvoiceStatus::parse)?,
            description: row.text("description"),
        })
    }

    fn draft_key(draft: &InvoiceDraft) -> String {
        draft.number.clone()
    }

    fn natural_key(&self) -> String {
        self.number.clone()
    }

    fn merge(&mut self, draft: InvoiceDraft, now: DateTime<Utc>) {
        set(&mut self.client, draft.client);
        set(&mut self.amount, draft.amount);
        set(&mut self.due_date, draft.due_date);
        set(&mut self.status, draft.status);
        set(&mut self.description, draft.description);
        self.updated_at = now;
    }

    fn create(draft: InvoiceDraft, now: DateTime<Utc>) -> Result<Self, RowError> {
        Ok(Self {
            id: InvoiceId::new(),
            number: draft.number,
            client: draft.client.unwrap_or_default(),
            amount: draft.amount.unwrap_or_default(),
            due_date: required(draft.due_date, Self::SCHEMA, "due_date")?,
            status: draft.status.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Driver payment fields read from a row.
#[derive(Debug, Clone)]
pub struct DriverPaymentDraft {
    invoice: String,
    driver_name: String,
    departure_date: Option<NaiveDate>,
    agreed_amount: Option<Decimal>,
    status: Option<DriverPaymentStatus>,
    bank_account: Option<String>,
    description: Option<String>,
}

impl Importable for DriverPayment {
    type Draft = DriverPaymentDraft;
    type Key = (String, String);

    const SCHEMA: &'static Schema = &schema::DRIVER_PAYMENTS;

    fn draft(row: &MappedRow<'_>) -> Result<DriverPaymentDraft, RowError> {
        Ok(DriverPaymentDraft {
            invoice: row.key("invoice")?,
            driver_name: row.key("driver_name")?,
            departure_date: row.date("departure_date")?,
            agreed_amount: row.amount("agreed_amount")?,
            status: row.parse("status", DriverPaymentStatus::parse)?,
            bank_account: row.text("bank_account"),
            description: row.text("description"),
        })
    }

    fn draft_key(draft: &DriverPaymentDraft) -> (String, String) {
        (draft.invoice.clone(), draft.driver_name.clone())
    }

    fn natural_key(&self) -> (String, String) {
        (self.invoice.clone(), self.driver_name.clone())
    }

    fn merge(&mut self, draft: DriverPaymentDraft, now: DateTime<Utc>) {
        set(&mut self.departure_date, draft.departure_date);
        set(&mut self.agreed_amount, draft.agreed_amount);
        set(&mut self.status, draft.status);
        set(&mut self.bank_account, draft.bank_account);
        set(&mut self.description, draft.description);
        self.updated_at = now;
    }

    fn create(draft: DriverPaymentDraft, now: DateTime<Utc>) -> Result<Self, RowError> {
        Ok(Self {
            id: DriverPaymentId::new(),
            invoice: draft.invoice,
            departure_date: required(draft.departure_date, Self::SCHEMA, "departure_date")?,
            driver_name: draft.driver_name,
            agreed_amount: draft.agreed_amount.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            bank_account: draft.bank_account.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Note fields read from a row.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    number: String,
    shipper: Option<String>,
    due_date: Option<NaiveDate>,
    delivery_date: Option<NaiveDate>,
    nfe_key: Option<String>,
    description: Option<String>,
}

impl Importable for Note {
    type Draft = NoteDraft;
    type Key = String;

    const SCHEMA: &'static Schema = &schema::NOTES;

    fn draft(row: &MappedRow<'_>) -> Result<NoteDraft, RowError> {
        Ok(NoteDraft {
            number: row.key("number")?,
            shipper: row.text("shipper"),
            due_date: row.date("due_date")?,
            delivery_date: row.date("delivery_date")?,
            nfe_key: row.text("nfe_key"),
            description: row.text("description"),
        })
    }

    fn draft_key(draft: &NoteDraft) -> String {
        draft.number.clone()
    }

    fn natural_key(&self) -> String {
        self.number.clone()
    }

    fn merge(&mut self, draft: NoteDraft, now: DateTime<Utc>) {
        set(&mut self.shipper, draft.shipper);
        set(&mut self.due_date, draft.due_date);
        if draft.delivery_date.is_some() {
            self.delivery_date = draft.delivery_date;
        }
        set(&mut self.nfe_key, draft.nfe_key);
        set(&mut self.description, draft.description);
        self.updated_at = now;
    }

    fn create(draft: NoteDraft, now: DateTime<Utc>) -> Result<Self, RowError> {
        Ok(Self {
            id: NoteId::new(),
            number: draft.number,
            shipper: draft.shipper.unwrap_or_default(),
            due_date: required(draft.due_date, Self::SCHEMA, "due_date")?,
            delivery_date: draft.delivery_date,
            nfe_key: draft.nfe_key.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            // re-derived by the save path
            status: NoteStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Receivable fields read from a row.
#[derive(Debug, Clone)]
pub struct ReceivableDraft {
    description: String,
    client: String,
    amount: Option<Decimal>,
    due_date: Option<NaiveDate>,
    status: Option<ReceivableStatus>,
}

impl Importable for ReceivableEntry {
    type Draft = ReceivableDraft;
    type Key = (String, String);

    const SCHEMA: &'static Schema = &schema::RECEIVABLES;

    fn draft(row: &MappedRow<'_>) -> Result<ReceivableDraft, RowError> {
        Ok(ReceivableDraft {
            description: row.key("description")?,
            client: row.text("client").unwrap_or_default(),
            amount: row.amount("amount")?,
            due_date: row.date("due_date")?,
            status: row.parse("status", ReceivableStatus::parse)?,
        })
    }

    fn draft_key(draft: &ReceivableDraft) -> (String, String) {
        (draft.description.clone(), draft.client.clone())
    }

    fn natural_key(&self) -> (String, String) {
        (self.description.clone(), self.client.clone())
    }

    fn guard(&self) -> Result<(), RowError> {
        EntryService::ensure_manual(self).map_err(RowError::from)
    }

    fn merge(&mut self, draft: ReceivableDraft, now: DateTime<Utc>) {
        set(&mut self.amount, draft.amount);
        set(&mut self.due_date, draft.due_date);
        set(&mut self.status, draft.status);
        self.updated_at = now;
    }

    fn create(draft: ReceivableDraft, now: DateTime<Utc>) -> Result<Self, RowError> {
        Ok(Self {
            id: ReceivableId::new(),
            description: draft.description,
            amount: draft.amount.unwrap_or_default(),
            due_date: required(draft.due_date, Self::SCHEMA, "due_date")?,
            status: draft.status.unwrap_or_default(),
            client: draft.client,
            kind: ReceivableKind::Manual,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Payable fields read from a row.
#[derive(Debug, Clone)]
pub struct PayableDraft {
    description: String,
    supplier: String,
    amount: Option<Decimal>,
    due_date: Option<NaiveDate>,
    status: Option<PayableStatus>,
    category: Option<String>,
}

impl Importable for PayableEntry {
    type Draft = PayableDraft;
    type Key = (String, String);

    const SCHEMA: &'static Schema = &schema::PAYABLES;

    fn draft(row: &MappedRow<'_>) -> Result<PayableDraft, RowError> {
        Ok(PayableDraft {
            description: row.key("description")?,
            supplier: row.text("supplier").unwrap_or_default(),
            amount: row.amount("amount")?,
            due_date: row.date("due_date")?,
            status: row.parse("status", PayableStatus::parse)?,
            category: row.text("category"),
        })
    }

    fn draft_key(draft: &PayableDraft) -> (String, String) {
        (draft.description.clone(), draft.supplier.clone())
    }

    fn natural_key(&self) -> (String, String) {
        (self.description.clone(), self.supplier.clone())
    }

    fn guard(&self) -> Result<(), RowError> {
        EntryService::ensure_manual(self).map_err(RowError::from)
    }

    fn merge(&mut self, draft: PayableDraft, now: DateTime<Utc>) {
        set(&mut self.amount, draft.amount);
        set(&mut self.due_date, draft.due_date);
        set(&mut self.status, draft.status);
        set(&mut self.category, draft.category);
        self.updated_at = now;
    }

    fn create(draft: PayableDraft, now: DateTime<Utc>) -> Result<Self, RowError> {
        Ok(Self {
            id: PayableId::new(),
            description: draft.description,
            amount: draft.amount.unwrap_or_default(),
            due_date: required(draft.due_date, Self::SCHEMA, "due_date")?,
            status: draft.status.unwrap_or_default(),
            supplier: draft.supplier,
            category: draft.category.unwrap_or_default(),
            kind: PayableKind::Manual,
            created_at: now,
            updated_at: now,
        })
    }
}
