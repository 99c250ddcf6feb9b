//! Manual receivable editing and the receivable side of settlement toggles.

use chrono::{DateTime, Utc};
use rotafin_shared::types::ReceivableId;

use super::sync::InvoiceReceivables;
use super::types::{ReceivableEntry, ReceivableInput, ReceivableKind};
use crate::entries::EntryService;
use crate::error::{RecordError, require, valid_amount};
use crate::invoices::Invoice;
use crate::sync::{Toggled, toggle_settlement};

/// Receivable service for business logic.
pub struct ReceivableService;

impl ReceivableService {
    /// Validate manual receivable input.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for a blank description.
    /// Returns `RecordError::NegativeAmount` for an amount below zero and
    /// `RecordError::AmountTooLarge` above `MAX_AMOUNT`.
    pub fn validate(input: &ReceivableInput) -> Result<(), RecordError> {
        require("description", &input.description)?;
        valid_amount("amount", input.amount)
    }

    /// Appends a manual receivable.
    ///
    /// # Errors
    ///
    /// Returns a validation error; the collection is left unchanged.
    pub fn create(
        entries: &mut Vec<ReceivableEntry>,
        input: ReceivableInput,
        now: DateTime<Utc>,
    ) -> Result<ReceivableId, RecordError> {
        Self::validate(&input)?;
        let id = ReceivableId::new();
        entries.push(ReceivableEntry {
            id,
            description: input.description.trim().to_string(),
            amount: input.amount,
            due_date: input.due_date,
            status: input.status,
            client: input.client.trim().to_string(),
            kind: ReceivableKind::Manual,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    /// Edits a manual receivable.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DerivedEntryImmutable` for an invoice-derived
    /// entry, `RecordError::NotFound` for an unknown id, or a validation error.
    pub fn update(
        entries: &mut [ReceivableEntry],
        id: ReceivableId,
        input: ReceivableInput,
        now: DateTime<Utc>,
    ) -> Result<(), RecordError> {
        let entry = EntryService::manual_mut(entries, id)?;
        Self::validate(&input)?;
        entry.description = input.description.trim().to_string();
        entry.amount = input.amount;
        entry.due_date = input.due_date;
        entry.status = input.status;
        entry.client = input.client.trim().to_string();
        entry.updated_at = now;
        Ok(())
    }

    /// Deletes a manual receivable.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DerivedEntryImmutable` for an invoice-derived
    /// entry, `RecordError::NotFound` for an unknown id.
    pub fn delete(
        entries: &mut Vec<ReceivableEntry>,
        id: ReceivableId,
    ) -> Result<ReceivableEntry, RecordError> {
        EntryService::delete(entries, id)
    }

    /// Flips pending/received; a derived entry also flips its invoice.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn toggle(
        entries: &mut [ReceivableEntry],
        invoices: &mut [Invoice],
        id: ReceivableId,
        now: DateTime<Utc>,
    ) -> Result<Toggled, RecordError> {
        let index = EntryService::position(entries, id)?;
        Ok(toggle_settlement(&InvoiceReceivables, &mut entries[index], invoices, now))
    }
}
