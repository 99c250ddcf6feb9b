//! Manual payable editing and the payable side of settlement toggles.

use chrono::{DateTime, Utc};
use rotafin_shared::types::PayableId;

use super::sync::DriverPaymentPayables;
use super::types::{PayableEntry, PayableInput, PayableKind};
use crate::driver_payments::DriverPayment;
use crate::entries::EntryService;
use crate::error::{RecordError, require, valid_amount};
use crate::sync::{Toggled, toggle_settlement};

/// Payable service for business logic.
pub struct PayableService;

impl PayableService {
    /// Validate manual payable input.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for a blank description.
    /// Returns `RecordError::NegativeAmount` for an amount below zero and
    /// `RecordError::AmountTooLarge` above `MAX_AMOUNT`.
    pub fn validate(input: &PayableInput) -> Result<(), RecordError> {
        require("description", &input.description)?;
        valid_amount("amount", input.amount)
    }

    /// Appends a manual payable.
    ///
    /// # Errors
    ///
    /// Returns a validation error; the collection is left unchanged.
    pub fn create(
        entries: &mut Vec<PayableEntry>,
        input: PayableInput,
        now: DateTime<Utc>,
    ) -> Result<PayableId, RecordError> {
        Self::validate(&input)?;
        let id = PayableId::new();
        entries.push(PayableEntry {
            id,
            description: input.description.trim().to_string(),
            amount: input.amount,
            due_date: input.due_date,
            status: input.status,
            supplier: input.supplier.trim().to_string(),
            category: input.category.trim().to_string(),
            kind: PayableKind::Manual,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    /// Edits a manual payable.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DerivedEntryImmutable` for a driver-payment
    /// entry, `RecordError::NotFound` for an unknown id, or a validation error.
    pub fn update(
        entries: &mut [PayableEntry],
        id: PayableId,
        input: PayableInput,
        now: DateTime<Utc>,
    ) -> Result<(), RecordError> {
        let entry = EntryService::manual_mut(entries, id)?;
        Self::validate(&input)?;
        entry.description = input.description.trim().to_string();
        entry.amount = input.amount;
        entry.due_date = input.due_date;
        entry.status = input.status;
        entry.supplier = input.supplier.trim().to_string();
        entry.category = input.category.trim().to_string();
        entry.updated_at = now;
        Ok(())
    }

    /// Deletes a manual payable.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DerivedEntryImmutable` for a driver-payment
    /// entry, `RecordError::NotFound` for an unknown id.
    pub fn delete(entries: &mut Vec<PayableEntry>, id: PayableId) -> Result<PayableEntry, RecordError> {
        EntryService::delete(entries, id)
    }

    /// Flips pending/paid; a derived entry also flips its driver payment.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn toggle(
        entries: &mut [PayableEntry],
        payments: &mut [DriverPayment],
        id: PayableId,
        now: DateTime<Utc>,
    ) -> Result<Toggled, RecordError> {
        let index = EntryService::position(entries, id)?;
        Ok(toggle_settlement(&DriverPaymentPayables, &mut entries[index], payments, now))
    }
}
