//! Driver payment editing rules.

use chrono::{DateTime, Utc};
use rotafin_shared::types::DriverPaymentId;

use super::types::{DriverPayment, DriverPaymentInput, DriverPaymentStatus};
use crate::error::{RecordError, require, valid_amount};
use crate::sync::Settlement;

const COLLECTION: &str = "driver_payments";

/// Driver payment service for business logic.
pub struct DriverPaymentService;

impl DriverPaymentService {
    /// Validate driver payment input.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for a blank invoice or driver.
    /// Returns `RecordError::NegativeAmount` for an amount below zero and
    /// `RecordError::AmountTooLarge` above `MAX_AMOUNT`.
    pub fn validate(input: &DriverPaymentInput) -> Result<(), RecordError> {
        require("invoice", &input.invoice)?;
        require("driver_name", &input.driver_name)?;
        valid_amount("agreed_amount", input.agreed_amount)
    }

    /// Appends a new payment.
    ///
    /// # Errors
    ///
    /// Returns a validation error; the collection is left unchanged.
    pub fn create(
        payments: &mut Vec<DriverPayment>,
        input: DriverPaymentInput,
        now: DateTime<Utc>,
    ) -> Result<DriverPaymentId, RecordError> {
        Self::validate(&input)?;
        let id = DriverPaymentId::new();
        payments.push(DriverPayment {
            id,
            invoice: input.invoice.trim().to_string(),
            departure_date: input.departure_date,
            driver_name: input.driver_name.trim().to_string(),
            agreed_amount: input.agreed_amount,
            status: input.status,
            bank_account: input.bank_account,
            description: input.description,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    /// Replaces the editable fields of a payment.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id, or a validation error.
    pub fn update(
        payments: &mut [DriverPayment],
        id: DriverPaymentId,
        input: DriverPaymentInput,
        now: DateTime<Utc>,
    ) -> Result<(), RecordError> {
        Self::validate(&input)?;
        let payment = Self::find_mut(payments, id)?;
        payment.invoice = input.invoice.trim().to_string();
        payment.departure_date = input.departure_date;
        payment.driver_name = input.driver_name.trim().to_string();
        payment.agreed_amount = input.agreed_amount;
        payment.status = input.status;
        payment.bank_account = input.bank_account;
        payment.description = input.description;
        payment.updated_at = now;
        Ok(())
    }

    /// Removes a payment.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn delete(
        payments: &mut Vec<DriverPayment>,
        id: DriverPaymentId,
    ) -> Result<DriverPayment, RecordError> {
        let index = payments
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| RecordError::not_found(COLLECTION, id))?;
        Ok(payments.remove(index))
    }

    /// Flips pending/paid and returns the new status.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn toggle_status(
        payments: &mut [DriverPayment],
        id: DriverPaymentId,
        now: DateTime<Utc>,
    ) -> Result<DriverPaymentStatus, RecordError> {
        let payment = Self::find_mut(payments, id)?;
        payment.status = payment.status.toggled();
        payment.updated_at = now;
        Ok(payment.status)
    }

    /// Distinct driver names, sorted.
    #[must_use]
    pub fn drivers(payments: &[DriverPayment]) -> Vec<String> {
        let mut names: Vec<String> = payments.iter().map(|p| p.driver_name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    fn find_mut(
        payments: &mut [DriverPayment],
        id: DriverPaymentId,
    ) -> Result<&mut DriverPayment, RecordError> {
        payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RecordError::not_found(COLLECTION, id))
    }
}
