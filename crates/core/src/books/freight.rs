//! Driver payments and the payables derived from them.

use chrono::NaiveDate;
use rotafin_shared::types::DriverPaymentId;
use serde::Serialize;

use super::invoicing::split;
use super::{Books, BooksError, ImportSummary};
use crate::clock::Clock;
use crate::driver_payments::{DriverPayment, DriverPaymentInput, DriverPaymentService, DriverStatement};
use crate::import::{Table, import_rows};
use crate::payables::{DriverPaymentPayables, PayableEntry};
use crate::store::KeyValueStore;
use crate::sync::{SyncReport, synchronize};

/// Collections after a driver-payment write.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentsSaved {
    /// All driver payments as persisted.
    pub payments: Vec<DriverPayment>,
    /// All payables after the sync.
    pub payables: Vec<PayableEntry>,
    /// What the sync changed.
    #[serde(skip)]
    pub report: SyncReport,
}

impl<S: KeyValueStore, C: Clock> Books<S, C> {
    /// Stored driver payments.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the collection cannot be read.
    pub fn driver_payments(&self) -> Result<Vec<DriverPayment>, BooksError> {
        self.load()
    }

    /// Persists `payments` and re-derives the payables from them.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` on a read or write failure.
    pub fn save_driver_payments(&mut self, payments: Vec<DriverPayment>) -> Result<PaymentsSaved, BooksError> {
        self.save(&payments)?;
        let synced = synchronize(&DriverPaymentPayables, &payments, self.load()?, self.clock.now());
        self.save(&synced.records)?;
        tracing::info!(
            payments = payments.len(),
            created = synced.report.created,
            updated = synced.report.updated,
            removed = synced.report.removed,
            "driver payments saved"
        );
        Ok(PaymentsSaved {
            payments,
            payables: synced.records,
            report: synced.report,
        })
    }

    /// Adds a driver payment.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for invalid input; nothing is written.
    pub fn create_driver_payment(
        &mut self,
        input: DriverPaymentInput,
    ) -> Result<(DriverPaymentId, PaymentsSaved), BooksError> {
        let mut payments = self.driver_payments()?;
        let id = DriverPaymentService::create(&mut payments, input, self.clock.now())?;
        Ok((id, self.save_driver_payments(payments)?))
    }

    /// Edits a driver payment; its payable follows.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id or invalid input.
    pub fn update_driver_payment(
        &mut self,
        id: DriverPaymentId,
        input: DriverPaymentInput,
    ) -> Result<PaymentsSaved, BooksError> {
        let mut payments = self.driver_payments()?;
        DriverPaymentService::update(&mut payments, id, input, self.clock.now())?;
        self.save_driver_payments(payments)
    }

    /// Deletes a driver payment and its payable.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id.
    pub fn delete_driver_payment(&mut self, id: DriverPaymentId) -> Result<PaymentsSaved, BooksError> {
        let mut payments = self.driver_payments()?;
        DriverPaymentService::delete(&mut payments, id)?;
        self.save_driver_payments(payments)
    }

    /// Flips a driver payment between pending and paid; its payable follows.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id.
    pub fn toggle_driver_payment(&mut self, id: DriverPaymentId) -> Result<PaymentsSaved, BooksError> {
        let mut payments = self.driver_payments()?;
        DriverPaymentService::toggle_status(&mut payments, id, self.clock.now())?;
        self.save_driver_payments(payments)
    }

    /// Reconciles a driver-payment table into the stored payments.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Import` for an empty table.
    pub fn import_driver_payments(&mut self, table: &Table) -> Result<(ImportSummary, PaymentsSaved), BooksError> {
        let outcome = import_rows(self.driver_payments()?, table, self.clock.now())?;
        let (merged, summary) = split(outcome);
        Ok((summary, self.save_driver_payments(merged)?))
    }

    /// Payments of one driver departing within `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for a blank driver, an inverted period or
    /// an empty result.
    pub fn driver_statement(
        &self,
        driver: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DriverStatement, BooksError> {
        Ok(DriverStatement::build(&self.driver_payments()?, driver, start, end)?)
    }
}
