//! Accounts receivable and payable.
//!
//! Manual entries are edited here; derived entries only change through their
//! source, except for the settled flag which may be toggled from either side.

use rotafin_shared::types::{PayableId, ReceivableId};
use serde::Serialize;

use super::invoicing::split;
use super::{Books, BooksError, ImportSummary};
use crate::clock::Clock;
use crate::driver_payments::DriverPayment;
use crate::entries::{EntryService, EntryTotals};
use crate::import::{Table, import_rows};
use crate::invoices::Invoice;
use crate::payables::{PayableEntry, PayableInput, PayableService};
use crate::receivables::{ReceivableEntry, ReceivableInput, ReceivableService};
use crate::store::KeyValueStore;
use crate::sync::Toggled;

/// Collections after toggling a receivable.
#[derive(Debug, Clone, Serialize)]
pub struct ReceivableToggled {
    /// Settled flag after the toggle.
    pub received: bool,
    /// All receivables.
    pub receivables: Vec<ReceivableEntry>,
    /// All invoices; the linked one flipped when the entry is derived.
    pub invoices: Vec<Invoice>,
}

/// Collections after toggling a payable.
#[derive(Debug, Clone, Serialize)]
pub struct PayableToggled {
    /// Settled flag after the toggle.
    pub paid: bool,
    /// All payables.
    pub payables: Vec<PayableEntry>,
    /// All driver payments; the linked one flipped when the entry is derived.
    pub payments: Vec<DriverPayment>,
}

impl<S: KeyValueStore, C: Clock> Books<S, C> {
    /// Stored receivables.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the collection cannot be read.
    pub fn receivables(&self) -> Result<Vec<ReceivableEntry>, BooksError> {
        self.load()
    }

    /// Stored payables.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the collection cannot be read.
    pub fn payables(&self) -> Result<Vec<PayableEntry>, BooksError> {
        self.load()
    }

    /// Adds a manual receivable.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for invalid input.
    pub fn create_receivable(
        &mut self,
        input: ReceivableInput,
    ) -> Result<(ReceivableId, Vec<ReceivableEntry>), BooksError> {
        let mut entries = self.receivables()?;
        let id = ReceivableService::create(&mut entries, input, self.clock.now())?;
        self.save(&entries)?;
        tracing::info!(receivable_id = %id, "receivable created");
        Ok((id, entries))
    }

    /// Edits a manual receivable.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id, a derived entry or
    /// invalid input.
    pub fn update_receivable(
        &mut self,
        id: ReceivableId,
        input: ReceivableInput,
    ) -> Result<Vec<ReceivableEntry>, BooksError> {
        let mut entries = self.receivables()?;
        ReceivableService::update(&mut entries, id, input, self.clock.now())?;
        self.save(&entries)?;
        Ok(entries)
    }

    /// Deletes a manual receivable.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id or a derived entry.
    pub fn delete_receivable(&mut self, id: ReceivableId) -> Result<Vec<ReceivableEntry>, BooksError> {
        let mut entries = self.receivables()?;
        ReceivableService::delete(&mut entries, id)?;
        self.save(&entries)?;
        tracing::info!(receivable_id = %id, "receivable deleted");
        Ok(entries)
    }

    /// Flips a receivable between pending and received. A derived entry also
    /// flips its invoice, which is persisted without re-running the sync.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id.
    pub fn toggle_receivable(&mut self, id: ReceivableId) -> Result<ReceivableToggled, BooksError> {
        let mut receivables = self.receivables()?;
        let mut invoices = self.invoices()?;
        let Toggled {
            settled,
            source_updated,
        } = ReceivableService::toggle(&mut receivables, &mut invoices, id, self.clock.now())?;

        // The source goes first; a resync rebuilds the entry from it.
        if source_updated {
            self.save(&invoices)?;
        }
        self.save(&receivables)?;
        tracing::info!(receivable_id = %id, received = settled, source_updated, "receivable toggled");
        Ok(ReceivableToggled {
            received: settled,
            receivables,
            invoices,
        })
    }

    /// Reconciles a receivables table; rows matching derived entries are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Import` for an empty table.
    pub fn import_receivables(
        &mut self,
        table: &Table,
    ) -> Result<(ImportSummary, Vec<ReceivableEntry>), BooksError> {
        let outcome = import_rows(self.receivables()?, table, self.clock.now())?;
        let (merged, summary) = split(outcome);
        self.save(&merged)?;
        Ok((summary, merged))
    }

    /// Receivables whose client contains `query`, with their totals.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the collection cannot be read.
    pub fn receivables_by_client(&self, query: &str) -> Result<(Vec<ReceivableEntry>, EntryTotals), BooksError> {
        let entries = self.receivables()?;
        let matching: Vec<_> = EntryService::filter_by_counterparty(&entries, query)
            .into_iter()
            .cloned()
            .collect();
        let totals = EntryService::totals(&matching);
        Ok((matching, totals))
    }

    /// Adds a manual payable.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for invalid input.
    pub fn create_payable(&mut self, input: PayableInput) -> Result<(PayableId, Vec<PayableEntry>), BooksError> {
        let mut entries = self.payables()?;
        let id = PayableService::create(&mut entries, input, self.clock.now())?;
        self.save(&entries)?;
        tracing::info!(payable_id = %id, "payable created");
        Ok((id, entries))
    }

    /// Edits a manual payable.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id, a derived entry or
    /// invalid input.
    pub fn update_payable(&mut self, id: PayableId, input: PayableInput) -> Result<Vec<PayableEntry>, BooksError> {
        let mut entries = self.payables()?;
        PayableService::update(&mut entries, id, input, self.clock.now())?;
        self.save(&entries)?;
        Ok(entries)
    }

    /// Deletes a manual payable.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id or a derived entry.
    pub fn delete_payable(&mut self, id: PayableId) -> Result<Vec<PayableEntry>, BooksError> {
        let mut entries = self.payables()?;
        PayableService::delete(&mut entries, id)?;
        self.save(&entries)?;
        tracing::info!(payable_id = %id, "payable deleted");
        Ok(entries)
    }

    /// Flips a payable between pending and paid. A derived entry also flips
    /// its driver payment, which is persisted without re-running the sync.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id.
    pub fn toggle_payable(&mut self, id: PayableId) -> Result<PayableToggled, BooksError> {
        let mut payables = self.payables()?;
        let mut payments = self.driver_payments()?;
        let Toggled {
            settled,
            source_updated,
        } = PayableService::toggle(&mut payables, &mut payments, id, self.clock.now())?;

        if source_updated {
            self.save(&payments)?;
        }
        self.save(&payables)?;
        tracing::info!(payable_id = %id, paid = settled, source_updated, "payable toggled");
        Ok(PayableToggled {
            paid: settled,
            payables,
            payments,
        })
    }

    /// Reconciles a payables table; rows matching derived entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Import` for an empty table.
    pub fn import_payables(&mut self, table: &Table) -> Result<(ImportSummary, Vec<PayableEntry>), BooksError> {
        let outcome = import_rows(self.payables()?, table, self.clock.now())?;
        let (merged, summary) = split(outcome);
        self.save(&merged)?;
        Ok((summary, merged))
    }

    /// Payables whose supplier contains `query`, with their totals.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the collection cannot be read.
    pub fn payables_by_supplier(&self, query: &str) -> Result<(Vec<PayableEntry>, EntryTotals), BooksError> {
        let entries = self.payables()?;
        let matching: Vec<_> = EntryService::filter_by_counterparty(&entries, query)
            .into_iter()
            .cloned()
            .collect();
        let totals = EntryService::totals(&matching);
        Ok((matching, totals))
    }
}
