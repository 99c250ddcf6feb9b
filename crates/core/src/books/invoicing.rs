//! Invoices and the receivables derived from them.

use rotafin_shared::types::InvoiceId;
use serde::Serialize;

use super::{Books, BooksError, ImportSummary};
use crate::clock::Clock;
use crate::import::{ImportOutcome, Table, import_rows};
use crate::invoices::{Invoice, InvoiceInput, InvoiceService};
use crate::receivables::{InvoiceReceivables, ReceivableEntry};
use crate::store::KeyValueStore;
use crate::sync::{SyncReport, synchronize};

/// Collections after an invoice write.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicesSaved {
    /// All invoices as persisted.
    pub invoices: Vec<Invoice>,
    /// All receivables after the sync.
    pub receivables: Vec<ReceivableEntry>,
    /// What the sync changed.
    #[serde(skip)]
    pub report: SyncReport,
}

impl<S: KeyValueStore, C: Clock> Books<S, C> {
    /// Stored invoices.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the collection cannot be read.
    pub fn invoices(&self) -> Result<Vec<Invoice>, BooksError> {
        self.load()
    }

    /// Persists `invoices` and re-derives the receivables from them.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` on a read or write failure.
    pub fn save_invoices(&mut self, invoices: Vec<Invoice>) -> Result<InvoicesSaved, BooksError> {
        self.save(&invoices)?;
        let synced = synchronize(&InvoiceReceivables, &invoices, self.load()?, self.clock.now());
        self.save(&synced.records)?;
        tracing::info!(
            invoices = invoices.len(),
            created = synced.report.created,
            updated = synced.report.updated,
            removed = synced.report.removed,
            "invoices saved"
        );
        Ok(InvoicesSaved {
            invoices,
            receivables: synced.records,
            report: synced.report,
        })
    }

    /// Adds an invoice.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for invalid input; nothing is written.
    pub fn create_invoice(&mut self, input: InvoiceInput) -> Result<(InvoiceId, InvoicesSaved), BooksError> {
        let mut invoices = self.invoices()?;
        let id = InvoiceService::create(&mut invoices, input, self.clock.now())?;
        Ok((id, self.save_invoices(invoices)?))
    }

    /// Edits an invoice; its receivable follows.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id or invalid input.
    pub fn update_invoice(&mut self, id: InvoiceId, input: InvoiceInput) -> Result<InvoicesSaved, BooksError> {
        let mut invoices = self.invoices()?;
        InvoiceService::update(&mut invoices, id, input, self.clock.now())?;
        self.save_invoices(invoices)
    }

    /// Deletes an invoice and its receivable.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id.
    pub fn delete_invoice(&mut self, id: InvoiceId) -> Result<InvoicesSaved, BooksError> {
        let mut invoices = self.invoices()?;
        InvoiceService::delete(&mut invoices, id)?;
        self.save_invoices(invoices)
    }

    /// Flips an invoice between pending and paid; its receivable follows.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id.
    pub fn toggle_invoice(&mut self, id: InvoiceId) -> Result<InvoicesSaved, BooksError> {
        let mut invoices = self.invoices()?;
        InvoiceService::toggle_status(&mut invoices, id, self.clock.now())?;
        self.save_invoices(invoices)
    }

    /// Reconciles an invoice table into the stored invoices.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Import` for an empty table; bad rows are only
    /// reported in the summary.
    pub fn import_invoices(&mut self, table: &Table) -> Result<(ImportSummary, InvoicesSaved), BooksError> {
        let outcome = import_rows(self.invoices()?, table, self.clock.now())?;
        let (merged, summary) = split(outcome);
        Ok((summary, self.save_invoices(merged)?))
    }
}

pub(super) fn split<T>(outcome: ImportOutcome<T>) -> (Vec<T>, ImportSummary) {
    let ImportOutcome {
        merged,
        created,
        updated,
        skipped,
    } = outcome;
    (
        merged,
        ImportSummary {
            created,
            updated,
            skipped,
        },
    )
}
