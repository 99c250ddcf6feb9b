//! Reports, exports and the full re-sync.

use chrono::NaiveDate;
use serde::Serialize;

use super::{Books, BooksError};
use crate::clock::Clock;
use crate::export::{DisplayFormat, PagedDocument, Sheet, export_sheet};
use crate::import::Dataset;
use crate::notes::{Note, NoteService};
use crate::reports::{DashboardMetrics, PeriodReport, ReportInput, ReportPeriod, ReportService};
use crate::store::KeyValueStore;
use crate::sync::SyncReport;
use crate::users::User;

/// What a full re-sync changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResyncReport {
    /// Receivables created from invoices.
    pub receivables_created: usize,
    /// Receivables regenerated in place.
    pub receivables_updated: usize,
    /// Receivables dropped.
    pub receivables_removed: usize,
    /// Payables created from driver payments.
    pub payables_created: usize,
    /// Payables regenerated in place.
    pub payables_updated: usize,
    /// Payables dropped.
    pub payables_removed: usize,
    /// Notes whose derived status changed.
    pub note_status_changes: usize,
}

impl ResyncReport {
    fn new(receivables: SyncReport, payables: SyncReport, note_status_changes: usize) -> Self {
        Self {
            receivables_created: receivables.created,
            receivables_updated: receivables.updated,
            receivables_removed: receivables.removed,
            payables_created: payables.created,
            payables_updated: payables.updated,
            payables_removed: payables.removed,
            note_status_changes,
        }
    }
}

impl<S: KeyValueStore, C: Clock> Books<S, C> {
    /// Re-runs both synchronizers from the stored sources and re-derives note
    /// statuses, persisting everything.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` on a read or write failure.
    pub fn resync(&mut self) -> Result<ResyncReport, BooksError> {
        let receivables = self.save_invoices(self.invoices()?)?.report;
        let payables = self.save_driver_payments(self.driver_payments()?)?.report;

        let mut notes: Vec<Note> = self.load()?;
        let changed = NoteService::refresh(&mut notes, self.clock.today());
        self.save(&notes)?;

        let report = ResyncReport::new(receivables, payables, changed);
        tracing::info!(?report, "books re-synchronized");
        Ok(report)
    }

    /// Status counts over an optional due-date range.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Report` for an inverted range.
    pub fn period_report(&self, period: ReportPeriod) -> Result<PeriodReport, BooksError> {
        let (invoices, payables, receivables, notes) =
            (self.invoices()?, self.payables()?, self.receivables()?, self.notes()?);
        let input = ReportInput {
            invoices: &invoices,
            payables: &payables,
            receivables: &receivables,
            notes: &notes,
        };
        Ok(ReportService::period_report(input, period, self.clock.today())?)
    }

    /// Headline dashboard figures.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if a collection cannot be read.
    pub fn dashboard(&self) -> Result<DashboardMetrics, BooksError> {
        let (invoices, payables, receivables, notes) =
            (self.invoices()?, self.payables()?, self.receivables()?, self.notes()?);
        let users: Vec<User> = self.load()?;
        let input = ReportInput {
            invoices: &invoices,
            payables: &payables,
            receivables: &receivables,
            notes: &notes,
        };
        Ok(ReportService::dashboard(input, users.len()))
    }

    /// A whole collection as a display sheet.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Export` when the collection is empty.
    pub fn export(&self, dataset: Dataset, format: &DisplayFormat) -> Result<Sheet, BooksError> {
        let sheet = match dataset {
            Dataset::Invoices => export_sheet(&self.invoices()?, format),
            Dataset::Receivables => export_sheet(&self.receivables()?, format),
            Dataset::Payables => export_sheet(&self.payables()?, format),
            Dataset::DriverPayments => export_sheet(&self.driver_payments()?, format),
            Dataset::Notes => export_sheet(&self.notes()?, format),
        }?;
        Ok(sheet)
    }

    /// Printable payment report of one driver.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for a blank driver, an inverted period or
    /// an empty result.
    pub fn statement_document(
        &self,
        driver: &str,
        start: NaiveDate,
        end: NaiveDate,
        format: &DisplayFormat,
    ) -> Result<PagedDocument, BooksError> {
        let statement = self.driver_statement(driver, start, end)?;
        let company = self.company()?;
        Ok(PagedDocument::driver_statement(
            &statement,
            &company.name,
            self.clock.today(),
            format,
        ))
    }
}
