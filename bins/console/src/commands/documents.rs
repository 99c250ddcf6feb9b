//! Exports, templates, reports and statements.

use chrono::NaiveDate;
use rotafin_core::export::Sheet;
use rotafin_core::import::Dataset;
use rotafin_core::reports::ReportPeriod;

use super::{Session, emit};
use crate::cli::Output;

impl Session {
    pub(super) fn export(&self, dataset: Dataset, output: &Output) -> anyhow::Result<()> {
        let sheet = self.books.export(dataset, &self.format)?;
        emit(output, &sheet.to_csv_string()?)
    }

    pub(super) fn template(dataset: Dataset, output: &Output) -> anyhow::Result<()> {
        emit(output, &Sheet::template(dataset.schema()).to_csv_string()?)
    }

    pub(super) fn report(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        output: &Output,
    ) -> anyhow::Result<()> {
        let report = self.books.period_report(ReportPeriod { start, end })?;
        emit(output, &Sheet::report(&report).to_csv_string()?)
    }

    pub(super) fn dashboard(&self) -> anyhow::Result<()> {
        let metrics = self.books.dashboard()?;
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        Ok(())
    }

    pub(super) fn statement(
        &self,
        driver: &str,
        start: NaiveDate,
        end: NaiveDate,
        output: &Output,
    ) -> anyhow::Result<()> {
        let document = self.books.statement_document(driver, start, end, &self.format)?;
        emit(output, &document.to_text()?)
    }
}
