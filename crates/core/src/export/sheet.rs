//! A named table of display strings, written as CSV.

use std::io;

use serde::Serialize;

use super::error::ExportError;
use crate::import::Schema;
use crate::reports::PeriodReport;

/// Header row plus data rows, every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    /// Sheet name, also used for the default file name.
    pub name: String,
    /// Header cells.
    pub headers: Vec<String>,
    /// Data rows in header order.
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Creates an empty sheet with the given headers.
    #[must_use]
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Import template: the schema headers and its example row.
    #[must_use]
    pub fn template(schema: &Schema) -> Self {
        let mut sheet = Self::new(schema.sheet, &schema.headers());
        sheet
            .rows
            .push(schema.example.iter().map(ToString::to_string).collect());
        sheet
    }

    /// `Categoria,Status,Quantidade` lines of a period report.
    #[must_use]
    pub fn report(report: &PeriodReport) -> Self {
        let mut sheet = Self::new("Relatório", &PeriodReport::HEADERS);
        sheet.rows = report
            .rows
            .iter()
            .map(|r| vec![r.category.to_string(), r.status.to_string(), r.count.to_string()])
            .collect();
        sheet
    }

    /// Writes the sheet as comma-separated CSV with a header row.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Write` if the writer fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&self.headers)?;
        for row in &self.rows {
            csv.write_record(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// CSV text of the sheet.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Write` if encoding fails.
    pub fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ExportError::Write(e.to_string()))
    }
}
