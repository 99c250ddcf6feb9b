//! Tabular exports, import templates and printable documents.
//!
//! Every exported cell is a display string: pt-BR amounts (`R$ 1.500,00`),
//! `DD/MM/YYYY` dates and status labels. Sheets are written as CSV.

pub mod document;
pub mod error;
pub mod format;
pub mod sheet;
pub mod tables;

#[cfg(test)]
mod tests;

pub use document::{Page, PagedDocument};
pub use error::ExportError;
pub use format::{DisplayFormat, format_date, format_optional_date};
pub use sheet::Sheet;
pub use tables::{Exportable, export_sheet};
