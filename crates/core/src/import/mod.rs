//! Bulk import reconciliation.
//!
//! A [`Table`] (header row plus data rows, read from CSV) is matched against an
//! existing collection by natural key:
//!
//! | Collection      | Natural key                   |
//! |-----------------|-------------------------------|
//! | invoices        | number                        |
//! | driver payments | (invoice, driver name)        |
//! | notes           | number                        |
//! | receivables     | (description, client)         |
//! | payables        | (description, supplier)       |
//!
//! Matching records get the fields present in the row; the rest are created.
//! Bad rows are reported in [`ImportOutcome::skipped`] and never abort the
//! batch. The merged collection must then be saved through the normal write
//! path so dependent entries and note statuses follow.

pub mod cells;
pub mod error;
pub mod reconcile;
pub mod records;
pub mod schema;
pub mod table;

#[cfg(test)]
mod reconcile_props;

pub use cells::{parse_amount, parse_date, serial_to_date};
pub use error::{ImportError, RowError};
pub use reconcile::{ImportOutcome, Importable, SkippedRow, import_rows};
pub use schema::{Column, Dataset, MappedRow, Schema};
pub use table::{Cell, Row, Table};
