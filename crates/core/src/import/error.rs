//! Import error types.

use rotafin_shared::AppError;
use thiserror::Error;

use crate::error::RecordError;

/// File-level failures; nothing is merged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The table has a header row but no data rows (or nothing at all).
    #[error("the file has no data rows")]
    Empty,

    /// The file cannot be read or parsed as a table.
    #[error("unreadable file: {0}")]
    Unreadable(String),
}

impl ImportError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "IMPORT_EMPTY",
            Self::Unreadable(_) => "IMPORT_UNREADABLE",
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Unreadable(err.to_string())
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Unreadable(err.to_string())
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        Self::ImportFile(err.to_string())
    }
}

/// Reason a single row was skipped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    /// A natural-key column is missing or blank.
    #[error("missing {0}")]
    MissingKey(&'static str),

    /// A present cell could not be parsed.
    #[error("invalid {column}: '{value}'")]
    Invalid {
        /// Column header.
        column: &'static str,
        /// Raw cell content.
        value: String,
    },

    /// A column needed to create a new record is missing.
    #[error("{0} is required to create a new record")]
    MissingForCreate(&'static str),

    /// The row matches a record that cannot be changed this way.
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl RowError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingKey(_) => "IMPORT_MISSING_KEY",
            Self::Invalid { .. } => "IMPORT_INVALID_CELL",
            Self::MissingForCreate(_) => "IMPORT_MISSING_FIELD",
            Self::Record(err) => err.error_code(),
        }
    }
}
