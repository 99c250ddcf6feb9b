//! Export error types.

use rotafin_shared::AppError;
use thiserror::Error;

/// Errors that can occur while producing an export.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The collection has no records.
    #[error("nothing to export: {0} is empty")]
    Empty(&'static str),

    /// Rows per page must be at least one.
    #[error("rows per page must be positive")]
    InvalidPageSize,

    /// The output could not be written.
    #[error("export write failed: {0}")]
    Write(String),
}

impl ExportError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Empty(_) => "EXPORT_EMPTY",
            Self::InvalidPageSize => "EXPORT_INVALID_PAGE_SIZE",
            Self::Write(_) => "EXPORT_WRITE_FAILED",
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Write(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Write(err.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Empty(_) | ExportError::InvalidPageSize => Self::Validation(err.to_string()),
            ExportError::Write(_) => Self::Storage(err.to_string()),
        }
    }
}
