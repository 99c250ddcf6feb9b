//! Errors surfaced by the persisted write paths.

use rotafin_shared::AppError;
use thiserror::Error;

use crate::error::RecordError;
use crate::export::ExportError;
use crate::import::ImportError;
use crate::reports::ReportError;
use crate::store::StoreError;
use crate::users::UserError;

/// Any failure of a [`Books`](super::Books) operation.
#[derive(Debug, Error)]
pub enum BooksError {
    /// Reading or writing a collection failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record edit was rejected.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// An import file was rejected as a whole.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// A user operation was rejected.
    #[error(transparent)]
    User(#[from] UserError),

    /// A report could not be computed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// An export could not be produced.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl BooksError {
    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Store(_) => "STORAGE_ERROR",
            Self::Record(e) => e.error_code(),
            Self::Import(e) => e.error_code(),
            Self::User(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }
}

impl From<BooksError> for AppError {
    fn from(err: BooksError) -> Self {
        match err {
            BooksError::Store(e) => e.into(),
            BooksError::Record(e) => e.into(),
            BooksError::Import(e) => e.into(),
            BooksError::User(e) => e.into(),
            BooksError::Report(e) => e.into(),
            BooksError::Export(e) => e.into(),
        }
    }
}
