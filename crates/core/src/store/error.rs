//! Storage error types.

use rotafin_shared::AppError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not read a key.
    #[error("failed to read '{key}': {message}")]
    Read {
        /// Key being read.
        key: String,
        /// Backend message.
        message: String,
    },

    /// The backend could not write a key.
    #[error("failed to write '{key}': {message}")]
    Write {
        /// Key being written.
        key: String,
        /// Backend message.
        message: String,
    },

    /// A stored value is not valid for its collection.
    #[error("collection '{key}' is corrupt: {source}")]
    Corrupt {
        /// Collection key.
        key: &'static str,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized.
    #[error("failed to encode collection '{key}': {source}")]
    Encode {
        /// Collection key.
        key: &'static str,
        /// Encoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The store cannot be opened.
    #[error("storage configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Create a read error.
    #[must_use]
    pub fn read(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Read {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create a write error.
    #[must_use]
    pub fn write(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Write {
            key: key.into(),
            message: message.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Configuration(_) => Self::Configuration(err.to_string()),
            _ => Self::Storage(err.to_string()),
        }
    }
}
