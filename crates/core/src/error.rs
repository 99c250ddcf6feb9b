//! Errors raised by the record services (invoices, entries, payments, notes).

use rotafin_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Largest amount a record may carry (9.999.999.999.999,99).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2);

/// Errors that can occur while editing a record collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A synchronized entry was edited or deleted directly.
    #[error("{collection} entry {id} is linked to {source_kind}; edit the {source_kind} instead")]
    DerivedEntryImmutable {
        /// Collection the entry belongs to.
        collection: &'static str,
        /// Entry identifier.
        id: String,
        /// Kind of record the entry is derived from.
        source_kind: &'static str,
    },

    /// No record with the given identifier.
    #[error("{collection} record not found: {id}")]
    NotFound {
        /// Collection searched.
        collection: &'static str,
        /// Missing identifier.
        id: String,
    },

    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// An amount is below zero.
    #[error("{0} cannot be negative")]
    NegativeAmount(&'static str),

    /// An amount is above [`MAX_AMOUNT`].
    #[error("{0} exceeds the maximum amount")]
    AmountTooLarge(&'static str),

    /// A date range ends before it starts.
    #[error("period ends before it starts")]
    InvertedPeriod,
}

impl RecordError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(collection: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            collection,
            id: id.to_string(),
        }
    }

    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DerivedEntryImmutable { .. } => "DERIVED_ENTRY_IMMUTABLE",
            Self::NotFound { .. } => "RECORD_NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::AmountTooLarge(_) => "AMOUNT_TOO_LARGE",
            Self::InvertedPeriod => "INVERTED_PERIOD",
        }
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::DerivedEntryImmutable { .. } => Self::DerivedEntryImmutable(err.to_string()),
            RecordError::NotFound { .. } => Self::NotFound(err.to_string()),
            RecordError::MissingField(_)
            | RecordError::NegativeAmount(_)
            | RecordError::AmountTooLarge(_)
            | RecordError::InvertedPeriod => Self::Validation(err.to_string()),
        }
    }
}

/// Rejects blank text for a required field.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::MissingField(field));
    }
    Ok(())
}

/// Rejects negative amounts and amounts above [`MAX_AMOUNT`].
pub(crate) fn valid_amount(field: &'static str, value: Decimal) -> Result<(), RecordError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(RecordError::NegativeAmount(field));
    }
    if value > MAX_AMOUNT {
        return Err(RecordError::AmountTooLarge(field));
    }
    Ok(())
}
