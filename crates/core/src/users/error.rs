//! User management error types.

use rotafin_shared::AppError;
use rotafin_shared::types::UserId;
use thiserror::Error;

use super::password::PasswordError;

/// Errors from registration, login and user administration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Another account already uses the email.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Unknown email or wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The account exists but has not been authorized yet.
    #[error("account awaiting authorization")]
    AwaitingAuthorization,

    /// The acting user is not an administrator.
    #[error("only administrators can manage users")]
    NotAdmin,

    /// An administrator tried to delete their own account.
    #[error("you cannot delete your own account")]
    SelfDeletion,

    /// No user with this id.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// No user with this email.
    #[error("no user with email {0}")]
    UnknownEmail(String),

    /// Hashing or verification failed.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl UserError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AwaitingAuthorization => "AWAITING_AUTHORIZATION",
            Self::NotAdmin => "NOT_ADMIN",
            Self::SelfDeletion => "SELF_DELETION",
            Self::NotFound(_) | Self::UnknownEmail(_) => "USER_NOT_FOUND",
            Self::Password(_) => "PASSWORD_ERROR",
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::MissingField(_) | UserError::DuplicateEmail(_) => Self::Validation(err.to_string()),
            UserError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            UserError::AwaitingAuthorization | UserError::NotAdmin | UserError::SelfDeletion => {
                Self::Forbidden(err.to_string())
            }
            UserError::NotFound(_) | UserError::UnknownEmail(_) => Self::NotFound(err.to_string()),
            UserError::Password(_) => Self::Internal(err.to_string()),
        }
    }
}
