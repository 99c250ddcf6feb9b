//! User data types.

use std::fmt;

use chrono::{DateTime, Utc};
use rotafin_shared::types::UserId;
use serde::{Deserialize, Serialize};

use crate::store::{Collection, Record};

/// User role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular operator.
    #[default]
    User,
    /// Can manage users.
    Admin,
}

impl Role {
    /// Returns true if this role can manage users.
    #[must_use]
    pub const fn can_manage_users(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Whether an account may log in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Registered or blocked; cannot log in.
    #[default]
    Pending,
    /// Approved by an administrator.
    Authorized,
}

impl UserStatus {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Authorized => "Autorizado",
        }
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique ignoring case.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// Role.
    pub role: Role,
    /// Login status.
    pub status: UserStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// True for an authorized administrator.
    #[must_use]
    pub fn is_active_admin(&self) -> bool {
        self.role.can_manage_users() && self.status == UserStatus::Authorized
    }
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;
}

/// Self-service registration form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Administrator form for creating or editing a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInput {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password; blank on update keeps the current one.
    #[serde(default)]
    pub password: String,
    /// Role.
    #[serde(default)]
    pub role: Role,
    /// Login status.
    #[serde(default)]
    pub status: UserStatus,
}
