//! User accounts, roles and password hashing.
//!
//! New accounts start `pending` and cannot log in until an administrator
//! authorizes them. Passwords are only ever stored as Argon2id hashes.

pub mod error;
mod password;
pub mod service;
pub mod types;

pub use error::UserError;
pub use password::{PasswordError, hash_password, verify_password};
pub use service::UserService;
pub use types::{Registration, Role, User, UserInput, UserStatus};
