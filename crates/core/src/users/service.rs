//! Registration, login and user administration.

use chrono::{DateTime, Utc};
use rotafin_shared::types::UserId;

use super::error::UserError;
use super::password::{hash_password, verify_password};
use super::types::{Registration, Role, User, UserInput, UserStatus};

/// User service for business logic.
pub struct UserService;

impl UserService {
    /// Registers a pending, non-admin account.
    ///
    /// # Errors
    ///
    /// Returns `UserError::MissingField` for a blank name, email or password
    /// and `UserError::DuplicateEmail` when the email is taken.
    pub fn register(
        users: &mut Vec<User>,
        registration: &Registration,
        now: DateTime<Utc>,
    ) -> Result<UserId, UserError> {
        let input = UserInput {
            name: registration.name.clone(),
            email: registration.email.clone(),
            password: registration.password.clone(),
            role: Role::User,
            status: UserStatus::Pending,
        };
        let id = Self::insert(users, &input, now)?;
        tracing::info!(user_id = %id, "user registered, awaiting authorization");
        Ok(id)
    }

    /// Checks credentials and returns the account.
    ///
    /// # Errors
    ///
    /// Returns `UserError::InvalidCredentials` for an unknown email or wrong
    /// password and `UserError::AwaitingAuthorization` for a pending account.
    pub fn authenticate<'a>(users: &'a [User], email: &str, password: &str) -> Result<&'a User, UserError> {
        let user = Self::find_by_email(users, email).ok_or(UserError::InvalidCredentials)?;
        if !verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "password mismatch");
            return Err(UserError::InvalidCredentials);
        }
        if user.status != UserStatus::Authorized {
            return Err(UserError::AwaitingAuthorization);
        }
        Ok(user)
    }

    /// Creates an account on behalf of an administrator.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotAdmin` unless `actor` is a stored, authorized
    /// administrator, plus the validation errors of [`UserService::register`].
    pub fn create(
        users: &mut Vec<User>,
        actor: UserId,
        input: &UserInput,
        now: DateTime<Utc>,
    ) -> Result<UserId, UserError> {
        Self::ensure_admin_actor(users, actor)?;
        let id = Self::insert(users, input, now)?;
        tracing::info!(user_id = %id, actor = %actor, role = %input.role, "user created");
        Ok(id)
    }

    /// Replaces an account's fields; a blank password keeps the current hash.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotAdmin`, `UserError::NotFound`,
    /// `UserError::MissingField` or `UserError::DuplicateEmail`.
    pub fn update(
        users: &mut [User],
        actor: UserId,
        id: UserId,
        input: &UserInput,
        now: DateTime<Utc>,
    ) -> Result<(), UserError> {
        Self::ensure_admin_actor(users, actor)?;
        Self::validate_profile(input)?;
        let index = Self::position(users, id)?;
        if users
            .iter()
            .any(|u| u.id != id && same_email(&u.email, &input.email))
        {
            return Err(UserError::DuplicateEmail(input.email.trim().to_string()));
        }

        let password_hash = if input.password.is_empty() {
            None
        } else {
            Some(hash_password(&input.password)?)
        };

        let user = &mut users[index];
        user.name = input.name.trim().to_string();
        user.email = input.email.trim().to_string();
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        user.role = input.role;
        user.status = input.status;
        user.updated_at = now;
        tracing::info!(user_id = %id, actor = %actor, "user updated");
        Ok(())
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotAdmin`, `UserError::SelfDeletion` or
    /// `UserError::NotFound`.
    pub fn delete(users: &mut Vec<User>, actor: UserId, id: UserId) -> Result<User, UserError> {
        Self::ensure_admin_actor(users, actor)?;
        if actor == id {
            return Err(UserError::SelfDeletion);
        }
        let index = Self::position(users, id)?;
        tracing::info!(user_id = %id, actor = %actor, "user deleted");
        Ok(users.remove(index))
    }

    /// Authorizes or blocks an account.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotAdmin` or `UserError::NotFound`.
    pub fn set_status(
        users: &mut [User],
        actor: UserId,
        id: UserId,
        status: UserStatus,
        now: DateTime<Utc>,
    ) -> Result<(), UserError> {
        Self::ensure_admin_actor(users, actor)?;
        let index = Self::position(users, id)?;
        let user = &mut users[index];
        user.status = status;
        user.updated_at = now;
        tracing::info!(user_id = %id, actor = %actor, status = status.label(), "user status changed");
        Ok(())
    }

    /// Makes sure the master administrator exists.
    ///
    /// Returns the id of the account created, `None` when a user with that
    /// email already exists (it is left untouched).
    ///
    /// # Errors
    ///
    /// Returns `UserError::MissingField` for blank settings.
    pub fn ensure_admin(
        users: &mut Vec<User>,
        name: &str,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserId>, UserError> {
        if Self::find_by_email(users, email).is_some() {
            return Ok(None);
        }
        let input = UserInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Admin,
            status: UserStatus::Authorized,
        };
        let id = Self::insert(users, &input, now)?;
        tracing::info!(user_id = %id, "master administrator created");
        Ok(Some(id))
    }

    /// Account with `email`, ignoring case and surrounding blanks.
    #[must_use]
    pub fn find_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
        users.iter().find(|u| same_email(&u.email, email))
    }

    fn insert(users: &mut Vec<User>, input: &UserInput, now: DateTime<Utc>) -> Result<UserId, UserError> {
        Self::validate_profile(input)?;
        if input.password.is_empty() {
            return Err(UserError::MissingField("password"));
        }
        if Self::find_by_email(users, &input.email).is_some() {
            return Err(UserError::DuplicateEmail(input.email.trim().to_string()));
        }

        let user = User {
            id: UserId::new(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash: hash_password(&input.password)?,
            role: input.role,
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        let id = user.id;
        users.push(user);
        Ok(id)
    }

    fn validate_profile(input: &UserInput) -> Result<(), UserError> {
        if input.name.trim().is_empty() {
            return Err(UserError::MissingField("name"));
        }
        if input.email.trim().is_empty() {
            return Err(UserError::MissingField("email"));
        }
        Ok(())
    }

    /// `actor` must be an authorized administrator present in `users`.
    pub(crate) fn ensure_admin_actor(users: &[User], actor: UserId) -> Result<(), UserError> {
        if users.iter().any(|u| u.id == actor && u.is_active_admin()) {
            Ok(())
        } else {
            tracing::warn!(actor = %actor, "user administration refused");
            Err(UserError::NotAdmin)
        }
    }

    fn position(users: &[User], id: UserId) -> Result<usize, UserError> {
        users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::NotFound(id))
    }
}

fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
