//! User accounts and company info.

use rotafin_shared::types::UserId;

use super::{Books, BooksError};
use crate::clock::Clock;
use crate::company::CompanyInfo;
use crate::store::{self, Collection, KeyValueStore};
use crate::users::{Registration, User, UserError, UserInput, UserService, UserStatus};

impl<S: KeyValueStore, C: Clock> Books<S, C> {
    /// Stored user accounts.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the collection cannot be read.
    pub fn users(&self) -> Result<Vec<User>, BooksError> {
        self.load()
    }

    /// Self-service registration; the account starts pending.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::User` for blank fields or a taken email.
    pub fn register(&mut self, registration: &Registration) -> Result<UserId, BooksError> {
        let mut users = self.users()?;
        let id = UserService::register(&mut users, registration, self.clock.now())?;
        self.save(&users)?;
        Ok(id)
    }

    /// Logs a user in.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::User` for bad credentials or a pending account.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, BooksError> {
        let users = self.users()?;
        Ok(UserService::authenticate(&users, email, password)?.clone())
    }

    /// Creates the configured master administrator unless the email exists.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::User` for blank settings.
    pub fn ensure_admin(&mut self, name: &str, email: &str, password: &str) -> Result<Option<UserId>, BooksError> {
        let mut users = self.users()?;
        let created = UserService::ensure_admin(&mut users, name, email, password, self.clock.now())?;
        if created.is_some() {
            self.save(&users)?;
        }
        Ok(created)
    }

    /// Creates an account on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::User` when `actor` is not a stored administrator or
    /// the input is invalid.
    pub fn create_user(&mut self, actor: UserId, input: &UserInput) -> Result<(UserId, Vec<User>), BooksError> {
        let mut users = self.users()?;
        let id = UserService::create(&mut users, actor, input, self.clock.now())?;
        self.save(&users)?;
        Ok((id, users))
    }

    /// Edits an account on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::User` when `actor` is not a stored administrator,
    /// the id is unknown or the input is invalid.
    pub fn update_user(&mut self, actor: UserId, id: UserId, input: &UserInput) -> Result<Vec<User>, BooksError> {
        let mut users = self.users()?;
        UserService::update(&mut users, actor, id, input, self.clock.now())?;
        self.save(&users)?;
        Ok(users)
    }

    /// Deletes an account on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::User` when `actor` is not a stored administrator,
    /// targets themselves, or the id is unknown.
    pub fn delete_user(&mut self, actor: UserId, id: UserId) -> Result<Vec<User>, BooksError> {
        let mut users = self.users()?;
        UserService::delete(&mut users, actor, id)?;
        self.save(&users)?;
        Ok(users)
    }

    /// Authorizes or blocks the account with `email` on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::User` when `actor` is not a stored administrator or
    /// no account uses the email.
    pub fn set_user_status(&mut self, actor: UserId, email: &str, status: UserStatus) -> Result<User, BooksError> {
        let mut users = self.users()?;
        UserService::ensure_admin_actor(&users, actor)?;
        let id = UserService::find_by_email(&users, email)
            .map(|u| u.id)
            .ok_or_else(|| UserError::UnknownEmail(email.trim().to_string()))?;
        UserService::set_status(&mut users, actor, id, status, self.clock.now())?;
        self.save(&users)?;
        let user = users.into_iter().find(|u| u.id == id).ok_or(UserError::NotFound(id))?;
        Ok(user)
    }

    /// Company info, or the default when never saved.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the value cannot be read.
    pub fn company(&self) -> Result<CompanyInfo, BooksError> {
        Ok(store::load_value(&self.store, Collection::CompanyInfo)?.unwrap_or_default())
    }

    /// Replaces the company info.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for a blank name.
    pub fn update_company(&mut self, name: &str, logo: Option<&str>) -> Result<CompanyInfo, BooksError> {
        let info = CompanyInfo::new(name, logo)?;
        store::save_value(&mut self.store, Collection::CompanyInfo, &info)?;
        tracing::info!(name = %info.name, "company info updated");
        Ok(info)
    }
}
