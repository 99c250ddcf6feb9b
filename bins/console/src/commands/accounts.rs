//! User accounts and company info.

use rotafin_core::users::{Registration, User, UserStatus};

use super::Session;
use crate::cli::{AdminLogin, UsersCommand};

impl Session {
    pub(super) fn users(&mut self, command: UsersCommand) -> anyhow::Result<()> {
        match command {
            UsersCommand::Register { name, email, password } => {
                self.books.register(&Registration { name, email, password })?;
                println!("account requested; waiting for an administrator");
            }
            UsersCommand::Authorize { email, admin } => {
                let actor = self.login(&admin)?;
                let user = self.books.set_user_status(actor.id, &email, UserStatus::Authorized)?;
                println!("{} {}", user.email, user.status.label());
            }
            UsersCommand::Block { email, admin } => {
                let actor = self.login(&admin)?;
                let user = self.books.set_user_status(actor.id, &email, UserStatus::Pending)?;
                println!("{} {}", user.email, user.status.label());
            }
            UsersCommand::List { admin } => {
                let actor = self.login(&admin)?;
                if !actor.is_active_admin() {
                    anyhow::bail!(rotafin_shared::AppError::Forbidden(
                        "only administrators can list users".to_string()
                    ));
                }
                for user in self.books.users()? {
                    println!("{}\t{}\t{}\t{}", user.name, user.email, user.role, user.status.label());
                }
            }
        }
        Ok(())
    }

    fn login(&self, admin: &AdminLogin) -> anyhow::Result<User> {
        Ok(self.books.authenticate(&admin.admin_email, &admin.admin_password)?)
    }

    pub(super) fn company(&mut self, name: Option<&str>, logo: Option<&str>) -> anyhow::Result<()> {
        let info = match name {
            Some(name) => self.books.update_company(name, logo)?,
            None => self.books.company()?,
        };
        println!("{}", info.name);
        if let Some(logo) = &info.logo {
            println!("logo: {logo}");
        }
        Ok(())
    }
}
