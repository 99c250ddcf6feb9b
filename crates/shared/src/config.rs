//! Application configuration management.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::AppError;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Locale configuration.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Master administrator bootstrap.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON document per collection.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// IANA time zone used to decide what "today" is.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Currency used when formatting amounts.
    #[serde(default)]
    pub currency: Currency,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            currency: Currency::default(),
        }
    }
}

fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}

impl LocaleConfig {
    /// Parses the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the zone name is unknown.
    pub fn tz(&self) -> Result<Tz, AppError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| AppError::Configuration(format!("invalid timezone '{}': {e}", self.timezone)))
    }

    /// Calendar date of `now` in the configured zone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the zone name is unknown.
    pub fn today(&self, now: DateTime<Utc>) -> Result<NaiveDate, AppError> {
        Ok(now.with_timezone(&self.tz()?).date_naive())
    }
}

/// Master administrator bootstrap configuration.
///
/// When both `email` and `password` are set, the account is created on startup
/// if no user with that email exists.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Display name.
    #[serde(default = "default_admin_name")]
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: Option<String>,
    /// Initial password (hashed before it is stored).
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            name: default_admin_name(),
            email: None,
            password: None,
        }
    }
}

fn default_admin_name() -> String {
    "Admin Master".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "rotafin=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ROTAFIN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
