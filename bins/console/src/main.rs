//! Rotafin console.
//!
//! Main entry point; every command runs against the data directory and
//! exits with a sysexits-style code on failure.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rotafin_core::Books;
use rotafin_core::books::BooksError;
use rotafin_core::clock::SystemClock;
use rotafin_core::export::DisplayFormat;
use rotafin_core::import::ImportError;
use rotafin_core::store::StoreError;
use rotafin_shared::{AppConfig, AppError};

use crate::cli::Cli;
use crate::commands::Session;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load().map_err(AppError::from)?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }
    init_tracing(&config);

    let tz = config.locale.tz()?;
    let store = rotafin_store::connect(&config.storage.data_dir)
        .with_context(|| format!("opening {}", config.storage.data_dir.display()))?;
    tracing::debug!(data_dir = %config.storage.data_dir.display(), "store opened");

    let mut books = Books::new(store, SystemClock::new(tz));
    if let (Some(email), Some(password)) = (&config.admin.email, &config.admin.password) {
        books.ensure_admin(&config.admin.name, email, password)?;
    }

    let format = DisplayFormat {
        currency: config.locale.currency,
        timezone: tz,
    };
    Session::new(books, format).execute(cli.command)
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config.logging.filter.as_str().into());
    let json = config.logging.json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn exit_code(err: anyhow::Error) -> u8 {
    let app = match err.downcast::<AppError>() {
        Ok(app) => app,
        Err(err) => match err.downcast::<BooksError>() {
            Ok(e) => e.into(),
            Err(err) => match err.downcast::<ImportError>() {
                Ok(e) => e.into(),
                Err(err) => match err.downcast::<StoreError>() {
                    Ok(e) => e.into(),
                    Err(_) => return 1,
                },
            },
        },
    };
    u8::try_from(app.exit_code()).unwrap_or(1)
}
