//! Command handlers.

mod accounts;
mod documents;
mod ledger;

use std::fs;

use anyhow::Context;
use rotafin_core::Books;
use rotafin_core::clock::SystemClock;
use rotafin_core::export::DisplayFormat;
use rotafin_store::JsonDirStore;

use crate::cli::{Command, Output};

/// Books opened by the console plus the display locale.
pub struct Session {
    books: Books<JsonDirStore, SystemClock>,
    format: DisplayFormat,
}

impl Session {
    pub const fn new(books: Books<JsonDirStore, SystemClock>, format: DisplayFormat) -> Self {
        Self { books, format }
    }

    /// Runs one command to completion.
    pub fn execute(mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Sync => self.sync(),
            Command::Notes => self.notes(),
            Command::Receivables { client } => self.receivables(&client),
            Command::Payables { supplier } => self.payables(&supplier),
            Command::Import { dataset, file } => self.import(dataset, &file),
            Command::Export { dataset, output } => self.export(dataset, &output),
            Command::Template { dataset, output } => Self::template(dataset, &output),
            Command::Report { start, end, output } => self.report(start, end, &output),
            Command::Dashboard => self.dashboard(),
            Command::Statement {
                driver,
                start,
                end,
                output,
            } => self.statement(&driver, start, end, &output),
            Command::Users(command) => self.users(command),
            Command::Company { name, logo } => self.company(name.as_deref(), logo.as_deref()),
        }
    }
}

/// Writes `text` to the requested file, or stdout.
fn emit(output: &Output, text: &str) -> anyhow::Result<()> {
    match &output.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "output written");
        }
        None => print!("{text}"),
    }
    Ok(())
}
