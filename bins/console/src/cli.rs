//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rotafin_core::import::Dataset;

/// Bookkeeping for a small transport business.
#[derive(Debug, Parser)]
#[command(name = "rotafin", version, about)]
pub struct Cli {
    /// Data directory; overrides `storage.data_dir`.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rebuild receivables and payables from their sources and refresh note statuses.
    Sync,

    /// List delivery notes with their current status.
    Notes,

    /// List receivables, optionally filtered by client.
    Receivables {
        /// Case-insensitive client substring.
        #[arg(long, default_value = "")]
        client: String,
    },

    /// List payables, optionally filtered by supplier.
    Payables {
        /// Case-insensitive supplier substring.
        #[arg(long, default_value = "")]
        supplier: String,
    },

    /// Reconcile a CSV table into a collection.
    Import {
        /// invoices, receivables, payables, driver-payments or notes.
        dataset: Dataset,
        /// CSV file with a header row.
        file: PathBuf,
    },

    /// Write a collection as CSV.
    Export {
        /// invoices, receivables, payables, driver-payments or notes.
        dataset: Dataset,
        #[command(flatten)]
        output: Output,
    },

    /// Write the import template of a collection.
    Template {
        /// invoices, receivables, payables, driver-payments or notes.
        dataset: Dataset,
        #[command(flatten)]
        output: Output,
    },

    /// Status counts, optionally limited to a due-date range.
    Report {
        /// First due date included (YYYY-MM-DD).
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,
        /// Last due date included (YYYY-MM-DD).
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,
        #[command(flatten)]
        output: Output,
    },

    /// Dashboard figures as JSON.
    Dashboard,

    /// Printable payment report of one driver.
    Statement {
        /// Driver name.
        driver: String,
        /// First departure date included (YYYY-MM-DD).
        #[arg(long)]
        start: NaiveDate,
        /// Last departure date included (YYYY-MM-DD).
        #[arg(long)]
        end: NaiveDate,
        #[command(flatten)]
        output: Output,
    },

    /// User accounts.
    #[command(subcommand)]
    Users(UsersCommand),

    /// Show or change the company info.
    Company {
        /// New company name.
        #[arg(long)]
        name: Option<String>,
        /// Logo reference (path or data URL).
        #[arg(long, requires = "name")]
        logo: Option<String>,
    },
}

/// `users` subcommands.
#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// Request an account; it stays pending until an administrator authorizes it.
    Register {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Login email.
        #[arg(long)]
        email: String,
        /// Password.
        #[arg(long)]
        password: String,
    },

    /// Authorize a pending account.
    Authorize {
        /// Account email.
        email: String,
        #[command(flatten)]
        admin: AdminLogin,
    },

    /// Send an account back to pending.
    Block {
        /// Account email.
        email: String,
        #[command(flatten)]
        admin: AdminLogin,
    },

    /// List accounts.
    List {
        #[command(flatten)]
        admin: AdminLogin,
    },
}

/// Credentials of the administrator performing a user command.
#[derive(Debug, Args)]
pub struct AdminLogin {
    /// Administrator email.
    #[arg(long)]
    pub admin_email: String,
    /// Administrator password.
    #[arg(long)]
    pub admin_password: String,
}

/// Where a table or document goes.
#[derive(Debug, Args)]
pub struct Output {
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
