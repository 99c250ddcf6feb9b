//! Core business logic for Rotafin.
//!
//! This crate contains pure business logic with ZERO storage backend dependencies.
//! Every collection is read and written through the [`store::KeyValueStore`] port,
//! so the synchronizers, importers and services are plain functions over explicit
//! inputs and outputs.
//!
//! # Modules
//!
//! - `notes` - Delivery notes and status derivation
//! - `sync` - Generic derived-ledger synchronizer
//! - `invoices` / `receivables` - Invoices and the receivables derived from them
//! - `driver_payments` / `payables` - Driver payments and the payables derived from them
//! - `import` / `export` - Tabular reconciliation, templates and printable documents
//! - `reports` - Period report and dashboard metrics
//! - `users` - Accounts, roles and password hashing
//! - `books` - Write paths that persist a collection and everything derived from it

pub mod books;
pub mod clock;
pub mod company;
pub mod driver_payments;
pub mod entries;
pub mod error;
pub mod export;
pub mod import;
pub mod invoices;
pub mod notes;
pub mod payables;
pub mod receivables;
pub mod reports;
pub mod store;
pub mod sync;
pub mod users;

pub use books::Books;
pub use error::RecordError;
