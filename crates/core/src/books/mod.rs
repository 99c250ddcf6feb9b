//! Persisted write paths.
//!
//! [`Books`] owns the store and the clock and is the only place where a
//! collection is written. Every write of a source collection (invoices,
//! driver payments) runs its synchronizer and persists the dependent
//! collection in the same call, and every write returns the updated
//! collections so callers never re-read the store to refresh a view.
//!
//! Toggling a derived entry is the one exception: the linked source only has
//! its status flipped and is persisted without a sync pass.

mod accounts;
mod admin;
mod deliveries;
mod error;
mod freight;
mod invoicing;
mod reporting;


pub use accounts::{PayableToggled, ReceivableToggled};
pub use error::BooksError;
pub use freight::PaymentsSaved;
pub use invoicing::InvoicesSaved;
pub use reporting::ResyncReport;

use serde::Serialize;

use crate::clock::Clock;
use crate::import::SkippedRow;
use crate::store::{self, KeyValueStore, Record};

/// Rows applied by an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows that created a record.
    pub created: usize,
    /// Rows that updated a record.
    pub updated: usize,
    /// Rows that were skipped.
    pub skipped: Vec<SkippedRow>,
}

/// The application state behind a key-value store.
#[derive(Debug, Clone)]
pub struct Books<S, C> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> Books<S, C> {
    /// Wraps a store; all timestamps and business dates come from `clock`.
    pub const fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Releases the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn load<T: Record>(&self) -> Result<Vec<T>, BooksError> {
        store::load(&self.store).map_err(BooksError::from)
    }

    fn save<T: Record>(&mut self, records: &[T]) -> Result<(), BooksError> {
        store::save(&mut self.store, records).map_err(BooksError::from)
    }
}
