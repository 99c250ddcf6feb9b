//! Derived-ledger synchronization.
//!
//! A *source* collection (invoices, driver payments) owns a derived subset of a
//! *dependent* collection (receivables, payables). After every save of the
//! source, [`synchronize`] rebuilds that subset so it stays in exact 1:1
//! correspondence with the sources, leaving manual entries untouched.
//!
//! The one write that travels the other way is [`toggle_settlement`]: flipping
//! the settled flag of a derived entry flips its source's status too, without
//! re-running the full sync.

pub mod engine;
pub mod settle;

#[cfg(test)]
mod engine_props;

pub use engine::{Pairing, SyncReport, Synced, Toggled, synchronize, toggle_settlement};
pub use settle::{Settlement, parse_flag};
