//! Accounts receivable.
//!
//! Holds manual entries and one read-only entry per invoice, kept in step by
//! [`InvoiceReceivables`].

pub mod service;
pub mod sync;
pub mod types;

pub use service::ReceivableService;
pub use sync::InvoiceReceivables;
pub use types::{ReceivableEntry, ReceivableInput, ReceivableKind, ReceivableStatus};
