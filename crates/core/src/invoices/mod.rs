//! Customer invoices.
//!
//! Invoices are the source side of the receivables sync: every invoice owns
//! exactly one derived accounts-receivable entry (see
//! [`crate::receivables::InvoiceReceivables`]).

pub mod service;
pub mod types;

pub use service::InvoiceService;
pub use types::{Invoice, InvoiceInput, InvoiceStatus};
