//! Accounts payable.
//!
//! Holds manual entries and one read-only entry per driver payment, kept in
//! step by [`DriverPaymentPayables`].

pub mod service;
pub mod sync;
pub mod types;

pub use service::PayableService;
pub use sync::DriverPaymentPayables;
pub use types::{DRIVER_CATEGORY, PayableEntry, PayableInput, PayableKind, PayableStatus};
