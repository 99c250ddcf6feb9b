//! Delivery notes.
//!
//! A note's status is never authoritative: it is re-derived from the due date,
//! the optional delivery date and the business date on every load and save.

pub mod service;
pub mod status;
pub mod types;

#[cfg(test)]
mod status_props;

pub use service::{DeliveryPerformance, NoteService, ShipperPerformance};
pub use status::{NoteStatus, derive_status, performance_label};
pub use types::{Note, NoteInput};
