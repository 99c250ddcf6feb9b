//! Payments owed to drivers per trip.
//!
//! Driver payments are the source side of the payables sync; each one owns a
//! single read-only payable in the `Motoristas` category.

pub mod service;
pub mod statement;
pub mod types;

pub use service::DriverPaymentService;
pub use statement::DriverStatement;
pub use types::{DriverPayment, DriverPaymentInput, DriverPaymentStatus};
