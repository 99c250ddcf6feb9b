//! Period report and dashboard metrics.
//!
//! Both are pure counts and sums over already-loaded collections:
//! - Period report: status counts per collection over an optional due-date range
//! - Dashboard: headline totals, per-client invoice stats and delivery performance

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::{ReportInput, ReportService};
pub use types::*;
