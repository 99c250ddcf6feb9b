//! Per-driver payment statement over a departure-date period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::types::DriverPayment;
use crate::error::{RecordError, require};

/// Payments of one driver within an inclusive period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverStatement {
    /// Driver name as requested.
    pub driver: String,
    /// First departure date included.
    pub start: NaiveDate,
    /// Last departure date included.
    pub end: NaiveDate,
    /// Matching payments, by departure date.
    pub payments: Vec<DriverPayment>,
    /// Sum of agreed amounts.
    pub total: Decimal,
}

impl DriverStatement {
    /// Builds the statement for `driver` between `start` and `end`.
    ///
    /// Driver names match case-insensitively, ignoring surrounding blanks.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for a blank driver,
    /// `RecordError::InvertedPeriod` when `end < start`, and
    /// `RecordError::NotFound` when no payment matches.
    pub fn build(
        payments: &[DriverPayment],
        driver: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, RecordError> {
        require("driver", driver)?;
        if end < start {
            return Err(RecordError::InvertedPeriod);
        }

        let wanted = driver.trim().to_lowercase();
        let mut matching: Vec<DriverPayment> = payments
            .iter()
            .filter(|p| p.driver_name.trim().to_lowercase() == wanted)
            .filter(|p| (start..=end).contains(&p.departure_date))
            .cloned()
            .collect();

        if matching.is_empty() {
            return Err(RecordError::not_found(
                "driver_payments",
                format!("{} between {start} and {end}", driver.trim()),
            ));
        }
        matching.sort_by_key(|p| p.departure_date);

        let total = matching
            .iter()
            .fold(Decimal::ZERO, |sum, p| sum.saturating_add(p.agreed_amount));
        Ok(Self {
            driver: driver.trim().to_string(),
            start,
            end,
            payments: matching,
            total,
        })
    }
}
