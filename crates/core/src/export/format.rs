//! Display formatting for exported cells.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use rotafin_shared::types::{Currency, Money};
use rust_decimal::Decimal;

/// Locale used to render amounts and dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Currency of every amount.
    pub currency: Currency,
    /// Zone in which timestamps are shown as dates.
    pub timezone: Tz,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            currency: Currency::Brl,
            timezone: chrono_tz::America::Sao_Paulo,
        }
    }
}

impl DisplayFormat {
    /// `R$ 1.500,00`.
    #[must_use]
    pub fn money(&self, amount: Decimal) -> String {
        Money::new(amount, self.currency).format()
    }

    /// Calendar date of a timestamp in the display zone.
    #[must_use]
    pub fn timestamp_date(&self, at: DateTime<Utc>) -> String {
        format_date(at.with_timezone(&self.timezone).date_naive())
    }
}

/// `31/12/2025`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Optional date; blank when absent.
#[must_use]
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}
