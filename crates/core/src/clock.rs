//! Source of "now" for timestamps and "today" for date-based derivations.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Provides the current instant and the business calendar date.
pub trait Clock {
    /// Current instant, used for `created_at` / `updated_at`.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date in the business time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall clock evaluated in a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a clock that reports dates in `tz`.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Clock frozen at a given instant; "today" is the UTC date of that instant
/// unless overridden.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    /// Freezes the clock at `now`.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            today: now.date_naive(),
        }
    }

    /// Overrides the business date.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
