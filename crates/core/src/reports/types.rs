//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::notes::DeliveryPerformance;

/// Optional inclusive due-date range.
///
/// The range only filters when both bounds are set; a half-open range
/// reports over everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    /// First due date included.
    pub start: Option<NaiveDate>,
    /// Last due date included.
    pub end: Option<NaiveDate>,
}

impl ReportPeriod {
    /// A range over both bounds.
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True when `date` is reported.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (start..=end).contains(&date),
            _ => true,
        }
    }
}

/// One `Categoria,Status,Quantidade` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Collection label.
    pub category: &'static str,
    /// Status label.
    pub status: &'static str,
    /// Number of records.
    pub count: usize,
}

/// Status counts per collection over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodReport {
    /// Requested range.
    pub period: ReportPeriod,
    /// Lines in display order.
    pub rows: Vec<ReportRow>,
}

impl PeriodReport {
    /// Column headers of the tabular form.
    pub const HEADERS: [&'static str; 3] = ["Categoria", "Status", "Quantidade"];

    /// Count for a category/status pair, zero when absent.
    #[must_use]
    pub fn count(&self, category: &str, status: &str) -> usize {
        self.rows
            .iter()
            .find(|r| r.category == category && r.status == status)
            .map_or(0, |r| r.count)
    }
}

/// Invoice figures for one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientStats {
    /// Client name.
    pub client: String,
    /// All invoices.
    pub total: usize,
    /// Paid invoices.
    pub paid: usize,
    /// Pending invoices.
    pub pending: usize,
}

/// Headline figures of the main dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// Number of invoices.
    pub total_invoices: usize,
    /// Number of paid invoices.
    pub paid_invoices: usize,
    /// Number of user accounts.
    pub total_users: usize,
    /// Notes delivered, on time or late.
    pub delivered_notes: usize,
    /// Sum of pending payables.
    pub pending_payables: Decimal,
    /// Sum of pending receivables.
    pub pending_receivables: Decimal,
    /// Per-client invoice stats, sorted by client.
    pub clients: Vec<ClientStats>,
    /// On-time vs late deliveries.
    pub delivery: DeliveryPerformance,
}
