//! Report generation service.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::error::ReportError;
use super::types::{ClientStats, DashboardMetrics, PeriodReport, ReportPeriod, ReportRow};
use crate::entries::EntryService;
use crate::invoices::Invoice;
use crate::notes::{Note, NoteService, NoteStatus, derive_status};
use crate::payables::PayableEntry;
use crate::receivables::ReceivableEntry;
use crate::sync::Settlement;

/// Collections a report is computed from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    /// Invoices.
    pub invoices: &'a [Invoice],
    /// Accounts payable.
    pub payables: &'a [PayableEntry],
    /// Accounts receivable.
    pub receivables: &'a [ReceivableEntry],
    /// Delivery notes; statuses are re-derived, stored ones are ignored.
    pub notes: &'a [Note],
}

/// Service for generating reports.
pub struct ReportService;

impl ReportService {
    /// Counts records by status over `period`, filtering on due dates.
    ///
    /// Note statuses are derived against `today`: due-today notes count as
    /// pending and both delivered statuses as delivered.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` when both bounds are set and
    /// the end precedes the start.
    pub fn period_report(
        input: ReportInput<'_>,
        period: ReportPeriod,
        today: NaiveDate,
    ) -> Result<PeriodReport, ReportError> {
        if let (Some(start), Some(end)) = (period.start, period.end)
            && end < start
        {
            return Err(ReportError::InvalidDateRange { start, end });
        }

        let invoices: Vec<_> = input
            .invoices
            .iter()
            .filter(|i| period.contains(i.due_date))
            .collect();
        let payables = EntryService::totals(input.payables.iter().filter(|e| period.contains(e.due_date)));
        let receivables =
            EntryService::totals(input.receivables.iter().filter(|e| period.contains(e.due_date)));

        let mut notes = [0usize; 3];
        for note in input.notes.iter().filter(|n| period.contains(n.due_date)) {
            let slot = match derive_status(note.due_date, note.delivery_date, today) {
                NoteStatus::Pending | NoteStatus::DueToday => 0,
                NoteStatus::OnTime | NoteStatus::DeliveredLate => 1,
                NoteStatus::Expired => 2,
            };
            notes[slot] += 1;
        }

        let row = |category, status, count| ReportRow {
            category,
            status,
            count,
        };
        let rows = vec![
            row("Faturas", "Geradas", invoices.len()),
            row(
                "Faturas",
                "Pagas",
                invoices.iter().filter(|i| i.status.is_settled()).count(),
            ),
            row("Contas a Pagar", "Pendentes", payables.pending_count),
            row("Contas a Pagar", "Pagas", payables.settled_count),
            row("Contas a Receber", "Pendentes", receivables.pending_count),
            row("Contas a Receber", "Recebidas", receivables.settled_count),
            row("Notas", "Pendentes", notes[0]),
            row("Notas", "Entregues", notes[1]),
            row("Notas", "Vencidas", notes[2]),
        ];

        tracing::debug!(
            start = ?period.start,
            end = ?period.end,
            invoices = invoices.len(),
            "period report computed"
        );

        Ok(PeriodReport { period, rows })
    }

    /// Headline dashboard figures.
    #[must_use]
    pub fn dashboard(input: ReportInput<'_>, total_users: usize) -> DashboardMetrics {
        let mut clients: BTreeMap<&str, ClientStats> = BTreeMap::new();
        for invoice in input.invoices {
            let stats = clients
                .entry(invoice.client.as_str())
                .or_insert_with(|| ClientStats {
                    client: invoice.client.clone(),
                    total: 0,
                    paid: 0,
                    pending: 0,
                });
            stats.total += 1;
            if invoice.status.is_settled() {
                stats.paid += 1;
            } else {
                stats.pending += 1;
            }
        }

        let delivered_notes = input
            .notes
            .iter()
            .filter(|n| n.delivery_date.is_some())
            .count();

        DashboardMetrics {
            total_invoices: input.invoices.len(),
            paid_invoices: input
                .invoices
                .iter()
                .filter(|i| i.status.is_settled())
                .count(),
            total_users,
            delivered_notes,
            pending_payables: EntryService::totals(input.payables).pending,
            pending_receivables: EntryService::totals(input.receivables).pending,
            clients: clients.into_values().collect(),
            delivery: NoteService::delivery_performance(input.notes),
        }
    }
}
