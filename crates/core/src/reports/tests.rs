//! Tests for the period report and dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use rotafin_shared::types::{InvoiceId, NoteId, PayableId, ReceivableId};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::invoices::{Invoice, InvoiceStatus};
use crate::notes::{Note, NoteStatus};
use crate::payables::{PayableEntry, PayableKind, PayableStatus};
use crate::receivables::{ReceivableEntry, ReceivableKind, ReceivableStatus};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn invoice(client: &str, due: NaiveDate, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: InvoiceId::new(),
        number: format!("FAT-{client}-{due}"),
        client: client.to_string(),
        amount: dec!(100),
        due_date: due,
        status,
        description: String::new(),
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

fn payable(amount: Decimal, due: NaiveDate, status: PayableStatus) -> PayableEntry {
    PayableEntry {
        id: PayableId::new(),
        description: "Combustível".to_string(),
        amount,
        due_date: due,
        status,
        supplier: "Posto".to_string(),
        category: "Operacional".to_string(),
        kind: PayableKind::Manual,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

fn receivable(amount: Decimal, due: NaiveDate, status: ReceivableStatus) -> ReceivableEntry {
    ReceivableEntry {
        id: ReceivableId::new(),
        description: "Frete".to_string(),
        amount,
        due_date: due,
        status,
        client: "ACME".to_string(),
        kind: ReceivableKind::Manual,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

fn note(shipper: &str, due: NaiveDate, delivery: Option<NaiveDate>) -> Note {
    Note {
        id: NoteId::new(),
        number: format!("NF-{due}"),
        shipper: shipper.to_string(),
        due_date: due,
        delivery_date: delivery,
        nfe_key: String::new(),
        description: String::new(),
        // stale on purpose; reports derive their own
        status: NoteStatus::Pending,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

struct Fixture {
    invoices: Vec<Invoice>,
    payables: Vec<PayableEntry>,
    receivables: Vec<ReceivableEntry>,
    notes: Vec<Note>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            invoices: vec![
                invoice("ACME", date(1, 10), InvoiceStatus::Paid),
                invoice("ACME", date(2, 10), InvoiceStatus::Pending),
                invoice("Beta", date(3, 10), InvoiceStatus::Paid),
            ],
            payables: vec![
                payable(dec!(50), date(1, 5), PayableStatus::Pending),
                payable(dec!(70), date(2, 5), PayableStatus::Paid),
                payable(dec!(30), date(3, 5), PayableStatus::Pending),
            ],
            receivables: vec![
                receivable(dec!(200), date(1, 20), ReceivableStatus::Received),
                receivable(dec!(125.50), date(2, 20), ReceivableStatus::Pending),
            ],
            notes: vec![
                note("Alfa", date(1, 10), Some(date(1, 9))),
                note("Alfa", date(1, 12), Some(date(1, 15))),
                note("Beta", date(2, 1), None),
                note("Beta", date(6, 15), None),
                note("Beta", date(7, 1), None),
            ],
        }
    }

    fn input(&self) -> ReportInput<'_> {
        ReportInput {
            invoices: &self.invoices,
            payables: &self.payables,
            receivables: &self.receivables,
            notes: &self.notes,
        }
    }
}

#[rstest]
#[case("Faturas", "Geradas", 3)]
#[case("Faturas", "Pagas", 2)]
#[case("Contas a Pagar", "Pendentes", 2)]
#[case("Contas a Pagar", "Pagas", 1)]
#[case("Contas a Receber", "Pendentes", 1)]
#[case("Contas a Receber", "Recebidas", 1)]
#[case("Notas", "Pendentes", 2)]
#[case("Notas", "Entregues", 2)]
#[case("Notas", "Vencidas", 1)]
fn test_unfiltered_counts(#[case] category: &str, #[case] status: &str, #[case] expected: usize) {
    let fixture = Fixture::new();
    let report = ReportService::period_report(fixture.input(), ReportPeriod::default(), date(6, 15)).unwrap();
    assert_eq!(report.count(category, status), expected);
}

#[test]
fn test_period_filters_on_due_date() {
    let fixture = Fixture::new();
    let period = ReportPeriod::between(date(1, 1), date(1, 31));
    let report = ReportService::period_report(fixture.input(), period, date(6, 15)).unwrap();

    assert_eq!(report.count("Faturas", "Geradas"), 1);
    assert_eq!(report.count("Faturas", "Pagas"), 1);
    assert_eq!(report.count("Contas a Pagar", "Pendentes"), 1);
    assert_eq!(report.count("Contas a Receber", "Recebidas"), 1);
    assert_eq!(report.count("Notas", "Entregues"), 2);
    assert_eq!(report.count("Notas", "Pendentes"), 0);
    assert_eq!(report.rows.len(), 9);
}

#[test]
fn test_half_open_period_does_not_filter() {
    let fixture = Fixture::new();
    let period = ReportPeriod {
        start: Some(date(3, 1)),
        end: None,
    };
    let report = ReportService::period_report(fixture.input(), period, date(6, 15)).unwrap();
    assert_eq!(report.count("Faturas", "Geradas"), 3);
}

#[test]
fn test_inverted_period_is_rejected() {
    let fixture = Fixture::new();
    let period = ReportPeriod::between(date(2, 1), date(1, 1));
    assert_eq!(
        ReportService::period_report(fixture.input(), period, date(6, 15)),
        Err(ReportError::InvalidDateRange {
            start: date(2, 1),
            end: date(1, 1)
        })
    );
}

#[test]
fn test_dashboard_figures() {
    let fixture = Fixture::new();
    let metrics = ReportService::dashboard(fixture.input(), 4);

    assert_eq!(metrics.total_invoices, 3);
    assert_eq!(metrics.paid_invoices, 2);
    assert_eq!(metrics.total_users, 4);
    assert_eq!(metrics.delivered_notes, 2);
    assert_eq!(metrics.pending_payables, dec!(80));
    assert_eq!(metrics.pending_receivables, dec!(125.50));

    assert_eq!(
        metrics.clients,
        vec![
            ClientStats {
                client: "ACME".to_string(),
                total: 2,
                paid: 1,
                pending: 1
            },
            ClientStats {
                client: "Beta".to_string(),
                total: 1,
                paid: 1,
                pending: 0
            },
        ]
    );

    assert_eq!(metrics.delivery.on_time, 1);
    assert_eq!(metrics.delivery.late, 1);
    assert_eq!(metrics.delivery.by_shipper[0].on_time_percent, dec!(50));
}

#[test]
fn test_empty_collections() {
    let metrics = ReportService::dashboard(
        ReportInput {
            invoices: &[],
            payables: &[],
            receivables: &[],
            notes: &[],
        },
        0,
    );
    assert_eq!(metrics.pending_payables, Decimal::ZERO);
    assert!(metrics.clients.is_empty());
    assert!(metrics.delivery.by_shipper.is_empty());
}
