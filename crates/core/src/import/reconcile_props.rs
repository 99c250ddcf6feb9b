//! Property-based tests for import reconciliation.
//!
//! - Every row is counted exactly once
//! - Importing the same table twice creates nothing the second time
//! - Ids and creation times of matched records never change

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;

use super::reconcile::import_rows;
use super::table::{Cell, Table};
use crate::invoices::Invoice;

fn t0() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Invoice rows over a small key space, some with blank or broken cells.
fn table() -> impl Strategy<Value = Table> {
    prop::collection::vec(
        (
            prop::option::of(0u8..6),
            prop::option::of(0u32..5_000),
            prop_oneof![Just(""), Just("2025-01-10"), Just("10/02/2025"), Just("amanhã")],
            prop_oneof![Just("pending"), Just("Pago"), Just("")],
        ),
        1..15,
    )
    .prop_map(|rows| {
        let headers = ["Número da Fatura", "Valor", "Data de Vencimento", "Status"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let rows = rows
            .into_iter()
            .map(|(number, amount, due, status)| {
                vec![
                    number.map_or(Cell::Empty, |n| Cell::from(format!("FAT{n}").as_str())),
                    amount.map_or(Cell::Empty, |a| Cell::from(a.to_string().as_str())),
                    Cell::from(due),
                    Cell::from(status),
                ]
            })
            .collect();
        Table::new(headers, rows)
    })
    .prop_filter_map("blank table", Result::ok)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_every_row_accounted_for(table in table()) {
        let outcome = import_rows(Vec::<Invoice>::new(), &table, t0()).unwrap();
        prop_assert_eq!(
            outcome.created + outcome.updated + outcome.skipped.len(),
            table.rows.len()
        );
        prop_assert_eq!(outcome.merged.len(), outcome.created);
    }

    #[test]
    fn prop_reimport_creates_nothing(table in table()) {
        let first = import_rows(Vec::<Invoice>::new(), &table, t0()).unwrap();
        let before: Vec<_> = first.merged.iter().map(|i| (i.id, i.created_at)).collect();

        let second = import_rows(first.merged, &table, t0() + Duration::days(1)).unwrap();
        prop_assert_eq!(second.created, 0);

        let after: Vec<_> = second.merged.iter().map(|i| (i.id, i.created_at)).collect();
        prop_assert_eq!(after, before);
    }
}
