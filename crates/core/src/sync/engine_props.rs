//! Property-based tests for the derived-ledger synchronizer.
//!
//! - Exactly one derived entry per live source after a pass
//! - Manual entries survive untouched and in order
//! - A second pass over its own output changes nothing

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use super::engine::fixtures::{Dep, Src, Toy};
use super::engine::synchronize;

fn now() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Sources with ids drawn from a small range so duplicates and collisions occur.
fn sources() -> impl Strategy<Value = Vec<Src>> {
    prop::collection::vec(
        (0u32..12, 0i64..10_000, any::<bool>()).prop_map(|(id, amount, paid)| Src { id, amount, paid }),
        0..10,
    )
}

/// Dependents mixing manual entries and derived entries pointing at possibly
/// missing sources.
fn dependents() -> impl Strategy<Value = Vec<Dep>> {
    prop::collection::vec(
        (0u32..500, prop::option::of(0u32..12), 0i64..10_000, any::<bool>()).prop_map(
            |(id, origin, amount, settled)| Dep {
                id,
                origin,
                amount,
                settled,
            },
        ),
        0..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_one_derived_entry_per_source(sources in sources(), deps in dependents()) {
        let pairing = Toy::new();
        let synced = synchronize(&pairing, &sources, deps, now());

        let mut live: Vec<u32> = sources.iter().map(|s| s.id).collect();
        live.sort_unstable();
        live.dedup();

        let mut derived: Vec<u32> = synced.records.iter().filter_map(|d| d.origin).collect();
        derived.sort_unstable();
        prop_assert_eq!(derived, live);
    }

    #[test]
    fn prop_manual_entries_preserved_in_order(sources in sources(), deps in dependents()) {
        let pairing = Toy::new();
        let manual_before: Vec<Dep> = deps.iter().filter(|d| d.origin.is_none()).cloned().collect();

        let synced = synchronize(&pairing, &sources, deps, now());
        let manual_after: Vec<Dep> = synced
            .records
            .iter()
            .take_while(|d| d.origin.is_none())
            .cloned()
            .collect();

        prop_assert_eq!(&manual_after, &manual_before);
        prop_assert!(synced.records[manual_after.len()..].iter().all(|d| d.origin.is_some()));
    }

    #[test]
    fn prop_second_pass_is_stable(sources in sources(), deps in dependents()) {
        let pairing = Toy::new();
        let first = synchronize(&pairing, &sources, deps, now());
        let second = synchronize(&pairing, &sources, first.records.clone(), now());

        prop_assert_eq!(&second.records, &first.records);
        prop_assert_eq!(second.report.created, 0);
        prop_assert_eq!(second.report.removed, 0);
    }

    #[test]
    fn prop_derived_status_follows_source(sources in sources(), deps in dependents()) {
        let pairing = Toy::new();
        let synced = synchronize(&pairing, &sources, deps, now());

        for entry in synced.records.iter().filter(|d| d.origin.is_some()) {
            let source = sources.iter().find(|s| Some(s.id) == entry.origin).unwrap();
            prop_assert_eq!(entry.settled, source.paid);
            prop_assert_eq!(entry.amount, source.amount);
        }
    }
}
