//! Generic synchronizer between a source collection and its derived entries.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};

/// Describes how one source record maps onto one dependent entry.
///
/// Implemented once per pairing (invoice → receivable, driver payment →
/// payable); [`synchronize`] and [`toggle_settlement`] are written against
/// this trait only.
pub trait Pairing {
    /// Record type of the source collection.
    type Source;
    /// Record type of the dependent collection.
    type Dependent;
    /// Source identity, used as the back-reference on derived entries.
    type Key: Copy + Eq + Hash + fmt::Display;

    /// Short name used in logs.
    const NAME: &'static str;

    /// Identity of a source record.
    fn source_key(&self, source: &Self::Source) -> Self::Key;

    /// Back-reference of a dependent entry, `None` for manual entries.
    fn origin(&self, dependent: &Self::Dependent) -> Option<Self::Key>;

    /// Builds the derived entry for `source`.
    ///
    /// When `existing` is given the result must keep its identifier and
    /// creation timestamp.
    fn project(
        &self,
        source: &Self::Source,
        existing: Option<&Self::Dependent>,
        now: DateTime<Utc>,
    ) -> Self::Dependent;

    /// Whether a dependent entry is settled.
    fn dependent_settled(&self, dependent: &Self::Dependent) -> bool;

    /// Sets the settled flag of a dependent entry.
    fn set_dependent_settled(&self, dependent: &mut Self::Dependent, settled: bool, now: DateTime<Utc>);

    /// Sets the settled flag of a source record and stamps it with `now`.
    fn set_source_settled(&self, source: &mut Self::Source, settled: bool, now: DateTime<Utc>);
}

/// Counts produced by one synchronization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Derived entries created for new sources.
    pub created: usize,
    /// Derived entries regenerated in place.
    pub updated: usize,
    /// Derived entries dropped (source gone, or duplicate back-reference).
    pub removed: usize,
}

/// Result of [`synchronize`]: the full replacement dependent collection.
#[derive(Debug, Clone)]
pub struct Synced<D> {
    /// Manual entries in original order, then derived entries in source order.
    pub records: Vec<D>,
    /// What changed.
    pub report: SyncReport,
}

/// Rebuilds the derived subset of `dependents` from `sources`.
///
/// 1. Manual entries (no back-reference) pass through untouched.
/// 2. Derived entries whose source no longer exists are dropped; of several
///    entries pointing at the same source only the first is kept.
/// 3. Every source is projected and upserted: an existing derived entry keeps
///    its identifier and creation timestamp, otherwise a new one is created.
///
/// A source key that appears twice in `sources` yields a single entry.
pub fn synchronize<P: Pairing>(
    pairing: &P,
    sources: &[P::Source],
    dependents: Vec<P::Dependent>,
    now: DateTime<Utc>,
) -> Synced<P::Dependent> {
    let live: HashSet<P::Key> = sources.iter().map(|s| pairing.source_key(s)).collect();

    let mut manual = Vec::with_capacity(dependents.len());
    let mut derived: HashMap<P::Key, P::Dependent> = HashMap::with_capacity(sources.len());
    let mut report = SyncReport::default();

    for dependent in dependents {
        match pairing.origin(&dependent) {
            None => manual.push(dependent),
            Some(key) if live.contains(&key) && !derived.contains_key(&key) => {
                derived.insert(key, dependent);
            }
            Some(key) => {
                tracing::debug!(pairing = P::NAME, source = %key, "dropping stale derived entry");
                report.removed += 1;
            }
        }
    }

    let mut records = manual;
    let mut emitted = HashSet::with_capacity(sources.len());
    for source in sources {
        let key = pairing.source_key(source);
        if !emitted.insert(key) {
            continue;
        }
        let existing = derived.remove(&key);
        if existing.is_some() {
            report.updated += 1;
        } else {
            report.created += 1;
        }
        records.push(pairing.project(source, existing.as_ref(), now));
    }

    tracing::debug!(
        pairing = P::NAME,
        created = report.created,
        updated = report.updated,
        removed = report.removed,
        "derived entries synchronized"
    );

    Synced { records, report }
}

/// Outcome of [`toggle_settlement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    /// Settled flag of the entry after the toggle.
    pub settled: bool,
    /// Whether a linked source record was updated and must be persisted.
    pub source_updated: bool,
}

/// Flips the settled flag of `dependent` and, for derived entries, of the
/// linked source record.
///
/// Only the status and `updated_at` of the source change; callers persist
/// the source collection as-is and must not re-run [`synchronize`] for this
/// write.
pub fn toggle_settlement<P: Pairing>(
    pairing: &P,
    dependent: &mut P::Dependent,
    sources: &mut [P::Source],
    now: DateTime<Utc>,
) -> Toggled {
    let settled = !pairing.dependent_settled(dependent);
    pairing.set_dependent_settled(dependent, settled, now);

    let source_updated = match pairing.origin(dependent) {
        None => false,
        Some(key) => match sources.iter_mut().find(|s| pairing.source_key(s) == key) {
            Some(source) => {
                pairing.set_source_settled(source, settled, now);
                true
            }
            None => {
                tracing::warn!(pairing = P::NAME, source = %key, "derived entry points at a missing source");
                false
            }
        },
    };

    Toggled {
        settled,
        source_updated,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Minimal pairing over plain structs, shared by the engine tests.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Src {
        pub id: u32,
        pub amount: i64,
        pub paid: bool,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Dep {
        pub id: u32,
        pub origin: Option<u32>,
        pub amount: i64,
        pub settled: bool,
    }

    /// Hands out dependent ids from a counter starting at 1000.
    pub struct Toy {
        pub next_id: std::cell::Cell<u32>,
    }

    impl Toy {
        pub fn new() -> Self {
            Self {
                next_id: std::cell::Cell::new(1000),
            }
        }
    }

    impl Pairing for Toy {
        type Source = Src;
        type Dependent = Dep;
        type Key = u32;

        const NAME: &'static str = "toy";

        fn source_key(&self, source: &Src) -> u32 {
            source.id
        }

        fn origin(&self, dependent: &Dep) -> Option<u32> {
            dependent.origin
        }

        fn project(&self, source: &Src, existing: Option<&Dep>, _now: DateTime<Utc>) -> Dep {
            let id = existing.map_or_else(
                || {
                    let id = self.next_id.get();
                    self.next_id.set(id + 1);
                    id
                },
                |e| e.id,
            );
            Dep {
                id,
                origin: Some(source.id),
                amount: source.amount,
                settled: source.paid,
            }
        }

        fn dependent_settled(&self, dependent: &Dep) -> bool {
            dependent.settled
        }

        fn set_dependent_settled(&self, dependent: &mut Dep, settled: bool, _now: DateTime<Utc>) {
            dependent.settled = settled;
        }

        fn set_source_settled(&self, source: &mut Src, settled: bool, _now: DateTime<Utc>) {
            source.paid = settled;
        }
    }

    pub fn src(id: u32, amount: i64, paid: bool) -> Src {
        Src { id, amount, paid }
    }

    pub fn manual(id: u32, amount: i64) -> Dep {
        Dep {
            id,
            origin: None,
            amount,
            settled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::UNIX_EPOCH
    }

    #[test]
    fn test_creates_one_entry_per_source() {
        let pairing = Toy::new();
        let synced = synchronize(&pairing, &[src(1, 100, false)], Vec::new(), now());

        assert_eq!(synced.records.len(), 1);
        assert_eq!(synced.records[0].origin, Some(1));
        assert_eq!(synced.records[0].amount, 100);
        assert!(!synced.records[0].settled);
        assert_eq!(
            synced.report,
            SyncReport {
                created: 1,
                updated: 0,
                removed: 0
            }
        );
    }

    #[test]
    fn test_resync_keeps_identifier_and_propagates_status() {
        let pairing = Toy::new();
        let first = synchronize(&pairing, &[src(1, 100, false)], Vec::new(), now());
        let id = first.records[0].id;

        let second = synchronize(&pairing, &[src(1, 100, true)], first.records, now());
        assert_eq!(second.records.len(), 1);
        assert_eq!(second.records[0].id, id);
        assert!(second.records[0].settled);
        assert_eq!(second.report.updated, 1);
        assert_eq!(second.report.created, 0);
    }

    #[test]
    fn test_removed_source_drops_entry_and_keeps_manual() {
        let pairing = Toy::new();
        let dependents = vec![manual(1, 5), manual(2, 7)];
        let first = synchronize(&pairing, &[src(1, 100, false)], dependents, now());
        assert_eq!(first.records.len(), 3);

        let second = synchronize(&pairing, &[], first.records, now());
        assert_eq!(second.records, vec![manual(1, 5), manual(2, 7)]);
        assert_eq!(second.report.removed, 1);
    }

    #[test]
    fn test_manual_entries_come_first_then_source_order() {
        let pairing = Toy::new();
        let derived_for_two = Dep {
            id: 50,
            origin: Some(2),
            amount: 0,
            settled: false,
        };
        let dependents = vec![derived_for_two, manual(7, 1)];
        let synced = synchronize(
            &pairing,
            &[src(1, 10, false), src(2, 20, false)],
            dependents,
            now(),
        );

        let origins: Vec<_> = synced.records.iter().map(|d| d.origin).collect();
        assert_eq!(origins, vec![None, Some(1), Some(2)]);
        assert_eq!(synced.records[2].id, 50);
    }

    #[test]
    fn test_duplicate_back_references_collapse() {
        let pairing = Toy::new();
        let twin = |id| Dep {
            id,
            origin: Some(1),
            amount: 0,
            settled: false,
        };
        let synced = synchronize(&pairing, &[src(1, 10, false)], vec![twin(1), twin(2)], now());

        assert_eq!(synced.records.len(), 1);
        assert_eq!(synced.records[0].id, 1);
        assert_eq!(synced.report.removed, 1);
    }

    #[test]
    fn test_duplicate_source_keys_yield_one_entry() {
        let pairing = Toy::new();
        let synced = synchronize(
            &pairing,
            &[src(1, 10, false), src(1, 99, true)],
            Vec::new(),
            now(),
        );
        assert_eq!(synced.records.len(), 1);
        assert_eq!(synced.records[0].amount, 10);
    }

    #[test]
    fn test_toggle_derived_updates_source() {
        let pairing = Toy::new();
        let mut sources = vec![src(1, 10, false), src(2, 20, false)];
        let mut synced = synchronize(&pairing, &sources, Vec::new(), now()).records;

        let toggled = toggle_settlement(&pairing, &mut synced[1], &mut sources, now());
        assert_eq!(
            toggled,
            Toggled {
                settled: true,
                source_updated: true
            }
        );
        assert!(sources[1].paid);
        assert!(!sources[0].paid);

        // The next sync agrees with the toggle and creates nothing new.
        let resynced = synchronize(&pairing, &sources, synced, now());
        assert_eq!(resynced.records.len(), 2);
        assert!(resynced.records[1].settled);
        assert_eq!(resynced.report.created, 0);
    }

    #[test]
    fn test_toggle_manual_leaves_sources_alone() {
        let pairing = Toy::new();
        let mut sources = vec![src(1, 10, false)];
        let mut entry = manual(9, 3);

        let toggled = toggle_settlement(&pairing, &mut entry, &mut sources, now());
        assert!(toggled.settled);
        assert!(!toggled.source_updated);
        assert!(entry.settled);
        assert!(!sources[0].paid);
    }

    #[test]
    fn test_toggle_orphan_derived_entry() {
        let pairing = Toy::new();
        let mut entry = Dep {
            id: 1,
            origin: Some(404),
            amount: 0,
            settled: true,
        };
        let toggled = toggle_settlement(&pairing, &mut entry, &mut [], now());
        assert!(!toggled.settled);
        assert!(!toggled.source_updated);
    }
}
