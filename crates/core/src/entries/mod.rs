//! Behaviour shared by accounts-receivable and accounts-payable entries.
//!
//! Both collections mix manual entries with entries derived from a source
//! record. The rules that only depend on that split live here: derived
//! entries cannot be edited or deleted directly, totals split pending from
//! settled, and listings filter by counterparty.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::RecordError;
use crate::store::Record;
use crate::sync::Settlement;

/// A receivable or payable entry.
pub trait LedgerEntry: Record + Clone {
    /// Typed identifier.
    type Id: Copy + Eq + fmt::Display;
    /// Pending/settled status type.
    type Status: Settlement;

    /// Collection name used in errors.
    const COLLECTION_NAME: &'static str;
    /// Kind of source record derived entries point at.
    const SOURCE_KIND: &'static str;

    /// Entry identifier.
    fn id(&self) -> Self::Id;
    /// Entry amount.
    fn amount(&self) -> Decimal;
    /// Current status.
    fn status(&self) -> Self::Status;
    /// Client or supplier.
    fn counterparty(&self) -> &str;
    /// True when the entry was produced by the sync.
    fn is_derived(&self) -> bool;
}

/// Pending and settled sums over a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntryTotals {
    /// Sum of pending entries.
    pub pending: Decimal,
    /// Sum of settled (paid / received) entries.
    pub settled: Decimal,
    /// Number of pending entries.
    pub pending_count: usize,
    /// Number of settled entries.
    pub settled_count: usize,
}

/// Generic operations over receivable/payable collections.
pub struct EntryService;

impl EntryService {
    /// Rejects direct edits of a derived entry.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DerivedEntryImmutable` when `entry` is derived.
    pub fn ensure_manual<E: LedgerEntry>(entry: &E) -> Result<(), RecordError> {
        if entry.is_derived() {
            return Err(RecordError::DerivedEntryImmutable {
                collection: E::COLLECTION_NAME,
                id: entry.id().to_string(),
                source_kind: E::SOURCE_KIND,
            });
        }
        Ok(())
    }

    /// Position of the entry with `id`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn position<E: LedgerEntry>(entries: &[E], id: E::Id) -> Result<usize, RecordError> {
        entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| RecordError::not_found(E::COLLECTION_NAME, id))
    }

    /// Mutable access to a manual entry.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id and
    /// `RecordError::DerivedEntryImmutable` for a derived entry.
    pub fn manual_mut<E: LedgerEntry>(entries: &mut [E], id: E::Id) -> Result<&mut E, RecordError> {
        let index = Self::position(entries, id)?;
        let entry = &mut entries[index];
        Self::ensure_manual(entry)?;
        Ok(entry)
    }

    /// Deletes a manual entry; the collection is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id and
    /// `RecordError::DerivedEntryImmutable` for a derived entry.
    pub fn delete<E: LedgerEntry>(entries: &mut Vec<E>, id: E::Id) -> Result<E, RecordError> {
        let index = Self::position(entries, id)?;
        Self::ensure_manual(&entries[index])?;
        Ok(entries.remove(index))
    }

    /// Pending and settled totals.
    #[must_use]
    pub fn totals<'a, E, I>(entries: I) -> EntryTotals
    where
        E: LedgerEntry + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        entries
            .into_iter()
            .fold(EntryTotals::default(), |mut totals, entry| {
                if entry.status().is_settled() {
                    totals.settled = totals.settled.saturating_add(entry.amount());
                    totals.settled_count += 1;
                } else {
                    totals.pending = totals.pending.saturating_add(entry.amount());
                    totals.pending_count += 1;
                }
                totals
            })
    }

    /// Entries whose counterparty contains `query`, case-insensitively.
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn filter_by_counterparty<'a, E: LedgerEntry>(entries: &'a [E], query: &str) -> Vec<&'a E> {
        let needle = query.trim().to_lowercase();
        entries
            .iter()
            .filter(|e| needle.is_empty() || e.counterparty().to_lowercase().contains(&needle))
            .collect()
    }
}
