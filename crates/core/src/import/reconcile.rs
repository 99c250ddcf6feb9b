//! Merge imported rows into an existing collection by natural key.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::{ImportError, RowError};
use super::schema::{MappedRow, Schema};
use super::table::Table;

/// A record type that can be reconciled from table rows.
pub trait Importable: Sized {
    /// Fields read from one row; absent cells are `None`.
    type Draft;
    /// Natural key matched against existing records.
    type Key: Eq + Hash;

    /// Column layout.
    const SCHEMA: &'static Schema;

    /// Reads a row.
    ///
    /// # Errors
    ///
    /// Returns `RowError::MissingKey` for a blank key and
    /// `RowError::Invalid` for an unparseable present cell.
    fn draft(row: &MappedRow<'_>) -> Result<Self::Draft, RowError>;

    /// Natural key of a draft.
    fn draft_key(draft: &Self::Draft) -> Self::Key;

    /// Natural key of a stored record.
    fn natural_key(&self) -> Self::Key;

    /// Rejects records the import may not touch.
    ///
    /// # Errors
    ///
    /// Returns the reason the matching record cannot be updated.
    fn guard(&self) -> Result<(), RowError> {
        Ok(())
    }

    /// Overwrites the fields present in `draft`, keeping id and `created_at`.
    fn merge(&mut self, draft: Self::Draft, now: DateTime<Utc>);

    /// Builds a new record from a draft with no match.
    ///
    /// # Errors
    ///
    /// Returns `RowError::MissingForCreate` when a required column is absent.
    fn create(draft: Self::Draft, now: DateTime<Utc>) -> Result<Self, RowError>;
}

/// A row that was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Row number (header is row 1).
    pub row: usize,
    /// Why it was skipped.
    #[serde(serialize_with = "serialize_reason")]
    pub reason: RowError,
}

fn serialize_reason<S: serde::Serializer>(reason: &RowError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// Result of reconciling a table.
#[derive(Debug, Clone)]
pub struct ImportOutcome<T> {
    /// The full collection after the merge.
    pub merged: Vec<T>,
    /// Rows that produced a new record.
    pub created: usize,
    /// Rows that updated an existing record.
    pub updated: usize,
    /// Rows that were skipped, in row order.
    pub skipped: Vec<SkippedRow>,
}

impl<T> ImportOutcome<T> {
    /// Short human summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} created, {} updated, {} skipped",
            self.created,
            self.updated,
            self.skipped.len()
        )
    }
}

/// Reconciles `table` into `existing`.
///
/// Rows are applied in order, so a key repeated in the file updates the record
/// created by its first occurrence. A bad row never aborts the batch.
///
/// # Errors
///
/// Returns `ImportError::Empty` for a table without data rows.
pub fn import_rows<T: Importable>(
    existing: Vec<T>,
    table: &Table,
    now: DateTime<Utc>,
) -> Result<ImportOutcome<T>, ImportError> {
    if table.rows.is_empty() {
        return Err(ImportError::Empty);
    }

    let binding = T::SCHEMA.bind(&table.headers);
    let mut merged = existing;
    let mut index: HashMap<T::Key, usize> = HashMap::with_capacity(merged.len());
    for (position, record) in merged.iter().enumerate() {
        index.entry(record.natural_key()).or_insert(position);
    }

    let mut created = 0;
    let mut updated = 0;
    let mut skipped = Vec::new();

    for row in &table.rows {
        match apply(&mut merged, &mut index, &binding.row(&row.cells), now) {
            Ok(Applied::Created) => created += 1,
            Ok(Applied::Updated) => updated += 1,
            Err(reason) => {
                tracing::debug!(sheet = T::SCHEMA.sheet, row = row.number, %reason, "import row skipped");
                skipped.push(SkippedRow {
                    row: row.number,
                    reason,
                });
            }
        }
    }

    tracing::info!(
        sheet = T::SCHEMA.sheet,
        created,
        updated,
        skipped = skipped.len(),
        "import reconciled"
    );

    Ok(ImportOutcome {
        merged,
        created,
        updated,
        skipped,
    })
}

enum Applied {
    Created,
    Updated,
}

fn apply<T: Importable>(
    merged: &mut Vec<T>,
    index: &mut HashMap<T::Key, usize>,
    row: &MappedRow<'_>,
    now: DateTime<Utc>,
) -> Result<Applied, RowError> {
    let draft = T::draft(row)?;
    let key = T::draft_key(&draft);
    if let Some(&position) = index.get(&key) {
        let record = &mut merged[position];
        record.guard()?;
        record.merge(draft, now);
        return Ok(Applied::Updated);
    }
    let record = T::create(draft, now)?;
    index.insert(key, merged.len());
    merged.push(record);
    Ok(Applied::Created)
}
