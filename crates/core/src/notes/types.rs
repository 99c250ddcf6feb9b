//! Delivery note data types.

use chrono::{DateTime, NaiveDate, Utc};
use rotafin_shared::types::NoteId;
use serde::{Deserialize, Serialize};

use super::status::NoteStatus;
use crate::store::{Collection, Record};

/// A delivery note (nota fiscal) tracked until delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note ID.
    pub id: NoteId,
    /// Note number, the natural key for imports.
    pub number: String,
    /// Shipper (embarcador).
    pub shipper: String,
    /// Delivery deadline.
    pub due_date: NaiveDate,
    /// Actual delivery date.
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    /// 44-digit NFe access key.
    #[serde(default)]
    pub nfe_key: String,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Derived status; recomputed on every load and save.
    #[serde(default)]
    pub status: NoteStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Record for Note {
    const COLLECTION: Collection = Collection::Notes;
}

/// Form input for creating or editing a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    /// Note number.
    pub number: String,
    /// Shipper.
    pub shipper: String,
    /// Delivery deadline.
    pub due_date: NaiveDate,
    /// Actual delivery date.
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    /// NFe access key.
    #[serde(default)]
    pub nfe_key: String,
    /// Free text.
    #[serde(default)]
    pub description: String,
}
