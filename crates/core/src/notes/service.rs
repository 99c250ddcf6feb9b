//! Note editing rules and delivery performance.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rotafin_shared::types::NoteId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::status::derive_status;
use super::types::{Note, NoteInput};
use crate::error::{RecordError, require};

const COLLECTION: &str = "notes";
const UNKNOWN_SHIPPER: &str = "Desconhecido";

/// On-time vs late deliveries for one shipper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipperPerformance {
    /// Shipper name.
    pub shipper: String,
    /// Deliveries on or before the due date.
    pub on_time: usize,
    /// Deliveries after the due date.
    pub late: usize,
    /// Share of on-time deliveries in percent, two decimals; zero without
    /// deliveries.
    pub on_time_percent: Decimal,
}

/// Delivery performance across all notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryPerformance {
    /// Total on-time deliveries.
    pub on_time: usize,
    /// Total late deliveries.
    pub late: usize,
    /// Per shipper, sorted by name.
    pub by_shipper: Vec<ShipperPerformance>,
}

/// Note service for business logic.
pub struct NoteService;

impl NoteService {
    /// Re-derives every status against `today`; returns how many changed.
    pub fn refresh(notes: &mut [Note], today: NaiveDate) -> usize {
        let mut changed = 0;
        for note in notes.iter_mut() {
            let status = derive_status(note.due_date, note.delivery_date, today);
            if status != note.status {
                note.status = status;
                changed += 1;
            }
        }
        changed
    }

    /// Validate note input.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for a blank number.
    pub fn validate(input: &NoteInput) -> Result<(), RecordError> {
        require("number", &input.number)
    }

    /// Appends a note with its derived status.
    ///
    /// # Errors
    ///
    /// Returns a validation error; the collection is left unchanged.
    pub fn create(
        notes: &mut Vec<Note>,
        input: NoteInput,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<NoteId, RecordError> {
        Self::validate(&input)?;
        let id = NoteId::new();
        notes.push(Note {
            id,
            number: input.number.trim().to_string(),
            shipper: input.shipper.trim().to_string(),
            due_date: input.due_date,
            delivery_date: input.delivery_date,
            nfe_key: input.nfe_key.trim().to_string(),
            description: input.description,
            status: derive_status(input.due_date, input.delivery_date, today),
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    /// Replaces the editable fields of a note.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id, or a validation error.
    pub fn update(
        notes: &mut [Note],
        id: NoteId,
        input: NoteInput,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<(), RecordError> {
        Self::validate(&input)?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| RecordError::not_found(COLLECTION, id))?;
        note.number = input.number.trim().to_string();
        note.shipper = input.shipper.trim().to_string();
        note.due_date = input.due_date;
        note.delivery_date = input.delivery_date;
        note.nfe_key = input.nfe_key.trim().to_string();
        note.description = input.description;
        note.status = derive_status(note.due_date, note.delivery_date, today);
        note.updated_at = now;
        Ok(())
    }

    /// Removes a note.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn delete(notes: &mut Vec<Note>, id: NoteId) -> Result<Note, RecordError> {
        let index = notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| RecordError::not_found(COLLECTION, id))?;
        Ok(notes.remove(index))
    }

    /// On-time vs late deliveries, overall and per shipper.
    ///
    /// Only notes with a delivery date count; every shipper with at least one
    /// note is listed. A blank shipper is reported as `Desconhecido`.
    #[must_use]
    pub fn delivery_performance(notes: &[Note]) -> DeliveryPerformance {
        let mut per_shipper: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        let mut performance = DeliveryPerformance::default();

        for note in notes {
            let shipper = if note.shipper.trim().is_empty() {
                UNKNOWN_SHIPPER
            } else {
                note.shipper.as_str()
            };
            let counts = per_shipper.entry(shipper).or_default();
            match note.delivery_date {
                Some(delivered) if delivered <= note.due_date => {
                    counts.0 += 1;
                    performance.on_time += 1;
                }
                Some(_) => {
                    counts.1 += 1;
                    performance.late += 1;
                }
                None => {}
            }
        }

        performance.by_shipper = per_shipper
            .into_iter()
            .map(|(shipper, (on_time, late))| ShipperPerformance {
                shipper: shipper.to_string(),
                on_time,
                late,
                on_time_percent: percent(on_time, on_time + late),
            })
            .collect();
        performance
    }
}

/// `part / whole * 100`, two decimals; zero for an empty whole.
pub(crate) fn percent(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) / Decimal::from(whole) * Decimal::ONE_HUNDRED).round_dp(2)
}
