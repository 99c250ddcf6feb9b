//! Property-based tests for note status derivation.
//!
//! - Derivation is deterministic and refresh is idempotent
//! - Refresh never touches the dates
//! - Delivered statuses appear exactly when a delivery date exists

use chrono::{DateTime, Duration, NaiveDate};
use proptest::prelude::*;
use rotafin_shared::types::NoteId;

use super::service::NoteService;
use super::status::{NoteStatus, derive_status};
use super::types::Note;

/// Dates within a couple of years of 2025-01-01.
fn date() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn note() -> impl Strategy<Value = Note> {
    (date(), prop::option::of(date())).prop_map(|(due_date, delivery_date)| Note {
        id: NoteId::new(),
        number: "NF".to_string(),
        shipper: "Alfa".to_string(),
        due_date,
        delivery_date,
        nfe_key: String::new(),
        description: String::new(),
        status: NoteStatus::Pending,
        created_at: DateTime::UNIX_EPOCH,
        updated_at: DateTime::UNIX_EPOCH,
    })
}

proptest! {
    #[test]
    fn prop_refresh_is_idempotent(mut notes in prop::collection::vec(note(), 0..20), today in date()) {
        NoteService::refresh(&mut notes, today);
        let once = notes.clone();
        prop_assert_eq!(NoteService::refresh(&mut notes, today), 0);
        prop_assert_eq!(notes, once);
    }

    #[test]
    fn prop_refresh_keeps_dates(notes in prop::collection::vec(note(), 0..20), today in date()) {
        let mut refreshed = notes.clone();
        NoteService::refresh(&mut refreshed, today);
        for (before, after) in notes.iter().zip(&refreshed) {
            prop_assert_eq!(before.due_date, after.due_date);
            prop_assert_eq!(before.delivery_date, after.delivery_date);
        }
    }

    #[test]
    fn prop_delivered_iff_delivery_date(due in date(), delivery in prop::option::of(date()), today in date()) {
        let status = derive_status(due, delivery, today);
        prop_assert_eq!(status.is_delivered(), delivery.is_some());
    }

    #[test]
    fn prop_delivered_status_ignores_today(due in date(), delivery in date(), a in date(), b in date()) {
        prop_assert_eq!(
            derive_status(due, Some(delivery), a),
            derive_status(due, Some(delivery), b)
        );
    }
}
