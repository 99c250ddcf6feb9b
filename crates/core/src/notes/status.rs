//! Delivery status derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery status of a note, derived from its dates and today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    /// Not delivered, due date in the future.
    #[default]
    Pending,
    /// Not delivered, due today.
    DueToday,
    /// Not delivered, due date passed.
    Expired,
    /// Delivered on or before the due date.
    OnTime,
    /// Delivered after the due date.
    #[serde(alias = "delivered")]
    DeliveredLate,
}

impl NoteStatus {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::DueToday => "Vence Hoje",
            Self::Expired => "Vencida",
            Self::OnTime => "Entregue no Prazo",
            Self::DeliveredLate => "Entregue (Atrasado)",
        }
    }

    /// True once a delivery date is recorded.
    #[must_use]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::OnTime | Self::DeliveredLate)
    }
}

/// Derives the status of a note at day granularity.
///
/// A recorded delivery wins: on time when `delivery <= due`, late otherwise.
/// Without one the note is expired, due today or pending relative to `today`.
#[must_use]
pub fn derive_status(due: NaiveDate, delivery: Option<NaiveDate>, today: NaiveDate) -> NoteStatus {
    match delivery {
        Some(delivered) if delivered <= due => NoteStatus::OnTime,
        Some(_) => NoteStatus::DeliveredLate,
        None if due < today => NoteStatus::Expired,
        None if due == today => NoteStatus::DueToday,
        None => NoteStatus::Pending,
    }
}

/// Performance label used in exports: `No Prazo`, `Atrasado` or `N/A`.
#[must_use]
pub fn performance_label(due: NaiveDate, delivery: Option<NaiveDate>) -> &'static str {
    match delivery {
        Some(delivered) if delivered <= due => "No Prazo",
        Some(_) => "Atrasado",
        None => "N/A",
    }
}
