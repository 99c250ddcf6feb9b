//! Typed IDs for type-safe record references.
//!
//! Using typed IDs prevents accidentally linking a receivable to a driver payment
//! where an invoice is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a `Uuid` newtype with v7 construction, `Display` and `FromStr`.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(InvoiceId, "Unique identifier for an invoice.");
typed_id!(ReceivableId, "Unique identifier for an accounts-receivable entry.");
typed_id!(PayableId, "Unique identifier for an accounts-payable entry.");
typed_id!(DriverPaymentId, "Unique identifier for a driver payment.");
typed_id!(NoteId, "Unique identifier for a delivery note.");
typed_id!(UserId, "Unique identifier for a user.");
