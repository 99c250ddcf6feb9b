//! Driver payment → payable pairing.

use chrono::{DateTime, Utc};
use rotafin_shared::types::{DriverPaymentId, PayableId};

use super::types::{DRIVER_CATEGORY, PayableEntry, PayableKind, PayableStatus};
use crate::driver_payments::{DriverPayment, DriverPaymentStatus};
use crate::sync::{Pairing, Settlement};

/// Derives one payable per driver payment, due on the departure date.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverPaymentPayables;

impl DriverPaymentPayables {
    /// Label of the payable derived from `payment`.
    #[must_use]
    pub fn describe(payment: &DriverPayment) -> String {
        format!(
            "Pagamento Motorista - {} ({})",
            payment.driver_name, payment.invoice
        )
    }
}

impl Pairing for DriverPaymentPayables {
    type Source = DriverPayment;
    type Dependent = PayableEntry;
    type Key = DriverPaymentId;

    const NAME: &'static str = "driver_payment_payable";

    fn source_key(&self, source: &DriverPayment) -> DriverPaymentId {
        source.id
    }

    fn origin(&self, dependent: &PayableEntry) -> Option<DriverPaymentId> {
        dependent.kind.driver_payment_id()
    }

    fn project(
        &self,
        source: &DriverPayment,
        existing: Option<&PayableEntry>,
        now: DateTime<Utc>,
    ) -> PayableEntry {
        let mut entry = PayableEntry {
            id: existing.map_or_else(PayableId::new, |e| e.id),
            description: Self::describe(source),
            amount: source.agreed_amount,
            due_date: source.departure_date,
            status: source.status.convert(),
            supplier: source.driver_name.clone(),
            category: DRIVER_CATEGORY.to_string(),
            kind: PayableKind::DriverPayment {
                driver_payment_id: source.id,
            },
            created_at: existing.map_or(now, |e| e.created_at),
            updated_at: now,
        };
        if let Some(existing) = existing {
            entry.updated_at = existing.updated_at;
            if entry != *existing {
                entry.updated_at = now;
            }
        }
        entry
    }

    fn dependent_settled(&self, dependent: &PayableEntry) -> bool {
        dependent.status.is_settled()
    }

    fn set_dependent_settled(&self, dependent: &mut PayableEntry, settled: bool, now: DateTime<Utc>) {
        dependent.status = PayableStatus::from_settled(settled);
        dependent.updated_at = now;
    }

    fn set_source_settled(&self, source: &mut DriverPayment, settled: bool, now: DateTime<Utc>) {
        source.status = DriverPaymentStatus::from_settled(settled);
        source.updated_at = now;
    }
}
