//! Invoice → receivable pairing.

use chrono::{DateTime, Utc};
use rotafin_shared::types::{InvoiceId, ReceivableId};

use super::types::{ReceivableEntry, ReceivableKind, ReceivableStatus};
use crate::invoices::{Invoice, InvoiceStatus};
use crate::sync::{Pairing, Settlement};

/// Derives one receivable per invoice.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceReceivables;

impl InvoiceReceivables {
    /// Label of the receivable derived from `invoice`.
    #[must_use]
    pub fn describe(invoice: &Invoice) -> String {
        format!("Fatura {} - {}", invoice.number, invoice.client)
    }
}

impl Pairing for InvoiceReceivables {
    type Source = Invoice;
    type Dependent = ReceivableEntry;
    type Key = InvoiceId;

    const NAME: &'static str = "invoice_receivable";

    fn source_key(&self, source: &Invoice) -> InvoiceId {
        source.id
    }

    fn origin(&self, dependent: &ReceivableEntry) -> Option<InvoiceId> {
        dependent.kind.invoice_id()
    }

    fn project(
        &self,
        source: &Invoice,
        existing: Option<&ReceivableEntry>,
        now: DateTime<Utc>,
    ) -> ReceivableEntry {
        let mut entry = ReceivableEntry {
            id: existing.map_or_else(ReceivableId::new, |e| e.id),
            description: Self::describe(source),
            amount: source.amount,
            due_date: source.due_date,
            status: source.status.convert(),
            client: source.client.clone(),
            kind: ReceivableKind::Invoice {
                invoice_id: source.id,
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

    fn dependent_settled(&self, dependent: &ReceivableEntry) -> bool {
        dependent.status.is_settled()
    }

    fn set_dependent_settled(&self, dependent: &mut ReceivableEntry, settled: bool, now: DateTime<Utc>) {
        dependent.status = ReceivableStatus::from_settled(settled);
        dependent.updated_at = now;
    }

    fn set_source_settled(&self, source: &mut Invoice, settled: bool, now: DateTime<Utc>) {
        source.status = InvoiceStatus::from_settled(settled);
        source.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{synchronize, toggle_settlement};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn invoice(status: InvoiceStatus) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            number: "1".to_string(),
            client: "ACME".to_string(),
            amount: dec!(100),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            status,
            description: String::new(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    fn manual() -> ReceivableEntry {
        ReceivableEntry {
            id: ReceivableId::new(),
            description: "Aluguel de galpão".to_string(),
            amount: dec!(50),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            status: ReceivableStatus::Pending,
            client: "Galpões SA".to_string(),
            kind: ReceivableKind::Manual,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    fn later() -> DateTime<Utc> {
        DateTime::UNIX_EPOCH + chrono::Duration::days(1)
    }

    #[test]
    fn test_invoice_round_trip_keeps_entry_id() {
        let mut invoices = vec![invoice(InvoiceStatus::Pending)];
        let first = synchronize(&InvoiceReceivables, &invoices, Vec::new(), DateTime::UNIX_EPOCH);

        assert_eq!(first.records.len(), 1);
        let entry = &first.records[0];
        assert_eq!(entry.description, "Fatura 1 - ACME");
        assert_eq!(entry.amount, dec!(100));
        assert_eq!(entry.status, ReceivableStatus::Pending);
        assert_eq!(entry.kind.invoice_id(), Some(invoices[0].id));
        let id = entry.id;

        invoices[0].status = InvoiceStatus::Paid;
        let second = synchronize(&InvoiceReceivables, &invoices, first.records, later());
        assert_eq!(second.records.len(), 1);
        assert_eq!(second.records[0].id, id);
        assert_eq!(second.records[0].status, ReceivableStatus::Received);
        assert_eq!(second.records[0].created_at, DateTime::UNIX_EPOCH);
        assert_eq!(second.records[0].updated_at, later());
    }

    #[test]
    fn test_unchanged_projection_keeps_updated_at() {
        let invoices = vec![invoice(InvoiceStatus::Pending)];
        let first = synchronize(&InvoiceReceivables, &invoices, Vec::new(), DateTime::UNIX_EPOCH);
        let second = synchronize(&InvoiceReceivables, &invoices, first.records.clone(), later());
        assert_eq!(second.records, first.records);
    }

    #[test]
    fn test_deleting_invoice_keeps_manual_entries() {
        let invoices = vec![invoice(InvoiceStatus::Pending)];
        let manual = manual();
        let first = synchronize(
            &InvoiceReceivables,
            &invoices,
            vec![manual.clone()],
            DateTime::UNIX_EPOCH,
        );
        assert_eq!(first.records.len(), 2);

        let second = synchronize(&InvoiceReceivables, &[], first.records, later());
        assert_eq!(second.records, vec![manual]);
    }

    #[test]
    fn test_toggle_received_pays_invoice_without_duplicates() {
        let mut invoices = vec![invoice(InvoiceStatus::Pending)];
        let mut entries = synchronize(&InvoiceReceivables, &invoices, Vec::new(), DateTime::UNIX_EPOCH).records;

        let toggled = toggle_settlement(&InvoiceReceivables, &mut entries[0], &mut invoices, later());
        assert!(toggled.settled);
        assert!(toggled.source_updated);
        assert_eq!(invoices[0].status, InvoiceStatus::Paid);
        assert_eq!(invoices[0].created_at, DateTime::UNIX_EPOCH);
        assert_eq!(invoices[0].updated_at, later());

        let resynced = synchronize(&InvoiceReceivables, &invoices, entries, later());
        assert_eq!(resynced.records.len(), 1);
        assert_eq!(resynced.records[0].status, ReceivableStatus::Received);
    }
}
