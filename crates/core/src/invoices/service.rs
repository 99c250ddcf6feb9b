//! Invoice editing rules.

use chrono::{DateTime, Utc};
use rotafin_shared::types::InvoiceId;

use super::types::{Invoice, InvoiceInput, InvoiceStatus};
use crate::error::{RecordError, require, valid_amount};
use crate::sync::Settlement;

const COLLECTION: &str = "invoices";

/// Invoice service for business logic.
///
/// Operates on the loaded collection in place; persisting it (and running the
/// receivables sync) is the caller's job.
pub struct InvoiceService;

impl InvoiceService {
    /// Validate invoice input.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for a blank number or client.
    /// Returns `RecordError::NegativeAmount` for an amount below zero and
    /// `RecordError::AmountTooLarge` above `MAX_AMOUNT`.
    pub fn validate(input: &InvoiceInput) -> Result<(), RecordError> {
        require("number", &input.number)?;
        require("client", &input.client)?;
        valid_amount("amount", input.amount)
    }

    /// Appends a new invoice.
    ///
    /// # Errors
    ///
    /// Returns a validation error; the collection is left unchanged.
    pub fn create(
        invoices: &mut Vec<Invoice>,
        input: InvoiceInput,
        now: DateTime<Utc>,
    ) -> Result<InvoiceId, RecordError> {
        Self::validate(&input)?;
        let id = InvoiceId::new();
        invoices.push(Invoice {
            id,
            number: input.number.trim().to_string(),
            client: input.client.trim().to_string(),
            amount: input.amount,
            due_date: input.due_date,
            status: input.status,
            description: input.description,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    /// Replaces the editable fields of an invoice.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id, or a validation error.
    pub fn update(
        invoices: &mut [Invoice],
        id: InvoiceId,
        input: InvoiceInput,
        now: DateTime<Utc>,
    ) -> Result<(), RecordError> {
        Self::validate(&input)?;
        let invoice = Self::find_mut(invoices, id)?;
        invoice.number = input.number.trim().to_string();
        invoice.client = input.client.trim().to_string();
        invoice.amount = input.amount;
        invoice.due_date = input.due_date;
        invoice.status = input.status;
        invoice.description = input.description;
        invoice.updated_at = now;
        Ok(())
    }

    /// Removes an invoice.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn delete(invoices: &mut Vec<Invoice>, id: InvoiceId) -> Result<Invoice, RecordError> {
        let index = invoices
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| RecordError::not_found(COLLECTION, id))?;
        Ok(invoices.remove(index))
    }

    /// Flips pending/paid and returns the new status.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn toggle_status(
        invoices: &mut [Invoice],
        id: InvoiceId,
        now: DateTime<Utc>,
    ) -> Result<InvoiceStatus, RecordError> {
        let invoice = Self::find_mut(invoices, id)?;
        invoice.status = invoice.status.toggled();
        invoice.updated_at = now;
        Ok(invoice.status)
    }

    fn find_mut(invoices: &mut [Invoice], id: InvoiceId) -> Result<&mut Invoice, RecordError> {
        invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| RecordError::not_found(COLLECTION, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn input(number: &str) -> InvoiceInput {
        InvoiceInput {
            number: number.to_string(),
            client: "Transportes Lima".to_string(),
            amount: dec!(1500.00),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            status: InvoiceStatus::Pending,
            description: String::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::UNIX_EPOCH
    }

    #[test]
    fn test_create_trims_and_stamps() {
        let mut invoices = Vec::new();
        let id = InvoiceService::create(&mut invoices, input("  FAT001 "), now()).unwrap();

        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].id, id);
        assert_eq!(invoices[0].number, "FAT001");
        assert_eq!(invoices[0].created_at, now());
    }

    #[test]
    fn test_create_rejects_blank_client_without_writing() {
        let mut invoices = Vec::new();
        let mut bad = input("FAT001");
        bad.client = " ".to_string();

        let result = InvoiceService::create(&mut invoices, bad, now());
        assert_eq!(result, Err(RecordError::MissingField("client")));
        assert!(invoices.is_empty());
    }

    #[test]
    fn test_create_rejects_negative_amount() {
        let mut invoices = Vec::new();
        let mut bad = input("FAT001");
        bad.amount = dec!(-1);

        let result = InvoiceService::create(&mut invoices, bad, now());
        assert_eq!(result, Err(RecordError::NegativeAmount("amount")));
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut invoices = Vec::new();
        let id = InvoiceService::create(&mut invoices, input("FAT001"), now()).unwrap();
        let later = now() + chrono::Duration::hours(1);

        let mut edit = input("FAT001");
        edit.amount = dec!(99);
        InvoiceService::update(&mut invoices, id, edit, later).unwrap();

        assert_eq!(invoices[0].id, id);
        assert_eq!(invoices[0].amount, dec!(99));
        assert_eq!(invoices[0].created_at, now());
        assert_eq!(invoices[0].updated_at, later);
    }

    #[test]
    fn test_toggle_and_delete() {
        let mut invoices = Vec::new();
        let id = InvoiceService::create(&mut invoices, input("FAT001"), now()).unwrap();

        assert_eq!(
            InvoiceService::toggle_status(&mut invoices, id, now()),
            Ok(InvoiceStatus::Paid)
        );
        assert_eq!(InvoiceService::delete(&mut invoices, id).unwrap().id, id);
        assert!(matches!(
            InvoiceService::delete(&mut invoices, id),
            Err(RecordError::NotFound { .. })
        ));
    }
}
