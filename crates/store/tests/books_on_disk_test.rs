//! The books persisted through a data directory survive a reopen.

use chrono::{NaiveDate, TimeZone, Utc};
use rotafin_core::Books;
use rotafin_core::books::BooksError;
use rotafin_core::clock::FixedClock;
use rotafin_core::invoices::{InvoiceInput, InvoiceStatus};
use rotafin_core::receivables::ReceivableStatus;
use rotafin_core::store::{Collection, KeyValueStore, StoreError};
use rotafin_store::connect;
use rust_decimal_macros::dec;

fn clock() -> FixedClock {
    FixedClock::at(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap())
}

fn input() -> InvoiceInput {
    InvoiceInput {
        number: "FAT001".to_string(),
        client: "ACME".to_string(),
        amount: dec!(1500),
        due_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        status: InvoiceStatus::Pending,
        description: String::new(),
    }
}

#[test]
fn test_invoice_and_receivable_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut books = Books::new(connect(dir.path()).unwrap(), clock());
    let (invoice_id, _) = books.create_invoice(input()).unwrap();
    books.toggle_invoice(invoice_id).unwrap();
    drop(books);

    let books = Books::new(connect(dir.path()).unwrap(), clock());
    let invoices = books.invoices().unwrap();
    let receivables = books.receivables().unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].status, InvoiceStatus::Paid);
    assert_eq!(receivables.len(), 1);
    assert_eq!(receivables[0].status, ReceivableStatus::Received);
}

#[test]
fn test_documents_are_named_after_collections() {
    let dir = tempfile::tempdir().unwrap();
    let mut books = Books::new(connect(dir.path()).unwrap(), clock());
    books.create_invoice(input()).unwrap();

    assert!(dir.path().join("invoices.json").is_file());
    assert!(dir.path().join("accounts_receivable.json").is_file());

    let store = books.into_store();
    let raw = store.get(Collection::Invoices.key()).unwrap().unwrap();
    assert!(raw.contains("FAT001"));
}

#[test]
fn test_corrupt_document_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.json"), "{not json").unwrap();

    let books = Books::new(connect(dir.path()).unwrap(), clock());
    assert!(matches!(
        books.notes(),
        Err(BooksError::Store(StoreError::Corrupt { key: "notes", .. }))
    ));
}
