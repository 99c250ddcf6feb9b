//! Export layout tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rotafin_shared::types::{DriverPaymentId, InvoiceId, NoteId, ReceivableId};
use rust_decimal_macros::dec;

use super::*;
use crate::driver_payments::{DriverPayment, DriverPaymentStatus, DriverStatement};
use crate::invoices::{Invoice, InvoiceStatus};
use crate::notes::{Note, NoteStatus};
use crate::receivables::{ReceivableEntry, ReceivableKind, ReceivableStatus};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 15, 0, 0).unwrap()
}

fn payment(invoice: &str, day: u32, amount: rust_decimal::Decimal) -> DriverPayment {
    DriverPayment {
        id: DriverPaymentId::new(),
        invoice: invoice.to_string(),
        departure_date: date(3, day),
        driver_name: "João Silva".to_string(),
        agreed_amount: amount,
        status: DriverPaymentStatus::Pending,
        bank_account: "BB 1234".to_string(),
        description: String::new(),
        created_at: noon(),
        updated_at: noon(),
    }
}

#[test]
fn test_invoice_row() {
    let invoice = Invoice {
        id: InvoiceId::new(),
        number: "FAT001".to_string(),
        client: "ACME".to_string(),
        amount: dec!(1500),
        due_date: date(12, 31),
        status: InvoiceStatus::Paid,
        description: "Frete".to_string(),
        created_at: noon(),
        updated_at: noon(),
    };

    let sheet = export_sheet(&[invoice], &DisplayFormat::default()).unwrap();
    assert_eq!(sheet.name, "Faturas");
    assert_eq!(sheet.headers.len(), sheet.rows[0].len());
    assert_eq!(
        sheet.rows[0],
        vec!["FAT001", "ACME", "R$ 1.500,00", "31/12/2025", "Pago", "Frete", "02/01/2025"]
    );
}

#[test]
fn test_receivable_row_shows_kind() {
    let entry = ReceivableEntry {
        id: ReceivableId::new(),
        description: "Fatura FAT001 - ACME".to_string(),
        amount: dec!(99.9),
        due_date: date(1, 5),
        status: ReceivableStatus::Received,
        client: "ACME".to_string(),
        kind: ReceivableKind::Invoice {
            invoice_id: InvoiceId::new(),
        },
        created_at: noon(),
        updated_at: noon(),
    };

    let sheet = export_sheet(&[entry], &DisplayFormat::default()).unwrap();
    assert_eq!(sheet.rows[0][1], "R$ 99,90");
    assert_eq!(sheet.rows[0][3], "Recebido");
    assert_eq!(sheet.rows[0][5], "Fatura");
}

#[test]
fn test_note_row_has_performance() {
    let note = Note {
        id: NoteId::new(),
        number: "NF001".to_string(),
        shipper: "Alfa".to_string(),
        due_date: date(6, 10),
        delivery_date: Some(date(6, 12)),
        nfe_key: String::new(),
        description: String::new(),
        status: NoteStatus::DeliveredLate,
        created_at: noon(),
        updated_at: noon(),
    };

    let sheet = export_sheet(&[note], &DisplayFormat::default()).unwrap();
    assert_eq!(sheet.rows[0][3], "12/06/2025");
    assert_eq!(sheet.rows[0][4], "Entregue (Atrasado)");
    assert_eq!(sheet.rows[0][7], "Atrasado");
}

#[test]
fn test_empty_collection_is_rejected() {
    assert_eq!(
        export_sheet::<DriverPayment>(&[], &DisplayFormat::default()),
        Err(ExportError::Empty("Pagamentos Motoristas"))
    );
}

#[test]
fn test_statement_document_paginates() {
    let payments: Vec<_> = (1..=5).map(|day| payment(&format!("FAT{day}"), day, dec!(100))).collect();
    let statement = DriverStatement::build(&payments, "joão silva", date(3, 1), date(3, 31)).unwrap();

    let mut document =
        PagedDocument::driver_statement(&statement, "Transportes Rota", date(4, 1), &DisplayFormat::default());
    document.rows_per_page = 2;

    let pages = document.pages().unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2].rows.len(), 1);
    assert_eq!((pages[2].number, pages[2].of), (3, 3));

    let text = document.to_text().unwrap();
    assert!(text.starts_with("Transportes Rota\nRelatório de Pagamentos - joão silva\n"));
    assert!(text.contains("Período: 01/03/2025 a 31/03/2025"));
    assert!(text.contains("Gerado em: 01/04/2025"));
    assert!(text.contains("Página 3 de 3"));
    assert_eq!(text.matches("Total: R$ 500,00").count(), 1);
    assert_eq!(text.matches('\u{c}').count(), 2);
}

#[test]
fn test_zero_page_size_is_rejected() {
    let document = PagedDocument {
        title: "Vazio".to_string(),
        company: "Transportes Rota".to_string(),
        subtitle: None,
        generated_on: date(1, 1),
        headers: vec!["Coluna".to_string()],
        rows: Vec::new(),
        total: None,
        rows_per_page: 0,
    };
    assert_eq!(document.to_text(), Err(ExportError::InvalidPageSize));
}

#[test]
fn test_empty_document_has_one_page() {
    let document = PagedDocument {
        title: "Vazio".to_string(),
        company: "Transportes Rota".to_string(),
        subtitle: None,
        generated_on: date(1, 1),
        headers: vec!["Coluna".to_string()],
        rows: Vec::new(),
        total: None,
        rows_per_page: PagedDocument::DEFAULT_ROWS_PER_PAGE,
    };
    assert!(document.to_text().unwrap().ends_with("Página 1 de 1\n"));
}
