//! Per-collection export layouts.

use super::error::ExportError;
use super::format::{DisplayFormat, format_date, format_optional_date};
use super::sheet::Sheet;
use crate::driver_payments::DriverPayment;
use crate::invoices::Invoice;
use crate::notes::{Note, performance_label};
use crate::payables::PayableEntry;
use crate::receivables::ReceivableEntry;

/// A record that exports as one display row.
pub trait Exportable {
    /// Sheet name.
    const SHEET: &'static str;
    /// Header row.
    const HEADERS: &'static [&'static str];

    /// Display cells in header order.
    fn cells(&self, format: &DisplayFormat) -> Vec<String>;
}

/// Renders `records` into a sheet.
///
/// # Errors
///
/// Returns `ExportError::Empty` when there is nothing to export.
pub fn export_sheet<T: Exportable>(records: &[T], format: &DisplayFormat) -> Result<Sheet, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty(T::SHEET));
    }
    let mut sheet = Sheet::new(T::SHEET, T::HEADERS);
    sheet.rows = records.iter().map(|r| r.cells(format)).collect();
    tracing::debug!(sheet = T::SHEET, rows = sheet.rows.len(), "sheet exported");
    Ok(sheet)
}

impl Exportable for Invoice {
    const SHEET: &'static str = "Faturas";
    const HEADERS: &'static [&'static str] = &[
        "Número da Fatura",
        "Cliente",
        "Valor",
        "Data de Vencimento",
        "Status",
        "Descrição",
        "Data de Criação",
    ];

    fn cells(&self, format: &DisplayFormat) -> Vec<String> {
        vec![
            self.number.clone(),
            self.client.clone(),
            format.money(self.amount),
            format_date(self.due_date),
            self.status.label().to_string(),
            self.description.clone(),
            format.timestamp_date(self.created_at),
        ]
    }
}

impl Exportable for PayableEntry {
    const SHEET: &'static str = "Contas a Pagar";
    const HEADERS: &'static [&'static str] = &[
        "Descrição",
        "Valor",
        "Data de Vencimento",
        "Status",
        "Fornecedor",
        "Categoria",
        "Data de Criação",
    ];

    fn cells(&self, format: &DisplayFormat) -> Vec<String> {
        vec![
            self.description.clone(),
            format.money(self.amount),
            format_date(self.due_date),
            self.status.label().to_string(),
            self.supplier.clone(),
            self.category.clone(),
            format.timestamp_date(self.created_at),
        ]
    }
}

impl Exportable for ReceivableEntry {
    const SHEET: &'static str = "Contas a Receber";
    const HEADERS: &'static [&'static str] = &[
        "Descrição",
        "Valor",
        "Data de Vencimento",
        "Status",
        "Cliente",
        "Tipo",
        "Data de Criação",
    ];

    fn cells(&self, format: &DisplayFormat) -> Vec<String> {
        vec![
            self.description.clone(),
            format.money(self.amount),
            format_date(self.due_date),
            self.status.label().to_string(),
            self.client.clone(),
            self.kind.label().to_string(),
            format.timestamp_date(self.created_at),
        ]
    }
}

impl Exportable for DriverPayment {
    const SHEET: &'static str = "Pagamentos Motoristas";
    const HEADERS: &'static [&'static str] = &[
        "Fatura",
        "Data de Saída",
        "Nome do Motorista",
        "Valor Combinado",
        "Status",
        "Conta Bancária",
        "Descrição",
        "Data de Criação",
    ];

    fn cells(&self, format: &DisplayFormat) -> Vec<String> {
        vec![
            self.invoice.clone(),
            format_date(self.departure_date),
            self.driver_name.clone(),
            format.money(self.agreed_amount),
            self.status.label().to_string(),
            self.bank_account.clone(),
            self.description.clone(),
            format.timestamp_date(self.created_at),
        ]
    }
}

impl Exportable for Note {
    const SHEET: &'static str = "Notas";
    const HEADERS: &'static [&'static str] = &[
        "Número da Nota",
        "Embarcador",
        "Data de Vencimento",
        "Data de Entrega",
        "Status",
        "Chave NFe",
        "Descrição",
        "Performance",
    ];

    fn cells(&self, _format: &DisplayFormat) -> Vec<String> {
        vec![
            self.number.clone(),
            self.shipper.clone(),
            format_date(self.due_date),
            format_optional_date(self.delivery_date),
            self.status.label().to_string(),
            self.nfe_key.clone(),
            self.description.clone(),
            performance_label(self.due_date, self.delivery_date).to_string(),
        ]
    }
}
