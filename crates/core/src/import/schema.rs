//! Column layouts shared by import, templates and exports.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::cells::{parse_amount, parse_date};
use super::error::RowError;
use super::table::Cell;
use crate::error::MAX_AMOUNT;

/// One importable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Localized header as it appears in the first row.
    pub header: &'static str,
    /// Field the column feeds; also accepted as a header.
    pub key: &'static str,
}

/// The columns of one dataset plus the example row of its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Sheet name used by templates and exports.
    pub sheet: &'static str,
    /// Columns in template order.
    pub columns: &'static [Column],
    /// Example values, one per column.
    pub example: &'static [&'static str],
}

impl Schema {
    /// Header row in template order.
    #[must_use]
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    /// Header of the column feeding `key`; the key itself when unknown.
    #[must_use]
    pub fn header_of(&self, key: &'static str) -> &'static str {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .map_or(key, |c| c.header)
    }

    /// Locates each column in an actual header row.
    ///
    /// Matching ignores case and surrounding blanks; header order is free and
    /// unknown headers are ignored.
    #[must_use]
    pub fn bind<'s>(&'s self, headers: &[String]) -> Binding<'s> {
        let positions = self
            .columns
            .iter()
            .map(|column| {
                headers.iter().position(|h| {
                    let h = h.trim();
                    h.eq_ignore_ascii_case(column.key) || h.to_lowercase() == column.header.to_lowercase()
                })
            })
            .collect();
        Binding {
            schema: self,
            positions,
        }
    }
}

/// A schema resolved against a concrete header row.
#[derive(Debug, Clone)]
pub struct Binding<'s> {
    schema: &'s Schema,
    positions: Vec<Option<usize>>,
}

impl Binding<'_> {
    /// Views a row of cells through this binding.
    #[must_use]
    pub const fn row<'r>(&'r self, cells: &'r [Cell]) -> MappedRow<'r> {
        MappedRow {
            binding: self,
            cells,
        }
    }

    /// True when the header row contains the column for `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.schema
            .columns
            .iter()
            .zip(&self.positions)
            .any(|(c, p)| c.key == key && p.is_some())
    }
}

/// A data row addressed by field key.
///
/// Accessors return `None` for absent columns and blank cells, so merging
/// only overwrites fields the row actually carries.
#[derive(Debug, Clone, Copy)]
pub struct MappedRow<'r> {
    binding: &'r Binding<'r>,
    cells: &'r [Cell],
}

impl MappedRow<'_> {
    /// The non-blank cell feeding `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Cell> {
        let index = self
            .binding
            .schema
            .columns
            .iter()
            .position(|c| c.key == key)?;
        let position = self.binding.positions[index]?;
        self.cells.get(position).filter(|cell| !cell.is_blank())
    }

    /// Trimmed text.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Cell::text)
    }

    /// Required trimmed text for a natural-key column.
    ///
    /// # Errors
    ///
    /// Returns `RowError::MissingKey` when absent or blank.
    pub fn key(&self, key: &'static str) -> Result<String, RowError> {
        self.text(key)
            .ok_or_else(|| RowError::MissingKey(self.binding.schema.header_of(key)))
    }

    /// Non-negative amount no larger than [`MAX_AMOUNT`].
    ///
    /// # Errors
    ///
    /// Returns `RowError::Invalid` for unparseable, negative or oversized values.
    pub fn amount(&self, key: &'static str) -> Result<Option<Decimal>, RowError> {
        self.parsed(key, |cell| {
            parse_amount(cell).filter(|amount| {
                (!amount.is_sign_negative() || amount.is_zero()) && *amount <= MAX_AMOUNT
            })
        })
    }

    /// Calendar date.
    ///
    /// # Errors
    ///
    /// Returns `RowError::Invalid` for unparseable values.
    pub fn date(&self, key: &'static str) -> Result<Option<NaiveDate>, RowError> {
        self.parsed(key, parse_date)
    }

    /// A value parsed from the cell text, typically a status.
    ///
    /// # Errors
    ///
    /// Returns `RowError::Invalid` when `parse` rejects the text.
    pub fn parse<T>(&self, key: &'static str, parse: fn(&str) -> Option<T>) -> Result<Option<T>, RowError> {
        self.parsed(key, |cell| cell.text().and_then(|text| parse(&text)))
    }

    fn parsed<T>(
        &self,
        key: &'static str,
        parse: impl Fn(&Cell) -> Option<T>,
    ) -> Result<Option<T>, RowError> {
        match self.get(key) {
            None => Ok(None),
            Some(cell) => parse(cell).map(Some).ok_or_else(|| RowError::Invalid {
                column: self.binding.schema.header_of(key),
                value: cell.text().unwrap_or_default(),
            }),
        }
    }
}

/// The importable / exportable collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Invoices.
    Invoices,
    /// Accounts receivable.
    Receivables,
    /// Accounts payable.
    Payables,
    /// Driver payments.
    DriverPayments,
    /// Delivery notes.
    Notes,
}

impl Dataset {
    /// All datasets.
    pub const ALL: [Self; 5] = [
        Self::Invoices,
        Self::Receivables,
        Self::Payables,
        Self::DriverPayments,
        Self::Notes,
    ];

    /// Short machine name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::Receivables => "receivables",
            Self::Payables => "payables",
            Self::DriverPayments => "driver-payments",
            Self::Notes => "notes",
        }
    }

    /// Column layout.
    #[must_use]
    pub const fn schema(self) -> &'static Schema {
        match self {
            Self::Invoices => &INVOICES,
            Self::Receivables => &RECEIVABLES,
            Self::Payables => &PAYABLES,
            Self::DriverPayments => &DRIVER_PAYMENTS,
            Self::Notes => &NOTES,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| format!("unknown dataset '{s}'"))
    }
}

/// Invoice columns.
pub const INVOICES: Schema = Schema {
    sheet: "Faturas",
    columns: &[
        Column { header: "Número da Fatura", key: "number" },
        Column { header: "Cliente", key: "client" },
        Column { header: "Valor", key: "amount" },
        Column { header: "Data de Vencimento", key: "due_date" },
        Column { header: "Status", key: "status" },
        Column { header: "Descrição", key: "description" },
    ],
    example: &["FAT001", "Cliente Exemplo", "1500.00", "2025-12-31", "pending", "Descrição da fatura"],
};

/// Receivable columns; `Tipo` is informational and never imported.
pub const RECEIVABLES: Schema = Schema {
    sheet: "Contas a Receber",
    columns: &[
        Column { header: "Descrição", key: "description" },
        Column { header: "Valor", key: "amount" },
        Column { header: "Data de Vencimento", key: "due_date" },
        Column { header: "Status", key: "status" },
        Column { header: "Cliente", key: "client" },
        Column { header: "Tipo", key: "kind" },
    ],
    example: &["Serviço de Consultoria", "1500.00", "2025-12-31", "pending", "Cliente ABC", "manual"],
};

/// Payable columns.
pub const PAYABLES: Schema = Schema {
    sheet: "Contas a Pagar",
    columns: &[
        Column { header: "Descrição", key: "description" },
        Column { header: "Valor", key: "amount" },
        Column { header: "Data de Vencimento", key: "due_date" },
        Column { header: "Status", key: "status" },
        Column { header: "Fornecedor", key: "supplier" },
        Column { header: "Categoria", key: "category" },
    ],
    example: &["Conta de Luz", "350.00", "2025-12-31", "pending", "Companhia Elétrica", "Utilidades"],
};

/// Driver payment columns.
pub const DRIVER_PAYMENTS: Schema = Schema {
    sheet: "Pagamentos Motoristas",
    columns: &[
        Column { header: "Fatura", key: "invoice" },
        Column { header: "Data de Saída", key: "departure_date" },
        Column { header: "Nome do Motorista", key: "driver_name" },
        Column { header: "Valor Combinado", key: "agreed_amount" },
        Column { header: "Status", key: "status" },
        Column { header: "Conta Bancária", key: "bank_account" },
        Column { header: "Descrição", key: "description" },
    ],
    example: &[
        "FAT001",
        "2025-12-15",
        "João Silva",
        "500.00",
        "pending",
        "Banco do Brasil - Ag: 1234 Cc: 56789",
        "Entrega São Paulo",
    ],
};

/// Note columns.
pub const NOTES: Schema = Schema {
    sheet: "Notas",
    columns: &[
        Column { header: "Número da Nota", key: "number" },
        Column { header: "Embarcador", key: "shipper" },
        Column { header: "Data de Vencimento", key: "due_date" },
        Column { header: "Data de Entrega", key: "delivery_date" },
        Column { header: "Chave NFe", key: "nfe_key" },
        Column { header: "Descrição", key: "description" },
    ],
    example: &[
        "NF001",
        "Embarcador Exemplo",
        "2025-12-31",
        "2025-12-30",
        "35200114200166000166550010000000001123456789",
        "Descrição da nota",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_bind_is_order_and_case_insensitive() {
        let headers = headers(&["status", "  CLIENTE ", "Coluna Extra", "Número da Fatura"]);
        let binding = INVOICES.bind(&headers);
        let cells = vec![
            Cell::from("Pago"),
            Cell::from("ACME"),
            Cell::from("ignored"),
            Cell::from("FAT9"),
        ];
        let row = binding.row(&cells);

        assert_eq!(row.text("number").as_deref(), Some("FAT9"));
        assert_eq!(row.text("client").as_deref(), Some("ACME"));
        assert_eq!(row.text("status").as_deref(), Some("Pago"));
        assert!(row.get("amount").is_none());
        assert!(!binding.has("amount"));
    }

    #[test]
    fn test_invalid_cell_reports_header() {
        let headers = headers(&["Número da Fatura", "Valor"]);
        let binding = INVOICES.bind(&headers);
        let cells = vec![Cell::from("FAT1"), Cell::from("-5")];

        assert_eq!(
            binding.row(&cells).amount("amount"),
            Err(RowError::Invalid {
                column: "Valor",
                value: "-5".to_string()
            })
        );
    }

    #[test]
    fn test_oversized_amount_is_invalid() {
        let headers = headers(&["Número da Fatura", "Valor"]);
        let binding = INVOICES.bind(&headers);
        let huge = "79228162514264337593543950335";
        let cells = vec![Cell::from("FAT1"), Cell::from(huge)];

        assert_eq!(
            binding.row(&cells).amount("amount"),
            Err(RowError::Invalid {
                column: "Valor",
                value: huge.to_string()
            })
        );

        let cells = vec![Cell::from("FAT1"), Cell::from("9999999999999,99")];
        assert_eq!(binding.row(&cells).amount("amount"), Ok(Some(MAX_AMOUNT)));
    }

    #[test]
    fn test_short_row_reads_missing_cells_as_absent() {
        let headers = headers(&["Número da Fatura", "Cliente"]);
        let binding = INVOICES.bind(&headers);
        let cells = vec![Cell::from("FAT1")];
        assert_eq!(binding.row(&cells).text("client"), None);
    }

    #[test]
    fn test_examples_match_columns() {
        for dataset in Dataset::ALL {
            let schema = dataset.schema();
            assert_eq!(schema.columns.len(), schema.example.len(), "{dataset}");
            assert_eq!(dataset.name().parse::<Dataset>(), Ok(dataset));
        }
        assert_eq!("driver_payments".parse::<Dataset>(), Ok(Dataset::DriverPayments));
    }
}
