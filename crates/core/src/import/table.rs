//! Header-plus-rows tables read from CSV.

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;

use super::error::ImportError;

/// One cell of an imported table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Nothing in the cell.
    Empty,
    /// Text as typed.
    Text(String),
    /// A numeric cell (amounts, spreadsheet date serials).
    Number(Decimal),
}

impl Cell {
    /// True for empty cells and whitespace-only text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Trimmed text of the cell; numbers are rendered, blanks are `None`.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            Self::Number(n) => Some(n.normalize().to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

/// A data row and its 1-based position in the source (header is row 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row number as a spreadsheet would show it.
    pub number: usize,
    /// Cells in header order; may be shorter or longer than the header.
    pub cells: Vec<Cell>,
}

/// A header row plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Header cells, trimmed.
    pub headers: Vec<String>,
    /// Data rows; fully blank rows are dropped.
    pub rows: Vec<Row>,
}

impl Table {
    /// Builds a table from already-parsed rows, numbering them from 2.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Empty` when no row has content.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, ImportError> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, cells)| Row {
                number: index + 2,
                cells,
            })
            .collect();
        Self::checked(headers, rows)
    }

    /// Parses CSV text. The delimiter is `;` when the header line holds more
    /// semicolons than commas (spreadsheet exports in pt-BR locales), `,`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Unreadable` for malformed CSV and
    /// `ImportError::Empty` when there are no data rows.
    pub fn from_csv_str(text: &str) -> Result<Self, ImportError> {
        let text = text.trim_start_matches('\u{feff}');
        let first_line = text.lines().next().unwrap_or_default();
        let delimiter = if first_line.matches(';').count() > first_line.matches(',').count() {
            b';'
        } else {
            b','
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let number = record
                .position()
                .and_then(|p| usize::try_from(p.line()).ok())
                .unwrap_or(index + 2);
            rows.push(Row {
                number,
                cells: record.iter().map(Cell::from).collect(),
            });
        }
        Self::checked(headers, rows)
    }

    /// Reads CSV from any reader.
    ///
    /// # Errors
    ///
    /// See [`Table::from_csv_str`]; I/O failures are `ImportError::Unreadable`.
    pub fn from_csv_reader<R: Read>(mut reader: R) -> Result<Self, ImportError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_csv_str(&text)
    }

    /// Reads a CSV file.
    ///
    /// # Errors
    ///
    /// See [`Table::from_csv_reader`].
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let file = std::fs::File::open(path.as_ref()).map_err(|err| {
            ImportError::Unreadable(format!("{}: {err}", path.as_ref().display()))
        })?;
        Self::from_csv_reader(file)
    }

    fn checked(headers: Vec<String>, rows: Vec<Row>) -> Result<Self, ImportError> {
        let rows: Vec<Row> = rows
            .into_iter()
            .filter(|row| !row.cells.iter().all(Cell::is_blank))
            .collect();
        if headers.iter().all(String::is_empty) || rows.is_empty() {
            return Err(ImportError::Empty);
        }
        Ok(Self { headers, rows })
    }
}
