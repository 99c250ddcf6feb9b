//! Print-style paginated documents.
//!
//! Layout only: the document knows its pages, header block and grand total,
//! and renders them as plain text. Binary encodings are left to the caller.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::ExportError;
use super::format::{DisplayFormat, format_date};
use crate::driver_payments::DriverStatement;

/// A titled table split into fixed-size pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedDocument {
    /// Document title.
    pub title: String,
    /// Company name printed above the title.
    pub company: String,
    /// Optional line under the title (period, filters).
    pub subtitle: Option<String>,
    /// Date the document was produced.
    pub generated_on: NaiveDate,
    /// Table header.
    pub headers: Vec<String>,
    /// Table rows.
    pub rows: Vec<Vec<String>>,
    /// Grand total line printed on the last page.
    pub total: Option<String>,
    /// Rows per page.
    pub rows_per_page: usize,
}

/// One page of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,
    /// Total number of pages.
    pub of: usize,
    /// Rows on this page.
    pub rows: &'a [Vec<String>],
}

impl PagedDocument {
    /// Rows per page unless overridden.
    pub const DEFAULT_ROWS_PER_PAGE: usize = 25;

    /// Splits the rows into pages; an empty table still has one page.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidPageSize` when `rows_per_page` is zero.
    pub fn pages(&self) -> Result<Vec<Page<'_>>, ExportError> {
        if self.rows_per_page == 0 {
            return Err(ExportError::InvalidPageSize);
        }
        if self.rows.is_empty() {
            return Ok(vec![Page {
                number: 1,
                of: 1,
                rows: &[],
            }]);
        }
        let chunks: Vec<_> = self.rows.chunks(self.rows_per_page).collect();
        let of = chunks.len();
        Ok(chunks
            .into_iter()
            .enumerate()
            .map(|(i, rows)| Page {
                number: i + 1,
                of,
                rows,
            })
            .collect())
    }

    /// Renders every page as aligned plain text, pages separated by a form
    /// feed.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidPageSize` when `rows_per_page` is zero.
    pub fn to_text(&self) -> Result<String, ExportError> {
        let widths = self.column_widths();
        let pages = self.pages()?;
        let mut out = String::new();

        for page in &pages {
            if page.number > 1 {
                out.push('\u{c}');
            }
            out.push_str(&self.company);
            out.push('\n');
            out.push_str(&self.title);
            out.push('\n');
            if let Some(subtitle) = &self.subtitle {
                out.push_str(subtitle);
                out.push('\n');
            }
            out.push_str(&format!("Gerado em: {}\n\n", format_date(self.generated_on)));
            out.push_str(&render_line(&self.headers, &widths));
            for row in page.rows {
                out.push_str(&render_line(row, &widths));
            }
            if page.number == page.of
                && let Some(total) = &self.total
            {
                out.push('\n');
                out.push_str(total);
                out.push('\n');
            }
            out.push_str(&format!("\nPágina {} de {}\n", page.number, page.of));
        }
        Ok(out)
    }

    /// Payment report of one driver over a period.
    #[must_use]
    pub fn driver_statement(
        statement: &DriverStatement,
        company: &str,
        generated_on: NaiveDate,
        format: &DisplayFormat,
    ) -> Self {
        Self {
            title: format!("Relatório de Pagamentos - {}", statement.driver),
            company: company.to_string(),
            subtitle: Some(format!(
                "Período: {} a {}",
                format_date(statement.start),
                format_date(statement.end)
            )),
            generated_on,
            headers: ["Fatura", "Data Saída", "Valor", "Status", "Conta Bancária"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            rows: statement
                .payments
                .iter()
                .map(|p| {
                    vec![
                        p.invoice.clone(),
                        format_date(p.departure_date),
                        format.money(p.agreed_amount),
                        p.status.label().to_string(),
                        p.bank_account.clone(),
                    ]
                })
                .collect(),
            total: Some(format!("Total: {}", format.money(statement.total))),
            rows_per_page: Self::DEFAULT_ROWS_PER_PAGE,
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}
