//! Sync, listings and imports.

use std::path::Path;

use anyhow::Context;
use rotafin_core::books::ImportSummary;
use rotafin_core::entries::EntryTotals;
use rotafin_core::export::{format_date, format_optional_date};
use rotafin_core::import::{Dataset, Table};

use super::Session;

impl Session {
    pub(super) fn sync(&mut self) -> anyhow::Result<()> {
        let report = self.books.resync()?;
        println!(
            "receivables: {} created, {} updated, {} removed",
            report.receivables_created, report.receivables_updated, report.receivables_removed
        );
        println!(
            "payables: {} created, {} updated, {} removed",
            report.payables_created, report.payables_updated, report.payables_removed
        );
        println!("notes: {} status changes", report.note_status_changes);
        Ok(())
    }

    pub(super) fn notes(&self) -> anyhow::Result<()> {
        for note in self.books.notes()? {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                note.number,
                note.shipper,
                format_date(note.due_date),
                format_optional_date(note.delivery_date),
                note.status.label()
            );
        }
        Ok(())
    }

    pub(super) fn receivables(&self, client: &str) -> anyhow::Result<()> {
        let (entries, totals) = self.books.receivables_by_client(client)?;
        for entry in &entries {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                entry.description,
                self.format.money(entry.amount),
                format_date(entry.due_date),
                entry.status.label(),
                entry.client,
                entry.kind.label()
            );
        }
        self.print_totals(&totals, "Recebido");
        Ok(())
    }

    pub(super) fn payables(&self, supplier: &str) -> anyhow::Result<()> {
        let (entries, totals) = self.books.payables_by_supplier(supplier)?;
        for entry in &entries {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                entry.description,
                self.format.money(entry.amount),
                format_date(entry.due_date),
                entry.status.label(),
                entry.supplier,
                entry.category
            );
        }
        self.print_totals(&totals, "Pago");
        Ok(())
    }

    fn print_totals(&self, totals: &EntryTotals, settled_label: &str) {
        println!(
            "Pendente: {} ({})  {settled_label}: {} ({})",
            self.format.money(totals.pending),
            totals.pending_count,
            self.format.money(totals.settled),
            totals.settled_count
        );
    }

    pub(super) fn import(&mut self, dataset: Dataset, file: &Path) -> anyhow::Result<()> {
        let table = Table::from_csv_path(file).with_context(|| format!("reading {}", file.display()))?;
        let summary = match dataset {
            Dataset::Invoices => self.books.import_invoices(&table)?.0,
            Dataset::Receivables => self.books.import_receivables(&table)?.0,
            Dataset::Payables => self.books.import_payables(&table)?.0,
            Dataset::DriverPayments => self.books.import_driver_payments(&table)?.0,
            Dataset::Notes => self.books.import_notes(&table)?.0,
        };
        print_summary(dataset, &summary);
        Ok(())
    }
}

fn print_summary(dataset: Dataset, summary: &ImportSummary) {
    println!(
        "{dataset}: {} created, {} updated, {} skipped",
        summary.created,
        summary.updated,
        summary.skipped.len()
    );
    for skipped in &summary.skipped {
        println!("  row {}: {}", skipped.row, skipped.reason);
    }
}
