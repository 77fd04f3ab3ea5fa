//! CSV export functionality
//!
//! Exports one fetched dataset per file in spreadsheet-compatible form.
//! Derived columns (remaining, percent change) are included; an undefined
//! percent change exports as an empty field.

use std::io::Write;

use crate::error::FinboardResult;
use crate::models::{BudgetCategory, Metric, Transaction};
use crate::services::metric_change;

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinboardResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["id", "date", "title", "category", "amount", "status"])?;

    for txn in transactions {
        csv_writer.write_record(&[
            txn.id.value().to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.title.clone(),
            txn.category.clone(),
            format!("{:.2}", txn.amount.to_major_units()),
            txn.status.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export budget categories to CSV
pub fn export_budgets_csv<W: Write>(
    categories: &[BudgetCategory],
    writer: W,
) -> FinboardResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["id", "title", "allocated", "spent", "remaining", "over_budget"])?;

    for category in categories {
        csv_writer.write_record(&[
            category.id.value().to_string(),
            category.title.clone(),
            format!("{:.2}", category.allocated.to_major_units()),
            format!("{:.2}", category.spent.to_major_units()),
            format!("{:.2}", category.remaining().to_major_units()),
            category.is_over_budget().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export metrics to CSV
pub fn export_metrics_csv<W: Write>(metrics: &[Metric], writer: W) -> FinboardResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["id", "title", "value", "previous_value", "change_percent"])?;

    for metric in metrics {
        let change = match metric_change(metric) {
            Some(change) => format!("{:.1}", change),
            None => String::new(),
        };

        csv_writer.write_record(&[
            metric.id.value().to_string(),
            metric.title.clone(),
            format!("{:.2}", metric.value.to_major_units()),
            format!("{:.2}", metric.previous_value.to_major_units()),
            change,
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
