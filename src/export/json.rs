//! JSON export functionality
//!
//! Serializes a full snapshot of the fetched datasets as a single
//! machine-readable document.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FinboardResult;
use crate::models::{BudgetCategory, Metric, Transaction};

/// Schema version of the export document
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// A full snapshot of the dashboard datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,

    /// The transaction register
    pub transactions: Vec<Transaction>,

    /// The budget categories
    pub budgets: Vec<BudgetCategory>,

    /// The headline metrics
    pub metrics: Vec<Metric>,
}

impl FullExport {
    /// Build a snapshot from fetched datasets
    pub fn new(
        transactions: Vec<Transaction>,
        budgets: Vec<BudgetCategory>,
        metrics: Vec<Metric>,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            transactions,
            budgets,
            metrics,
        }
    }
}

/// Export a full snapshot as pretty-printed JSON
pub fn export_full_json<W: Write>(export: &FullExport, writer: W) -> FinboardResult<()> {
    serde_json::to_writer_pretty(writer, export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    fn seed_export() -> FullExport {
        FullExport::new(
            seed::sample_transactions(),
            seed::sample_budget_categories(),
            seed::sample_metrics(),
        )
    }

    #[test]
    fn test_export_full_json() {
        let mut output = Vec::new();
        export_full_json(&seed_export(), &mut output).unwrap();

        let json_string = String::from_utf8(output).unwrap();
        assert!(json_string.contains("\"schema_version\": 1"));
        assert!(json_string.contains("Client Payment"));
        assert!(json_string.contains("Travel"));
        assert!(json_string.contains("Total Revenue"));
    }

    #[test]
    fn test_json_round_trip() {
        let export = seed_export();

        let mut output = Vec::new();
        export_full_json(&export, &mut output).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.transactions, export.transactions);
        assert_eq!(parsed.budgets, export.budgets);
        assert_eq!(parsed.metrics, export.metrics);
    }
}
