//! Export module for finboard
//!
//! Provides snapshot export of the fetched datasets in multiple formats:
//! - CSV: one dataset per file (spreadsheet-compatible)
//! - JSON: machine-readable full snapshot
//! - YAML: human-readable full snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_budgets_csv, export_metrics_csv, export_transactions_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
