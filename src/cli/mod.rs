//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the data and view-model layers.

pub mod dashboard;
pub mod datasets;
pub mod export;

pub use dashboard::handle_dashboard_command;
pub use datasets::{handle_budgets_command, handle_metrics_command, handle_transactions_command};
pub use export::{handle_export_command, ExportCommands};
