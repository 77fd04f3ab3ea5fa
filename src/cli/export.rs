//! Export CLI commands
//!
//! Fetches the datasets through the mock provider and writes them to a file
//! or stdout in the requested format.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::data::{Dataset, MockProvider};
use crate::error::FinboardResult;
use crate::export::{
    export_budgets_csv, export_full_json, export_full_yaml, export_metrics_csv,
    export_transactions_csv, FullExport,
};

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export one dataset as CSV
    Csv {
        /// Dataset to export
        dataset: Dataset,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a full snapshot as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a full snapshot as YAML
    Yaml {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub async fn handle_export_command(
    provider: &MockProvider,
    cmd: ExportCommands,
) -> FinboardResult<()> {
    match cmd {
        ExportCommands::Csv { dataset, output } => {
            let mut writer = open_output(output.as_ref())?;
            match dataset {
                Dataset::Transactions => {
                    let transactions = provider.fetch_transactions().await?;
                    export_transactions_csv(&transactions, &mut writer)?;
                }
                Dataset::Budgets => {
                    let categories = provider.fetch_budget_categories().await?;
                    export_budgets_csv(&categories, &mut writer)?;
                }
                Dataset::Metrics => {
                    let metrics = provider.fetch_metrics().await?;
                    export_metrics_csv(&metrics, &mut writer)?;
                }
            }
            report_written(output.as_ref(), dataset.as_str());
        }
        ExportCommands::Json { output } => {
            let export = fetch_full_snapshot(provider).await?;
            let writer = open_output(output.as_ref())?;
            export_full_json(&export, writer)?;
            report_written(output.as_ref(), "full snapshot");
        }
        ExportCommands::Yaml { output } => {
            let export = fetch_full_snapshot(provider).await?;
            let writer = open_output(output.as_ref())?;
            export_full_yaml(&export, writer)?;
            report_written(output.as_ref(), "full snapshot");
        }
    }

    Ok(())
}

/// Fetch all three datasets into one snapshot document
async fn fetch_full_snapshot(provider: &MockProvider) -> FinboardResult<FullExport> {
    let (transactions, budgets, metrics) = tokio::join!(
        provider.fetch_transactions(),
        provider.fetch_budget_categories(),
        provider.fetch_metrics(),
    );

    Ok(FullExport::new(transactions?, budgets?, metrics?))
}

fn open_output(path: Option<&PathBuf>) -> FinboardResult<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout())),
    }
}

fn report_written(path: Option<&PathBuf>, what: &str) {
    if let Some(path) = path {
        println!("Exported {} to {}", what, path.display());
    }
}
