use anyhow::Result;
use clap::{Parser, Subcommand};

use finboard::cli::{
    handle_budgets_command, handle_dashboard_command, handle_export_command,
    handle_metrics_command, handle_transactions_command, ExportCommands,
};
use finboard::config::{FinboardPaths, Settings};
use finboard::data::MockProvider;
use finboard::services::{SortDirection, TransactionField};

#[derive(Parser)]
#[command(
    name = "finboard",
    version,
    about = "Terminal dashboard for demonstration financial data",
    long_about = "finboard renders a small financial dashboard from compiled-in \
                  demonstration data: a transaction register, budget allocations, \
                  and headline metrics with period-over-period deltas. Data is \
                  served by a mock provider behind a simulated network delay."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full dashboard (default)
    Dashboard,

    /// List the transaction register
    #[command(alias = "txn")]
    Transactions {
        /// Field to sort by
        #[arg(short, long, value_enum, default_value = "date")]
        sort: TransactionField,

        /// Sort direction
        #[arg(short, long, value_enum, default_value = "ascending")]
        direction: SortDirection,

        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the budget categories
    Budgets,

    /// List the headline metrics
    Metrics,

    /// Export datasets to CSV, JSON, or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let provider = MockProvider::with_delay(settings.fetch_delay());

    match cli.command {
        Some(Commands::Dashboard) | None => {
            handle_dashboard_command(&provider, &settings).await?;
        }
        Some(Commands::Transactions {
            sort,
            direction,
            limit,
        }) => {
            handle_transactions_command(&provider, sort, direction, limit).await?;
        }
        Some(Commands::Budgets) => {
            handle_budgets_command(&provider).await?;
        }
        Some(Commands::Metrics) => {
            handle_metrics_command(&provider).await?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&provider, cmd).await?;
        }
        Some(Commands::Config) => {
            println!("Configuration directory: {}", paths.base_dir().display());
            println!("Settings file:           {}", paths.settings_file().display());
            println!("Initialized:             {}", paths.is_initialized());
            println!();
            println!("Currency symbol:  {}", settings.currency_symbol);
            println!("Date format:      {}", settings.date_format);
            println!("Fetch delay (ms): {}", settings.fetch_delay_ms);
        }
    }

    Ok(())
}
