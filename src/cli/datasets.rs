//! Per-dataset CLI commands
//!
//! Fetches one dataset through the mock provider and prints its table.

use crate::data::MockProvider;
use crate::display::{format_budget_table, format_metric_list, format_transaction_register};
use crate::error::FinboardResult;
use crate::services::{sorted_transactions, SortDirection, TransactionField};

/// Handle the transactions command
pub async fn handle_transactions_command(
    provider: &MockProvider,
    field: TransactionField,
    direction: SortDirection,
    limit: Option<usize>,
) -> FinboardResult<()> {
    let transactions = provider.fetch_transactions().await?;
    let mut sorted = sorted_transactions(&transactions, field, direction);

    if let Some(limit) = limit {
        sorted.truncate(limit);
    }

    print!("{}", format_transaction_register(&sorted));
    Ok(())
}

/// Handle the budgets command
pub async fn handle_budgets_command(provider: &MockProvider) -> FinboardResult<()> {
    let categories = provider.fetch_budget_categories().await?;
    print!("{}", format_budget_table(&categories));
    Ok(())
}

/// Handle the metrics command
pub async fn handle_metrics_command(provider: &MockProvider) -> FinboardResult<()> {
    let metrics = provider.fetch_metrics().await?;
    print!("{}", format_metric_list(&metrics));
    Ok(())
}
