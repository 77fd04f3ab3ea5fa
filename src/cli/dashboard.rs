//! Dashboard CLI command
//!
//! Loads all three datasets through the mock provider and prints the full
//! dashboard: headline metrics, overview aggregates, budget table, and the
//! transaction register.

use crate::config::Settings;
use crate::dashboard::DashboardState;
use crate::data::MockProvider;
use crate::display::{format_budget_table, format_metric_list, format_transaction_register};
use crate::error::FinboardResult;
use crate::reports::OverviewReport;
use crate::services::sorted_transactions;

/// Handle the dashboard command
pub async fn handle_dashboard_command(
    provider: &MockProvider,
    settings: &Settings,
) -> FinboardResult<()> {
    println!("Loading dashboard...");

    let mut state = DashboardState::new();
    state.load(provider).await;

    // The mock provider never fails; surface a rejected fetch anyway in case
    // a real data source ever sits behind this contract.
    for (name, error) in [
        ("transactions", &state.transactions.error),
        ("budgets", &state.budgets.error),
        ("metrics", &state.metrics.error),
    ] {
        if let Some(message) = error {
            eprintln!("Warning: failed to load {}: {}", name, message);
        }
    }

    println!("\nMetrics");
    println!("{}", "=".repeat(42));
    print!("{}", format_metric_list(&state.metrics.records));

    let overview = OverviewReport::generate(&state.transactions.records, &state.budgets.records);
    println!("\nOverview");
    println!("{}", "=".repeat(42));
    println!("Income:       {:>14}", overview.total_income.to_string());
    println!("Expenses:     {:>14}", overview.total_expenses.to_string());
    println!("Net:          {:>14}", overview.net.to_string());
    println!("Transactions: {:>14}", overview.transaction_count);
    if !overview.over_budget.is_empty() {
        println!("Over budget:  {}", overview.over_budget.join(", "));
    }

    println!("\nBudgets");
    println!("{}", "=".repeat(70));
    print!("{}", format_budget_table(&state.budgets.records));

    let (field, direction) = settings.default_sort();
    let register = sorted_transactions(&state.transactions.records, field, direction);

    println!("\nTransactions");
    println!("{}", "=".repeat(66));
    print!("{}", format_transaction_register(&register));

    Ok(())
}
