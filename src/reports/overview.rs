//! Overview report
//!
//! Headline aggregates over the fetched snapshots: income, expenses, net,
//! and the categories that have blown their allocation.

use crate::models::{BudgetCategory, Money, Transaction};

/// Headline aggregates for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewReport {
    /// Sum of positive transaction amounts
    pub total_income: Money,
    /// Sum of negative transaction amounts (a negative value)
    pub total_expenses: Money,
    /// Income plus expenses
    pub net: Money,
    /// Number of transactions in the register
    pub transaction_count: usize,
    /// Titles of categories whose spending exceeds their allocation
    pub over_budget: Vec<String>,
}

impl OverviewReport {
    /// Generate the overview from fetched snapshots
    pub fn generate(transactions: &[Transaction], budgets: &[BudgetCategory]) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();

        for txn in transactions {
            if txn.amount.is_positive() {
                total_income += txn.amount;
            } else {
                total_expenses += txn.amount;
            }
        }

        let over_budget = budgets
            .iter()
            .filter(|c| c.is_over_budget())
            .map(|c| c.title.clone())
            .collect();

        Self {
            total_income,
            total_expenses,
            net: total_income + total_expenses,
            transaction_count: transactions.len(),
            over_budget,
        }
    }
}
