//! Compiled-in demonstration datasets
//!
//! The dashboard renders fixed sample data; each function builds a fresh
//! snapshot of one dataset in its canonical order.

use chrono::NaiveDate;

use crate::models::{BudgetCategory, Metric, Money, Transaction, TransactionStatus};

/// Sample transactions, newest last
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            1,
            "Client Payment",
            Money::from_dollars(125_000),
            "Revenue",
            NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(),
            TransactionStatus::Completed,
        ),
        Transaction::new(
            2,
            "Office Operations",
            Money::from_dollars(-15_000),
            "Operations",
            NaiveDate::from_ymd_opt(2025, 7, 30).unwrap(),
            TransactionStatus::Completed,
        ),
        Transaction::new(
            3,
            "Marketing Campaign",
            Money::from_dollars(-8_500),
            "Marketing",
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            TransactionStatus::Pending,
        ),
        Transaction::new(
            4,
            "Software Subscriptions",
            Money::from_dollars(-3_200),
            "Software",
            NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
            TransactionStatus::Completed,
        ),
    ]
}

/// Sample budget categories; Travel is intentionally over budget
pub fn sample_budget_categories() -> Vec<BudgetCategory> {
    vec![
        BudgetCategory::new(
            1,
            "Marketing",
            Money::from_dollars(20_000),
            Money::from_dollars(8_500),
        ),
        BudgetCategory::new(
            2,
            "Operations",
            Money::from_dollars(18_000),
            Money::from_dollars(15_000),
        ),
        BudgetCategory::new(
            3,
            "Software",
            Money::from_dollars(5_000),
            Money::from_dollars(3_200),
        ),
        BudgetCategory::new(
            4,
            "Travel",
            Money::from_dollars(4_000),
            Money::from_dollars(5_100),
        ),
    ]
}

/// Sample headline metrics; Cash on Hand has no previous period
pub fn sample_metrics() -> Vec<Metric> {
    vec![
        Metric::new(
            1,
            "Total Revenue",
            Money::from_dollars(125_000),
            Money::from_dollars(110_000),
        ),
        Metric::new(
            2,
            "Total Expenses",
            Money::from_dollars(52_000),
            Money::from_dollars(58_000),
        ),
        Metric::new(
            3,
            "Net Profit",
            Money::from_dollars(73_000),
            Money::from_dollars(52_000),
        ),
        Metric::new(4, "Cash on Hand", Money::from_dollars(36_000), Money::zero()),
    ]
}
