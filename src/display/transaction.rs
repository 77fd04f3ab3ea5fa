//! Transaction display formatting
//!
//! Formats the transaction register for terminal display, including status
//! indicators and fixed-width columns.

use crate::models::{Transaction, TransactionStatus};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let status_icon = match txn.status {
        TransactionStatus::Pending => "…",
        TransactionStatus::Completed => "✓",
    };

    format!(
        "{} {} {:24} {:12} {:>14}",
        status_icon,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.title, 24),
        truncate(&txn.category, 12),
        txn.amount.to_string()
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:2} {:10} {:24} {:12} {:>14}\n",
        "St", "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, padding short strings
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let prefix: String = s.chars().take(max_len - 3).collect();
        format!("{}...", prefix)
    }
}
