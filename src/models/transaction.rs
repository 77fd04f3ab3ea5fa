//! Transaction model
//!
//! Represents a single dashboard transaction row. Transactions are immutable
//! snapshots produced by the data provider; the sign of the amount alone
//! distinguishes income from expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Transaction has settled
    #[default]
    Completed,
    /// Transaction has not yet settled
    Pending,
}

impl TransactionStatus {
    /// Stable string form, used for display and generic field comparison
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    /// Check if this transaction has settled
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Short description shown in the register
    pub title: String,

    /// Amount (positive for income, negative for expense)
    pub amount: Money,

    /// Free-form category label
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Transaction status
    #[serde(default)]
    pub status: TransactionStatus,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: u32,
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: TransactionId::new(id),
            title: title.into(),
            amount,
            category: category.into(),
            date,
            status,
        }
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            1,
            "Client Payment",
            Money::from_dollars(125_000),
            "Revenue",
            test_date(),
            TransactionStatus::Completed,
        );

        assert_eq!(txn.id.value(), 1);
        assert_eq!(txn.title, "Client Payment");
        assert_eq!(txn.category, "Revenue");
        assert_eq!(txn.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_income_expense() {
        let income = Transaction::new(
            1,
            "Payment",
            Money::from_dollars(1_000),
            "Revenue",
            test_date(),
            TransactionStatus::Completed,
        );
        assert!(income.is_income());
        assert!(!income.is_expense());

        let expense = Transaction::new(
            2,
            "Rent",
            Money::from_dollars(-1_000),
            "Operations",
            test_date(),
            TransactionStatus::Pending,
        );
        assert!(!expense.is_income());
        assert!(expense.is_expense());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TransactionStatus::Completed.to_string(), "Completed");
        assert_eq!(TransactionStatus::Pending.to_string(), "Pending");
        assert!(TransactionStatus::Completed.is_completed());
        assert!(!TransactionStatus::Pending.is_completed());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            3,
            "Marketing Campaign",
            Money::from_dollars(-8_500),
            "Marketing",
            test_date(),
            TransactionStatus::Pending,
        );

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"status\":\"pending\""));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            4,
            "Office Operations",
            Money::from_dollars(-15_000),
            "Operations",
            test_date(),
            TransactionStatus::Completed,
        );

        assert_eq!(format!("{}", txn), "2025-01-15 Office Operations -$15,000.00");
    }
}
