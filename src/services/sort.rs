//! Sorted views over record sequences
//!
//! Pure, synchronous transforms: the caller hands in a snapshot and gets a
//! new ordering back. Sorting is stable, so ties keep their fetch order and
//! results are deterministic.

use std::cmp::Ordering;

use crate::models::Transaction;

/// Sort direction for derived views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    #[value(alias = "asc")]
    Ascending,
    /// Largest first
    #[value(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison to this direction
    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sortable fields of the transaction register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TransactionField {
    /// Transaction date
    #[default]
    Date,
    /// Transaction title
    Title,
    /// Signed amount
    Amount,
    /// Category label
    Category,
    /// Status, compared by its display string
    Status,
}

impl TransactionField {
    /// Compare two transactions by this field, ascending
    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Title => a.title.cmp(&b.title),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Category => a.category.cmp(&b.category),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

/// Produce a new sequence ordered by an arbitrary key
///
/// The underlying `sort_by` is stable, so records that compare equal keep
/// their input order.
pub fn sorted_by_key<T, K, F>(records: &[T], key: F, direction: SortDirection) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| direction.apply(key(a).cmp(&key(b))));
    sorted
}

/// Produce a new transaction sequence ordered by the given field
pub fn sorted_transactions(
    transactions: &[Transaction],
    field: TransactionField,
    direction: SortDirection,
) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| direction.apply(field.compare(a, b)));
    sorted
}
