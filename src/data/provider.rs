//! Mock data provider
//!
//! Serves the compiled-in datasets behind an async contract with a simulated
//! network delay. The provider never fails; the `Result` surface is the
//! reserved failure path for a future real data source.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::error::FinboardResult;
use crate::models::{BudgetCategory, Metric, Transaction};

use super::seed;

/// Default simulated network latency
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(800);

/// The fixed set of recognized dataset names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Dataset {
    /// The transaction register
    Transactions,
    /// Budget categories with allocations
    Budgets,
    /// Headline metrics
    Metrics,
}

impl Dataset {
    /// All recognized datasets, in display order
    pub const ALL: [Dataset; 3] = [Dataset::Transactions, Dataset::Budgets, Dataset::Metrics];

    /// The dataset's wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Budgets => "budgets",
            Self::Metrics => "metrics",
        }
    }

    /// Look up a dataset by name; unrecognized names yield `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "transactions" => Some(Self::Transactions),
            "budgets" => Some(Self::Budgets),
            "metrics" => Some(Self::Metrics),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record from any dataset, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Transaction(Transaction),
    Budget(BudgetCategory),
    Metric(Metric),
}

/// Serves compiled-in datasets after a simulated network delay
#[derive(Debug, Clone)]
pub struct MockProvider {
    delay: Duration,
}

impl MockProvider {
    /// Create a provider with the default simulated latency
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_FETCH_DELAY,
        }
    }

    /// Create a provider with a specific simulated latency
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured simulated latency
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Fetch a dataset by name
    ///
    /// Waits the simulated latency, then returns the compiled-in records for
    /// a recognized name, or an empty sequence for an unrecognized one. The
    /// mock always resolves `Ok`; the `Result` return exists so a real data
    /// source can slot in behind the same contract.
    pub async fn fetch(&self, name: &str) -> FinboardResult<Vec<Record>> {
        sleep(self.delay).await;

        let records = match Dataset::parse(name) {
            Some(Dataset::Transactions) => seed::sample_transactions()
                .into_iter()
                .map(Record::Transaction)
                .collect(),
            Some(Dataset::Budgets) => seed::sample_budget_categories()
                .into_iter()
                .map(Record::Budget)
                .collect(),
            Some(Dataset::Metrics) => seed::sample_metrics()
                .into_iter()
                .map(Record::Metric)
                .collect(),
            None => Vec::new(),
        };

        Ok(records)
    }

    /// Fetch the transaction register
    pub async fn fetch_transactions(&self) -> FinboardResult<Vec<Transaction>> {
        sleep(self.delay).await;
        Ok(seed::sample_transactions())
    }

    /// Fetch the budget categories
    pub async fn fetch_budget_categories(&self) -> FinboardResult<Vec<BudgetCategory>> {
        sleep(self.delay).await;
        Ok(seed::sample_budget_categories())
    }

    /// Fetch the headline metrics
    pub async fn fetch_metrics(&self) -> FinboardResult<Vec<Metric>> {
        sleep(self.delay).await;
        Ok(seed::sample_metrics())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}
