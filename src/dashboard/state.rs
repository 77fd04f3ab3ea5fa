//! Dashboard state management
//!
//! One holder per dataset, each tagged with a loading flag. Fetches are
//! independent: a dataset's completion only updates its own holder, and no
//! holder is shared between tasks.

use crate::data::MockProvider;
use crate::models::{BudgetCategory, Metric, Transaction};

/// Holder for one dataset and its load status
#[derive(Debug, Clone)]
pub struct DatasetState<T> {
    /// The fetched records, empty until the fetch resolves
    pub records: Vec<T>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Failure message from a rejected fetch
    ///
    /// Stays `None` with the mock provider, which never fails. The slot is
    /// the documented placeholder for a real data source.
    pub error: Option<String>,
}

impl<T> Default for DatasetState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> DatasetState<T> {
    /// Mark a fetch as in flight
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the fetched records and clear the loading flag
    pub fn resolve(&mut self, records: Vec<T>) {
        self.records = records;
        self.loading = false;
    }

    /// Record a failed fetch and clear the loading flag
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Whether the holder has records and no pending fetch
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

/// State for the whole dashboard view
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Transaction register holder
    pub transactions: DatasetState<Transaction>,
    /// Budget category holder
    pub budgets: DatasetState<BudgetCategory>,
    /// Headline metric holder
    pub metrics: DatasetState<Metric>,
}

impl DashboardState {
    /// Create an empty dashboard state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any dataset fetch is still in flight
    pub fn is_loading(&self) -> bool {
        self.transactions.loading || self.budgets.loading || self.metrics.loading
    }

    /// Fetch all three datasets concurrently and resolve each holder
    ///
    /// The fetches run without any ordering relationship; each completion
    /// updates only its own holder.
    pub async fn load(&mut self, provider: &MockProvider) {
        self.transactions.begin_loading();
        self.budgets.begin_loading();
        self.metrics.begin_loading();

        let (transactions, budgets, metrics) = tokio::join!(
            provider.fetch_transactions(),
            provider.fetch_budget_categories(),
            provider.fetch_metrics(),
        );

        match transactions {
            Ok(records) => self.transactions.resolve(records),
            Err(err) => self.transactions.fail(err.to_string()),
        }
        match budgets {
            Ok(records) => self.budgets.resolve(records),
            Err(err) => self.budgets.fail(err.to_string()),
        }
        match metrics {
            Ok(records) => self.metrics.resolve(records),
            Err(err) => self.metrics.fail(err.to_string()),
        }
    }
}
