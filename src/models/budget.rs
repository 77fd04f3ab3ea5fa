//! Budget category model
//!
//! Tracks how much money is allocated to a category and how much of it has
//! been spent. Over-spending is allowed and surfaced rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetCategoryId;
use super::money::Money;

/// A budget category with its allocation and spending for the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Unique identifier
    pub id: BudgetCategoryId,

    /// Category name
    pub title: String,

    /// Amount allocated to this category (non-negative)
    pub allocated: Money,

    /// Amount spent from this category so far (non-negative)
    pub spent: Money,
}

impl BudgetCategory {
    /// Create a new budget category
    pub fn new(id: u32, title: impl Into<String>, allocated: Money, spent: Money) -> Self {
        Self {
            id: BudgetCategoryId::new(id),
            title: title.into(),
            allocated,
            spent,
        }
    }

    /// Amount left in the allocation (negative when over budget)
    pub fn remaining(&self) -> Money {
        self.allocated - self.spent
    }

    /// Whether spending has exceeded the allocation
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.allocated
    }

    /// Percentage of the allocation spent, `None` when nothing is allocated
    pub fn utilization(&self) -> Option<f64> {
        if self.allocated.is_zero() {
            return None;
        }
        Some(self.spent.cents() as f64 / self.allocated.cents() as f64 * 100.0)
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} of {}", self.title, self.spent, self.allocated)
    }
}
