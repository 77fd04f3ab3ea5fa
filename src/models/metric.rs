//! Headline metric model
//!
//! A metric pairs a current value with the previous period's value so the
//! dashboard can show the relative delta next to the headline number.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MetricId;
use super::money::Money;

/// A headline dashboard metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Unique identifier
    pub id: MetricId,

    /// Metric name (e.g. "Total Revenue")
    pub title: String,

    /// Current value
    pub value: Money,

    /// Value from the previous period; may be zero
    pub previous_value: Money,
}

impl Metric {
    /// Create a new metric
    pub fn new(id: u32, title: impl Into<String>, value: Money, previous_value: Money) -> Self {
        Self {
            id: MetricId::new(id),
            title: title.into(),
            value,
            previous_value,
        }
    }

    /// Absolute change since the previous period
    pub fn delta(&self) -> Money {
        self.value - self.previous_value
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.value)
    }
}
