//! Mock data layer
//!
//! A string-keyed provider over compiled-in datasets, served behind an async
//! contract with a simulated network delay.

pub mod provider;
pub mod seed;

pub use provider::{Dataset, MockProvider, Record, DEFAULT_FETCH_DELAY};
