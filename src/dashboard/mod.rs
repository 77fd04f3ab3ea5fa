//! Dashboard view state
//!
//! The holder layer between the data provider and the presentation: one
//! loading-flagged state per dataset, loaded concurrently.

pub mod state;

pub use state::{DashboardState, DatasetState};
