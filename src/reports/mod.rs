//! Reports over fetched snapshots
//!
//! Pure aggregation; no storage, no side effects.

pub mod overview;

pub use overview::OverviewReport;
