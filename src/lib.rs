//! finboard - Terminal dashboard for demonstration financial data
//!
//! This library provides the core functionality for the finboard demo
//! dashboard: a mock data provider serving compiled-in financial datasets
//! behind an async contract, and the pure view-model transforms the
//! presentation layer consumes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budget categories, metrics)
//! - `data`: Mock data provider and compiled-in seed datasets
//! - `services`: Derived view model (sorted views, percent deltas)
//! - `dashboard`: Per-dataset state holders with loading flags
//! - `reports`: Aggregates over fetched snapshots
//! - `display`: Plain-text table formatting
//! - `export`: CSV/JSON/YAML snapshot export
//! - `cli`: Command handlers for the `finboard` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use finboard::dashboard::DashboardState;
//! use finboard::data::MockProvider;
//!
//! # async fn run() {
//! let provider = MockProvider::with_delay(Duration::from_millis(800));
//! let mut state = DashboardState::new();
//! state.load(&provider).await;
//! assert!(!state.is_loading());
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{FinboardError, FinboardResult};
