//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FinboardPaths;
pub use settings::Settings;
