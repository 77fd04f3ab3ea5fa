//! User settings for finboard
//!
//! Manages user preferences including display formatting, the simulated
//! fetch latency, and the default register sort.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::FinboardPaths;
use crate::error::FinboardError;
use crate::services::{SortDirection, TransactionField};

/// User settings for finboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Simulated fetch latency in milliseconds
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    /// Default sort field for the transaction register
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort_field: Option<String>,

    /// Default sort direction for the transaction register
    #[serde(default = "default_sort_descending")]
    pub sort_descending: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_fetch_delay_ms() -> u64 {
    800
}

fn default_sort_descending() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            fetch_delay_ms: default_fetch_delay_ms(),
            default_sort_field: None,
            sort_descending: default_sort_descending(),
        }
    }
}

impl Settings {
    /// The simulated fetch latency as a `Duration`
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    /// The default register sort, falling back to date ascending
    pub fn default_sort(&self) -> (TransactionField, SortDirection) {
        let field = match self.default_sort_field.as_deref() {
            Some("title") => TransactionField::Title,
            Some("amount") => TransactionField::Amount,
            Some("category") => TransactionField::Category,
            Some("status") => TransactionField::Status,
            _ => TransactionField::Date,
        };
        let direction = if self.sort_descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        (field, direction)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinboardPaths) -> Result<Self, FinboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinboardError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FinboardError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinboardPaths) -> Result<(), FinboardError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FinboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.fetch_delay_ms, 800);
        assert_eq!(settings.fetch_delay(), Duration::from_millis(800));
        assert!(!settings.sort_descending);
    }

    #[test]
    fn test_default_sort_fallback() {
        let settings = Settings::default();
        assert_eq!(
            settings.default_sort(),
            (TransactionField::Date, SortDirection::Ascending)
        );

        let mut settings = Settings::default();
        settings.default_sort_field = Some("amount".to_string());
        settings.sort_descending = true;
        assert_eq!(
            settings.default_sort(),
            (TransactionField::Amount, SortDirection::Descending)
        );

        settings.default_sort_field = Some("unknown".to_string());
        assert_eq!(settings.default_sort().0, TransactionField::Date);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.fetch_delay_ms = 50;
        settings.currency_symbol = "€".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.fetch_delay_ms, 50);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.fetch_delay_ms, 800);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.fetch_delay_ms, deserialized.fetch_delay_ms);
    }
}
