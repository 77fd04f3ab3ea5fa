//! YAML export functionality
//!
//! Human-readable counterpart of the JSON snapshot export.

use std::io::Write;

use crate::error::FinboardResult;

use super::json::FullExport;

/// Export a full snapshot as YAML
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: W) -> FinboardResult<()> {
    serde_yaml::to_writer(writer, export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    #[test]
    fn test_export_full_yaml() {
        let export = FullExport::new(
            seed::sample_transactions(),
            seed::sample_budget_categories(),
            seed::sample_metrics(),
        );

        let mut output = Vec::new();
        export_full_yaml(&export, &mut output).unwrap();

        let yaml_string = String::from_utf8(output).unwrap();
        assert!(yaml_string.contains("schema_version: 1"));
        assert!(yaml_string.contains("title: Client Payment"));
        assert!(yaml_string.contains("title: Cash on Hand"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let export = FullExport::new(
            seed::sample_transactions(),
            seed::sample_budget_categories(),
            seed::sample_metrics(),
        );

        let mut output = Vec::new();
        export_full_yaml(&export, &mut output).unwrap();

        let parsed: FullExport = serde_yaml::from_slice(&output).unwrap();
        assert_eq!(parsed.transactions, export.transactions);
    }
}
