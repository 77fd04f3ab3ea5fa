//! Metric display formatting
//!
//! Renders headline metric cards with the percent delta against the previous
//! period. An undefined delta (no previous value) renders as `--`.

use crate::models::Metric;
use crate::services::metric_change;

use super::transaction::truncate;

/// Format the percent delta of a metric
pub fn format_metric_delta(metric: &Metric) -> String {
    match metric_change(metric) {
        Some(change) if change > 0.0 => format!("▲ {:.1}%", change),
        Some(change) if change < 0.0 => format!("▼ {:.1}%", change.abs()),
        Some(_) => "  0.0%".to_string(),
        None => "--".to_string(),
    }
}

/// Format a single metric card line
pub fn format_metric_row(metric: &Metric) -> String {
    format!(
        "{:16} {:>14}  {:>8}",
        truncate(&metric.title, 16),
        metric.value.to_string(),
        format_metric_delta(metric)
    )
}

/// Format a list of metrics as cards
pub fn format_metric_list(metrics: &[Metric]) -> String {
    if metrics.is_empty() {
        return "No metrics found.\n".to_string();
    }

    let mut output = String::new();
    for metric in metrics {
        output.push_str(&format_metric_row(metric));
        output.push('\n');
    }

    output
}
