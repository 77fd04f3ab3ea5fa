//! Relative delta between two numeric samples
//!
//! `percent_change` is the one place the dashboard divides, and the one
//! place a zero denominator can occur. The result is an `Option`: `None`
//! means "undefined", never `inf` or `NaN`.

use crate::models::Metric;

/// Percentage change from `previous` to `current`, rounded to one decimal
///
/// Returns `None` when `previous` is zero, where the relative change is
/// undefined.
///
/// # Examples
/// ```
/// use finboard::services::percent_change;
/// assert_eq!(percent_change(125_000.0, 110_000.0), Some(13.6));
/// assert_eq!(percent_change(52_000.0, 58_000.0), Some(-10.3));
/// assert_eq!(percent_change(100.0, 0.0), None);
/// ```
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some(round_one_decimal((current - previous) / previous * 100.0))
}

/// Percentage change of a metric against its previous period
pub fn metric_change(metric: &Metric) -> Option<f64> {
    percent_change(
        metric.value.to_major_units(),
        metric.previous_value.to_major_units(),
    )
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_revenue_growth() {
        assert_eq!(percent_change(125_000.0, 110_000.0), Some(13.6));
    }

    #[test]
    fn test_expense_reduction() {
        assert_eq!(percent_change(52_000.0, 58_000.0), Some(-10.3));
    }

    #[test]
    fn test_zero_previous_is_undefined() {
        let change = percent_change(36_000.0, 0.0);
        assert_eq!(change, None);
    }

    #[test]
    fn test_never_produces_non_finite_values() {
        for (current, previous) in [(1.0, 0.0), (0.0, 0.0), (-1.0, 0.0)] {
            if let Some(change) = percent_change(current, previous) {
                assert!(change.is_finite());
            }
        }
    }

    #[test]
    fn test_no_change() {
        assert_eq!(percent_change(500.0, 500.0), Some(0.0));
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // 1/3 of 100% = 33.333... -> 33.3
        assert_eq!(percent_change(400.0, 300.0), Some(33.3));
        // 2/3 of 100% = 66.666... -> 66.7
        assert_eq!(percent_change(500.0, 300.0), Some(66.7));
    }

    #[test]
    fn test_metric_change() {
        let metric = Metric::new(
            1,
            "Total Revenue",
            Money::from_dollars(125_000),
            Money::from_dollars(110_000),
        );
        assert_eq!(metric_change(&metric), Some(13.6));

        let no_history = Metric::new(2, "Cash on Hand", Money::from_dollars(36_000), Money::zero());
        assert_eq!(metric_change(&no_history), None);
    }
}
