//! Budget category display formatting
//!
//! Renders the allocation table with remaining amounts and an over-budget
//! marker.

use crate::models::BudgetCategory;

use super::transaction::truncate;

/// Format a single budget category for display
pub fn format_budget_row(category: &BudgetCategory) -> String {
    let marker = if category.is_over_budget() { "!" } else { " " };
    let utilization = match category.utilization() {
        Some(pct) => format!("{:.0}%", pct),
        None => "--".to_string(),
    };

    format!(
        "{} {:16} {:>14} {:>14} {:>14} {:>6}",
        marker,
        truncate(&category.title, 16),
        category.allocated.to_string(),
        category.spent.to_string(),
        category.remaining().to_string(),
        utilization
    )
}

/// Format a list of budget categories as a table
pub fn format_budget_table(categories: &[BudgetCategory]) -> String {
    if categories.is_empty() {
        return "No budget categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:2}{:16} {:>14} {:>14} {:>14} {:>6}\n",
        "", "Category", "Allocated", "Spent", "Remaining", "Used"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for category in categories {
        output.push_str(&format_budget_row(category));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_budget_row() {
        let cat = BudgetCategory::new(
            1,
            "Marketing",
            Money::from_dollars(20_000),
            Money::from_dollars(8_500),
        );
        let formatted = format_budget_row(&cat);
        assert!(formatted.contains("Marketing"));
        assert!(formatted.contains("$20,000.00"));
        assert!(formatted.contains("$11,500.00"));
        assert!(formatted.contains('%'));
        assert!(formatted.starts_with(' '));
    }

    #[test]
    fn test_over_budget_marker() {
        let cat = BudgetCategory::new(
            2,
            "Travel",
            Money::from_dollars(4_000),
            Money::from_dollars(5_100),
        );
        let formatted = format_budget_row(&cat);
        assert!(formatted.starts_with('!'));
        assert!(formatted.contains("-$1,100.00"));
    }

    #[test]
    fn test_zero_allocation_shows_sentinel() {
        let cat = BudgetCategory::new(3, "Unfunded", Money::zero(), Money::from_dollars(100));
        let formatted = format_budget_row(&cat);
        assert!(formatted.ends_with("--"));
    }

    #[test]
    fn test_format_empty_table() {
        let formatted = format_budget_table(&[]);
        assert!(formatted.contains("No budget categories found"));
    }
}
