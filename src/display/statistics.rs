//! Spending statistics formatting
//!
//! Renders per-category statistics as a table with a totals row.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_optional_percentage, truncate};
use crate::services::statistics::{CategoryStatistic, SpendingStatistics};

#[derive(Tabled)]
struct StatisticRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl StatisticRow {
    fn from_statistic(stat: &CategoryStatistic, symbol: &str) -> Self {
        Self {
            name: truncate(&stat.name, 24),
            allocated: stat.allocated.format_with_symbol(symbol),
            spent: stat.spent.format_with_symbol(symbol),
            remaining: stat.remaining.format_with_symbol(symbol),
            used: format_optional_percentage(stat.percent_used),
            status: stat.status.to_string(),
        }
    }
}

/// Format statistics as a table, totals last
pub fn format_statistics_table(stats: &SpendingStatistics, symbol: &str) -> String {
    if stats.categories.is_empty() {
        return "No categories found.".to_string();
    }

    let mut rows: Vec<StatisticRow> = stats
        .categories
        .iter()
        .map(|s| StatisticRow::from_statistic(s, symbol))
        .collect();

    rows.push(StatisticRow {
        name: "Total".to_string(),
        allocated: stats.total_allocated.format_with_symbol(symbol),
        spent: stats.total_spent.format_with_symbol(symbol),
        remaining: stats.total_remaining.format_with_symbol(symbol),
        used: format_optional_percentage(stats.percent_used),
        status: stats.status.to_string(),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');

    let over = stats.over_budget();
    if !over.is_empty() {
        output.push_str("\nOver budget:\n");
        for stat in over {
            output.push_str(&format!(
                "  {} by {}\n",
                stat.name,
                stat.overspend().format_with_symbol(symbol)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, Money};

    #[test]
    fn test_table_contents() {
        let stats = SpendingStatistics::from_categories(&[
            BudgetCategory::with_spent("Groceries", Money::from_cents(40000), Money::from_cents(31250)),
            BudgetCategory::with_spent("Dining", Money::from_cents(10000), Money::from_cents(12500)),
        ])
        .unwrap();
        let text = format_statistics_table(&stats, "$");

        assert!(text.contains("Groceries"));
        assert!(text.contains("$312.50"));
        assert!(text.contains("125%"));
        assert!(text.contains("Total"));
        assert!(text.contains("Over budget:\n  Dining by $25.00"));
    }

    #[test]
    fn test_empty() {
        let stats = SpendingStatistics::from_categories(&[]).unwrap();
        assert_eq!(format_statistics_table(&stats, "$"), "No categories found.");
    }
}
