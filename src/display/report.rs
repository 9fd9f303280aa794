//! Report formatting utilities for terminal output

use crate::models::Money;

/// Shown where a projection is undefined (e.g. on the first day of a period)
pub const PLACEHOLDER: &str = "n/a";

/// Format an optional amount, using the placeholder when absent
pub fn format_optional_money(amount: Option<Money>, symbol: &str) -> String {
    amount
        .map(|m| m.format_with_symbol(symbol))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    let magnitude = pct.abs();
    if magnitude < 0.1 && magnitude > 0.0 {
        format!("{:.2}%", pct)
    } else if magnitude < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format an optional percentage, using the placeholder when absent
pub fn format_optional_percentage(pct: Option<f64>) -> String {
    pct.map(format_percentage)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Progress bar for a percentage, clamped to 0..=100 for display
pub fn format_progress_bar(pct: f64, width: usize) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(90.0), "90%");
        assert_eq!(format_percentage(-12.4), "-12%");
    }

    #[test]
    fn test_optional_formatting() {
        assert_eq!(format_optional_money(None, "$"), "n/a");
        assert_eq!(
            format_optional_money(Some(Money::from_cents(-3733)), "$"),
            "-$37.33"
        );
        assert_eq!(format_optional_percentage(None), "n/a");
    }

    #[test]
    fn test_progress_bar() {
        let bar = format_progress_bar(50.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        let over = format_progress_bar(140.0, 10);
        assert_eq!(over.chars().filter(|c| *c == '█').count(), 10);

        let under = format_progress_bar(-20.0, 10);
        assert_eq!(under.chars().filter(|c| *c == '░').count(), 10);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }
}
