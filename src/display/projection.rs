//! Projection report formatting

use super::report::{
    format_optional_money, format_optional_percentage, format_progress_bar, separator,
};
use crate::services::projection::{ProgressTier, ProjectionReport, SavingsProjection};

const WIDTH: usize = 48;

/// Format a projection report as labelled lines followed by insights
pub fn format_projection_report(report: &ProjectionReport, symbol: &str) -> String {
    let money = |m| format_optional_money(Some(m), symbol);
    let mut output = String::new();

    output.push_str("Spending Projection\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("{:<24}{}\n", "Allocated:", money(report.allocated)));
    output.push_str(&format!("{:<24}{}\n", "Spent:", money(report.spent)));
    output.push_str(&format!(
        "{:<24}{} elapsed, {} remaining\n",
        "Days:", report.days_elapsed, report.days_remaining
    ));
    output.push_str(&format!(
        "{:<24}{}\n",
        "Daily allowance:",
        format_optional_money(report.daily_allowance, symbol)
    ));
    output.push_str(&format!(
        "{:<24}{}\n",
        "Actual daily rate:",
        format_optional_money(report.actual_daily_rate, symbol)
    ));
    output.push_str(&format!(
        "{:<24}{}\n",
        "Projected spend:",
        format_optional_money(report.projected_spend, symbol)
    ));
    output.push_str(&format!(
        "{:<24}{}\n",
        "Projected remaining:",
        format_optional_money(report.projected_remaining, symbol)
    ));
    output.push_str(&format!(
        "{:<24}{}\n",
        "Allowed this week:",
        money(report.allowed_this_week)
    ));
    output.push_str(&format!(
        "{:<24}{}\n",
        "Allowed rest of period:",
        money(report.allowed_rest_of_period)
    ));

    if let Some(savings) = &report.savings {
        output.push('\n');
        output.push_str(&format_savings(savings, symbol));
    }

    let insights = insights(report, symbol);
    if !insights.is_empty() {
        output.push('\n');
        for line in insights {
            output.push_str(&format!("• {}\n", line));
        }
    }

    output
}

/// Format the savings section of a report
pub fn format_savings(savings: &SavingsProjection, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Savings Goal\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<24}{}\n",
        "Goal:",
        savings.monthly_goal.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<24}{}\n",
        "Saved so far:",
        savings.current_savings.format_with_symbol(symbol)
    ));

    let bar = savings
        .progress_percent
        .map(|pct| format!(" {}", format_progress_bar(pct, 20)))
        .unwrap_or_default();
    output.push_str(&format!(
        "{:<24}{}{}\n",
        "Progress:",
        format_optional_percentage(savings.progress_percent),
        bar
    ));
    if let Some(tier) = savings.tier {
        output.push_str(&format!("{:<24}{}\n", "Status:", tier));
    }
    output.push_str(&format!(
        "{:<24}{}\n",
        "Projected savings:",
        format_optional_money(savings.projected_savings, symbol)
    ));
    output.push_str(&format!(
        "{:<24}{}\n",
        "Needed per day:",
        format_optional_money(savings.required_daily_savings, symbol)
    ));

    output
}

/// Plain-language observations about a report
pub fn insights(report: &ProjectionReport, symbol: &str) -> Vec<String> {
    let mut lines = Vec::new();

    match report.projected_remaining {
        Some(remaining) if remaining.is_negative() => lines.push(format!(
            "At your current pace you will overspend by {}.",
            (-remaining).format_with_symbol(symbol)
        )),
        Some(remaining) => lines.push(format!(
            "On pace to finish {} under budget.",
            remaining.format_with_symbol(symbol)
        )),
        None => lines.push("The period has just started; projections appear after day one.".into()),
    }

    if let Some(savings) = &report.savings {
        match (savings.on_track, savings.tier) {
            (Some(true), _) => lines.push("Savings are on track to meet the goal.".into()),
            (Some(false), _) => {
                if let Some(needed) = savings.required_daily_savings {
                    lines.push(format!(
                        "Save {} per day to reach the goal.",
                        needed.format_with_symbol(symbol)
                    ));
                }
            }
            (None, Some(ProgressTier::OnTrack)) => {
                lines.push("Savings are already close to the goal.".into())
            }
            (None, _) => {}
        }
    }

    lines
}
