//! Emergency fund formatting

use super::report::{format_progress_bar, format_optional_percentage};
use crate::models::EmergencyFund;

/// Format a fund's balance against its target
pub fn format_fund_details(fund: &EmergencyFund, symbol: &str) -> String {
    let pct = fund.current_balance().percent_of(fund.fund_amount());
    let mut output = String::new();

    output.push_str(&format!("Emergency Fund ({})\n", fund.budget_id().short()));
    output.push_str(&format!(
        "  Balance:    {} of {}\n",
        fund.current_balance().format_with_symbol(symbol),
        fund.fund_amount().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Progress:   {} {}\n",
        format_optional_percentage(pct),
        format_progress_bar(pct.unwrap_or(100.0), 20)
    ));
    output.push_str(&format!("  State:      {}\n", fund.state()));

    if !fund.is_full() {
        output.push_str(&format!(
            "  Shortfall:  {}\n",
            fund.shortfall().format_with_symbol(symbol)
        ));
        match fund.months_to_full() {
            Some(months) => output.push_str(&format!(
                "  Full in:    {} month(s) at {}/month\n",
                months,
                fund.monthly_allocation().format_with_symbol(symbol)
            )),
            None => output.push_str("  Full in:    never (no monthly allocation)\n"),
        }
    }

    output.push_str(&format!(
        "  Updated:    {}\n",
        fund.last_updated().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
