//! Display formatting for terminal output
//!
//! Turns projection reports, spending statistics and fund state into text.

pub mod fund;
pub mod projection;
pub mod report;
pub mod statistics;

pub use fund::format_fund_details;
pub use projection::{format_projection_report, insights};
pub use statistics::format_statistics_table;
