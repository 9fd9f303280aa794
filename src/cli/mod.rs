//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod categorize;
pub mod fund;
pub mod project;
pub mod stats;

pub use categorize::{handle_categorize_command, CategorizeArgs};
pub use fund::{handle_fund_command, FundArgs, FundCommands};
pub use project::{handle_progress_command, handle_project_command, ProjectArgs};
pub use stats::{handle_stats_command, StatsArgs};
