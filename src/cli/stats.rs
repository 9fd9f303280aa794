//! Spending statistics CLI command

use clap::Args;
use std::fs::File;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::format_statistics_table;
use crate::error::{BudgetLensError, BudgetLensResult};
use crate::export::{export_json, export_yaml, OutputFormat};
use crate::services::statistics::SpendingStatistics;

/// Arguments for `stats`
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// CSV file with a `name,allocated,spent` header
    #[arg(short = 'i', long = "file")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Handle `stats`
pub fn handle_stats_command(settings: &Settings, args: StatsArgs) -> BudgetLensResult<()> {
    let file = File::open(&args.file).map_err(|e| {
        BudgetLensError::Io(format!("Failed to open {}: {}", args.file.display(), e))
    })?;
    let stats = SpendingStatistics::from_csv(file)?;

    match args.format {
        OutputFormat::Table => {
            print!("{}", format_statistics_table(&stats, &settings.currency_symbol));
        }
        OutputFormat::Json => export_json("statistics", &stats, &mut std::io::stdout().lock())?,
        OutputFormat::Yaml => export_yaml("statistics", &stats, &mut std::io::stdout().lock())?,
    }

    Ok(())
}
