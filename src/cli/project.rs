//! Projection CLI commands
//!
//! `project` builds a period snapshot from explicit day counts or from a
//! calendar range and prints the projection report. `progress` reports
//! savings-goal progress on its own.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_projection_report;
use crate::display::report::{format_percentage, format_progress_bar};
use crate::error::{BudgetLensError, BudgetLensResult};
use crate::export::{export_json, export_yaml, OutputFormat};
use crate::models::{BudgetPeriod, Money, PeriodRange, SavingsGoal};
use crate::services::projection::{self, ProjectionReport};

/// Arguments for `project`
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Amount allocated for the period (e.g., "530" or "530.00")
    #[arg(short, long)]
    pub allocated: Money,

    /// Amount spent so far
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub spent: Money,

    /// Days elapsed in the period
    #[arg(long, requires = "remaining", conflicts_with_all = ["period", "today"])]
    pub elapsed: Option<u32>,

    /// Days remaining in the period
    #[arg(long, requires = "elapsed")]
    pub remaining: Option<u32>,

    /// Calendar period (e.g., "2025-02", "2025-W07", "2025-02-01..2025-02-14");
    /// defaults to the current period of the configured kind
    #[arg(short, long)]
    pub period: Option<String>,

    /// Date to project from (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Savings goal for the period
    #[arg(short, long)]
    pub goal: Option<Money>,

    /// Savings accumulated so far (used with --goal)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub savings: Money,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ProjectArgs {
    /// Resolve the period snapshot these arguments describe
    pub fn budget_period(&self, settings: &Settings) -> BudgetLensResult<BudgetPeriod> {
        if let (Some(elapsed), Some(remaining)) = (self.elapsed, self.remaining) {
            return BudgetPeriod::new(self.allocated, self.spent, elapsed, remaining);
        }

        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let range = match &self.period {
            Some(s) => PeriodRange::parse(s),
            None => PeriodRange::containing(settings.budget_period_type, today),
        }
        .map_err(|e| BudgetLensError::Validation(e.to_string()))?;

        tracing::debug!(%range, %today, "deriving day counts from calendar range");
        BudgetPeriod::from_range(&range, today, self.allocated, self.spent)
    }
}

/// Handle `project`
pub fn handle_project_command(settings: &Settings, args: ProjectArgs) -> BudgetLensResult<()> {
    let period = args.budget_period(settings)?;
    let goal = args.goal.map(|g| SavingsGoal::new(g, args.savings));
    let report = ProjectionReport::generate(&period, goal.as_ref())?;

    match args.format {
        OutputFormat::Table => {
            print!("{}", format_projection_report(&report, &settings.currency_symbol));
        }
        OutputFormat::Json => export_json("projection", &report, &mut std::io::stdout().lock())?,
        OutputFormat::Yaml => export_yaml("projection", &report, &mut std::io::stdout().lock())?,
    }

    Ok(())
}

/// Handle `progress`
pub fn handle_progress_command(
    settings: &Settings,
    goal: Money,
    savings: Money,
) -> BudgetLensResult<()> {
    let pct = projection::goal_progress_percent(savings, goal)?;
    let tier = projection::classify_progress(pct);

    println!(
        "Saved {} of {}",
        savings.format_with_symbol(&settings.currency_symbol),
        goal.format_with_symbol(&settings.currency_symbol)
    );
    println!("{} {}", format_percentage(pct), format_progress_bar(pct, 20));
    println!("Status: {}", tier);

    Ok(())
}
