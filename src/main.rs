use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetlens::cli::{
    handle_categorize_command, handle_fund_command, handle_progress_command,
    handle_project_command, handle_stats_command, CategorizeArgs, FundCommands, ProjectArgs,
    StatsArgs,
};
use budgetlens::config::{paths::BudgetLensPaths, settings::Settings};
use budgetlens::logging::init_tracing;
use budgetlens::models::Money;

#[derive(Parser)]
#[command(
    name = "budgetlens",
    version,
    about = "Spending projections, savings goals and emergency fund tracking",
    long_about = "budgetlens projects where a budget period will end up at the current \
                  spending rate, tracks progress toward a savings goal, and checks \
                  emergency fund deposits and withdrawals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project end-of-period spending and savings
    Project(ProjectArgs),

    /// Show progress toward a savings goal
    Progress {
        /// Savings goal
        #[arg(short, long)]
        goal: Money,
        /// Savings so far
        #[arg(short, long, allow_hyphen_values = true)]
        savings: Money,
    },

    /// Emergency fund commands
    #[command(subcommand)]
    Fund(FundCommands),

    /// Spending statistics per category from a CSV file
    Stats(StatsArgs),

    /// Ask the backend to categorize transactions
    Categorize(CategorizeArgs),

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetLensPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    match cli.command {
        Some(Commands::Project(args)) => handle_project_command(&settings, args)?,
        Some(Commands::Progress { goal, savings }) => {
            handle_progress_command(&settings, goal, savings)?
        }
        Some(Commands::Fund(cmd)) => handle_fund_command(&settings, cmd)?,
        Some(Commands::Stats(args)) => handle_stats_command(&settings, args)?,
        Some(Commands::Categorize(args)) => handle_categorize_command(&settings, args)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("budgetlens Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Budget period type: {:?}", settings.budget_period_type);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Log level:          {}", settings.log_level);
            println!("  Backend URL:        {}", settings.categorization.base_url);
            println!("  Backend timeout:    {}s", settings.categorization.timeout_secs);
        }
        None => {
            println!("budgetlens - spending projections and emergency fund tracking");
            println!();
            println!("Run 'budgetlens --help' for usage information.");
        }
    }

    Ok(())
}
