//! Emergency fund CLI commands
//!
//! The fund is described entirely by arguments; each command applies one
//! operation and prints the resulting state.

use clap::{Args, Subcommand};

use crate::config::settings::Settings;
use crate::display::format_fund_details;
use crate::error::BudgetLensResult;
use crate::models::{AccountId, BudgetId, EmergencyFund, Money};

/// The fund an operation applies to
#[derive(Args, Debug, Clone)]
pub struct FundArgs {
    /// Target amount for the fund
    #[arg(short, long)]
    pub target: Money,

    /// Current balance
    #[arg(short, long, default_value = "0")]
    pub balance: Money,

    /// Amount set aside for the fund each month
    #[arg(long, default_value = "0")]
    pub allocation: Money,
}

impl FundArgs {
    fn build(&self) -> BudgetLensResult<EmergencyFund> {
        EmergencyFund::new(
            BudgetId::new(),
            AccountId::new(),
            self.target,
            self.balance,
            self.allocation,
        )
    }
}

/// Emergency fund subcommands
#[derive(Subcommand, Debug)]
pub enum FundCommands {
    /// Show balance, progress and shortfall
    Status {
        #[command(flatten)]
        fund: FundArgs,
    },

    /// Deposit into the fund
    Deposit {
        #[command(flatten)]
        fund: FundArgs,
        /// Amount to deposit
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Money,
    },

    /// Withdraw from the fund
    Withdraw {
        #[command(flatten)]
        fund: FundArgs,
        /// Amount to withdraw
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Money,
    },
}

/// Handle a fund command
pub fn handle_fund_command(settings: &Settings, cmd: FundCommands) -> BudgetLensResult<()> {
    let symbol = settings.currency_symbol.as_str();

    let fund = match cmd {
        FundCommands::Status { fund } => fund.build()?,
        FundCommands::Deposit { fund, amount } => {
            let mut fund = fund.build()?;
            fund.deposit(amount)?;
            println!("Deposited {}.", amount.format_with_symbol(symbol));
            fund
        }
        FundCommands::Withdraw { fund, amount } => {
            let mut fund = fund.build()?;
            fund.withdraw(amount)?;
            println!("Withdrew {}.", amount.format_with_symbol(symbol));
            fund
        }
    };

    print!("{}", format_fund_details(&fund, symbol));
    Ok(())
}
