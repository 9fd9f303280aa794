//! Core data models for budgetlens
//!
//! Plain records for budgets, categories, savings goals, users and the
//! emergency fund, plus the `Money` and `PeriodRange` value types they are
//! built from.

pub mod budget;
pub mod category;
pub mod emergency_fund;
pub mod ids;
pub mod money;
pub mod period;
pub mod period_range;
pub mod savings_goal;
pub mod user;

pub use budget::Budget;
pub use category::{BudgetCategory, CategoryValidationError};
pub use emergency_fund::{EmergencyFund, FundState};
pub use ids::{AccountId, BudgetId, CategoryId, TransactionId, UserId};
pub use money::{Money, MoneyParseError};
pub use period::BudgetPeriod;
pub use period_range::{PeriodKind, PeriodParseError, PeriodRange};
pub use savings_goal::SavingsGoal;
pub use user::User;
