//! Budget model
//!
//! A budget is an immutable record: a total amount for a calendar range,
//! split across categories. Totals and the projector's input snapshot are
//! derived by the free functions below rather than stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BudgetCategory;
use super::ids::{BudgetId, UserId};
use super::money::Money;
use super::period::BudgetPeriod;
use super::period_range::PeriodRange;
use crate::error::{BudgetLensError, BudgetLensResult};

/// A budget for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    /// Owner of the budget
    pub user_id: UserId,

    pub name: String,

    /// Calendar range the budget covers
    pub range: PeriodRange,

    /// Total amount available to allocate
    pub total_amount: Money,

    #[serde(default)]
    pub categories: Vec<BudgetCategory>,

    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a budget with no categories
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        range: PeriodRange,
        total_amount: Money,
    ) -> Self {
        Self {
            id: BudgetId::new(),
            user_id,
            name: name.into(),
            range,
            total_amount,
            categories: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Return a copy of this budget with `categories` attached
    pub fn with_categories(self, categories: Vec<BudgetCategory>) -> Self {
        Self { categories, ..self }
    }

    /// Validate the budget and every category in it
    pub fn validate(&self) -> BudgetLensResult<()> {
        if self.name.trim().is_empty() {
            return Err(BudgetLensError::Validation(
                "budget name cannot be empty".into(),
            ));
        }
        if self.total_amount.is_negative() {
            return Err(BudgetLensError::Validation(format!(
                "budget total cannot be negative: {}",
                self.total_amount
            )));
        }
        for category in &self.categories {
            category
                .validate()
                .map_err(|e| BudgetLensError::Validation(e.to_string()))?;
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.range, self.total_amount)
    }
}

/// Sum of category allocations
pub fn total_allocated(budget: &Budget) -> BudgetLensResult<Money> {
    Money::checked_sum(budget.categories.iter().map(|c| c.allocated))
        .ok_or_else(|| BudgetLensError::overflow(format!("{}: total allocated", budget.name)))
}

/// Sum of category spending
pub fn total_spent(budget: &Budget) -> BudgetLensResult<Money> {
    Money::checked_sum(budget.categories.iter().map(|c| c.spent))
        .ok_or_else(|| BudgetLensError::overflow(format!("{}: total spent", budget.name)))
}

/// Budget total not yet assigned to a category (negative when over-allocated)
pub fn unallocated(budget: &Budget) -> BudgetLensResult<Money> {
    budget
        .total_amount
        .checked_sub(total_allocated(budget)?)
        .ok_or_else(|| BudgetLensError::overflow(format!("{}: unallocated", budget.name)))
}

/// Projector input for this budget as of `today`
pub fn spending_period(budget: &Budget, today: NaiveDate) -> BudgetLensResult<BudgetPeriod> {
    BudgetPeriod::from_range(&budget.range, today, budget.total_amount, total_spent(budget)?)
}
