//! Budget category model
//!
//! A category carries its allocation for the period and what has been
//! spent against it. Records are immutable; spending totals are refreshed
//! by building a new record from the backend's latest figures.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::ids::CategoryId;
use super::money::Money;
use crate::error::{BudgetLensError, BudgetLensResult};

/// Longest category name accepted
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// A spending category within a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (e.g., "Groceries")
    pub name: String,

    /// Amount allocated to this category for the period
    pub allocated: Money,

    /// Amount spent so far this period
    #[serde(default)]
    pub spent: Money,
}

impl BudgetCategory {
    /// Create a category with no spending yet
    pub fn new(name: impl Into<String>, allocated: Money) -> Self {
        Self::with_spent(name, allocated, Money::zero())
    }

    /// Create a category with spending already recorded
    pub fn with_spent(name: impl Into<String>, allocated: Money, spent: Money) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            allocated,
            spent,
        }
    }

    /// Allocation left (negative when overspent)
    pub fn remaining(&self) -> BudgetLensResult<Money> {
        self.allocated.checked_sub(self.spent).ok_or_else(|| {
            BudgetLensError::overflow(format!("{}: {} less {}", self.name, self.allocated, self.spent))
        })
    }

    pub fn is_overspent(&self) -> bool {
        self.spent > self.allocated
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > MAX_CATEGORY_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if self.allocated.is_negative() {
            return Err(CategoryValidationError::NegativeAllocation(self.allocated));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} of {})", self.name, self.spent, self.allocated)
    }
}

/// Validation errors for categories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name too long ({0} chars, max 50)")]
    NameTooLong(usize),
    #[error("Category allocation cannot be negative: {0}")]
    NegativeAllocation(Money),
}
