//! Savings goal for a budget period

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{BudgetLensError, BudgetLensResult};

/// Target savings for a period and what has been put aside so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Target savings for the period
    pub monthly_goal: Money,

    /// Savings accumulated so far this period
    pub current_savings: Money,
}

impl SavingsGoal {
    pub fn new(monthly_goal: Money, current_savings: Money) -> Self {
        Self {
            monthly_goal,
            current_savings,
        }
    }

    /// Amount still to save (negative once the goal is exceeded)
    pub fn outstanding(&self) -> BudgetLensResult<Money> {
        self.monthly_goal
            .checked_sub(self.current_savings)
            .ok_or_else(|| {
                BudgetLensError::overflow(format!(
                    "goal {} less savings {}",
                    self.monthly_goal, self.current_savings
                ))
            })
    }

    pub fn is_met(&self) -> bool {
        self.current_savings >= self.monthly_goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outstanding() {
        let goal = SavingsGoal::new(Money::from_cents(50000), Money::from_cents(35000));
        assert_eq!(goal.outstanding().unwrap(), Money::from_cents(15000));
        assert!(!goal.is_met());

        let done = SavingsGoal::new(Money::from_cents(50000), Money::from_cents(52000));
        assert!(done.outstanding().unwrap().is_negative());
        assert!(done.is_met());
    }

    #[test]
    fn test_outstanding_overflow() {
        let goal = SavingsGoal::new(Money::from_cents(i64::MAX), Money::from_cents(-1));
        assert!(matches!(goal.outstanding(), Err(BudgetLensError::Arithmetic(_))));
    }
}
