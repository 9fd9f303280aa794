//! Budget period totals
//!
//! A `BudgetPeriod` is the snapshot the projector works from: how much was
//! allocated, how much has been spent, and how far into the period we are.
//! It is rebuilt from fresh totals on every recompute.

use chrono::NaiveDate;
use serde::Serialize;

use super::money::Money;
use super::period_range::PeriodRange;
use crate::error::{BudgetLensError, BudgetLensResult};

/// Allocation, spending and elapsed time for one budget period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetPeriod {
    allocated_amount: Money,
    actual_spent: Money,
    days_elapsed: u32,
    days_remaining: u32,
}

impl BudgetPeriod {
    /// Create a period snapshot
    ///
    /// # Errors
    ///
    /// Returns a validation error if `allocated_amount` is negative or the
    /// day counts overflow when summed, and an arithmetic error if the
    /// unspent allocation does not fit in the cent range.
    pub fn new(
        allocated_amount: Money,
        actual_spent: Money,
        days_elapsed: u32,
        days_remaining: u32,
    ) -> BudgetLensResult<Self> {
        if allocated_amount.is_negative() {
            return Err(BudgetLensError::Validation(format!(
                "allocated amount cannot be negative: {}",
                allocated_amount
            )));
        }
        if days_elapsed.checked_add(days_remaining).is_none() {
            return Err(BudgetLensError::Validation(
                "period length is out of range".into(),
            ));
        }
        if allocated_amount.checked_sub(actual_spent).is_none() {
            return Err(BudgetLensError::overflow(format!(
                "{} allocated less {} spent",
                allocated_amount, actual_spent
            )));
        }

        Ok(Self {
            allocated_amount,
            actual_spent,
            days_elapsed,
            days_remaining,
        })
    }

    /// Build a snapshot from a calendar range and today's date
    pub fn from_range(
        range: &PeriodRange,
        today: NaiveDate,
        allocated_amount: Money,
        actual_spent: Money,
    ) -> BudgetLensResult<Self> {
        Self::new(
            allocated_amount,
            actual_spent,
            range.days_elapsed(today),
            range.days_remaining(today),
        )
    }

    pub fn allocated_amount(&self) -> Money {
        self.allocated_amount
    }

    pub fn actual_spent(&self) -> Money {
        self.actual_spent
    }

    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    pub fn days_remaining(&self) -> u32 {
        self.days_remaining
    }

    /// `days_elapsed + days_remaining`
    pub fn total_days(&self) -> u32 {
        // Checked at construction
        self.days_elapsed.saturating_add(self.days_remaining)
    }

    /// Allocation left after actual spending (negative when overspent)
    pub fn remaining_amount(&self) -> Money {
        // In range: checked at construction
        self.allocated_amount - self.actual_spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_period() {
        let period =
            BudgetPeriod::new(Money::from_cents(53000), Money::from_cents(42550), 21, 7).unwrap();
        assert_eq!(period.total_days(), 28);
        assert_eq!(period.remaining_amount(), Money::from_cents(10450));
    }

    #[test]
    fn test_spending_may_exceed_allocation() {
        let period =
            BudgetPeriod::new(Money::from_cents(100), Money::from_cents(250), 3, 4).unwrap();
        assert!(period.remaining_amount().is_negative());
    }

    #[test]
    fn test_negative_allocation_rejected() {
        let err = BudgetPeriod::new(Money::from_cents(-1), Money::zero(), 1, 1).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_day_overflow_rejected() {
        assert!(BudgetPeriod::new(Money::zero(), Money::zero(), u32::MAX, 1).is_err());
    }

    #[test]
    fn test_unspent_overflow_rejected() {
        let err = BudgetPeriod::new(Money::from_cents(i64::MAX), Money::from_cents(-1), 1, 1)
            .unwrap_err();
        assert!(matches!(err, BudgetLensError::Arithmetic(_)));
    }

    #[test]
    fn test_from_range() {
        let feb = PeriodRange::monthly(2025, 2).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 2, 22).unwrap();
        let period =
            BudgetPeriod::from_range(&feb, today, Money::from_cents(53000), Money::zero()).unwrap();
        assert_eq!(period.days_elapsed(), 21);
        assert_eq!(period.days_remaining(), 7);
    }
}
