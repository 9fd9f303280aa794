//! Emergency fund ledger
//!
//! An emergency fund is a savings pool with a target ceiling, tracked
//! separately from category budgets. The balance never goes negative:
//! negative amounts and over-withdrawals are rejected, and a rejected
//! mutation leaves the fund exactly as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, BudgetId};
use super::money::Money;
use crate::error::{BudgetLensError, BudgetLensResult};

/// Whether the fund has reached its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundState {
    Underfunded,
    Full,
}

impl fmt::Display for FundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underfunded => write!(f, "Underfunded"),
            Self::Full => write!(f, "Full"),
        }
    }
}

/// An emergency fund attached to a budget and backed by one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmergencyFundRecord")]
pub struct EmergencyFund {
    budget_id: BudgetId,
    account_id: AccountId,
    fund_amount: Money,
    current_balance: Money,
    monthly_allocation: Money,
    last_updated: DateTime<Utc>,
}

/// Unchecked wire shape; validated into an `EmergencyFund` on load
#[derive(Deserialize)]
struct EmergencyFundRecord {
    budget_id: BudgetId,
    account_id: AccountId,
    fund_amount: Money,
    current_balance: Money,
    #[serde(default)]
    monthly_allocation: Money,
    last_updated: DateTime<Utc>,
}

impl TryFrom<EmergencyFundRecord> for EmergencyFund {
    type Error = BudgetLensError;

    fn try_from(record: EmergencyFundRecord) -> Result<Self, Self::Error> {
        let mut fund = Self::new(
            record.budget_id,
            record.account_id,
            record.fund_amount,
            record.current_balance,
            record.monthly_allocation,
        )?;
        fund.last_updated = record.last_updated;
        Ok(fund)
    }
}

impl EmergencyFund {
    /// Create a fund with an opening balance
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if `current_balance` is negative.
    pub fn new(
        budget_id: BudgetId,
        account_id: AccountId,
        fund_amount: Money,
        current_balance: Money,
        monthly_allocation: Money,
    ) -> BudgetLensResult<Self> {
        Self::new_at(
            budget_id,
            account_id,
            fund_amount,
            current_balance,
            monthly_allocation,
            Utc::now(),
        )
    }

    /// Create a fund with an explicit construction time
    pub fn new_at(
        budget_id: BudgetId,
        account_id: AccountId,
        fund_amount: Money,
        current_balance: Money,
        monthly_allocation: Money,
        now: DateTime<Utc>,
    ) -> BudgetLensResult<Self> {
        if current_balance.is_negative() {
            return Err(BudgetLensError::InvalidAmount {
                amount: current_balance,
            });
        }

        Ok(Self {
            budget_id,
            account_id,
            fund_amount,
            current_balance,
            monthly_allocation,
            last_updated: now,
        })
    }

    pub fn budget_id(&self) -> BudgetId {
        self.budget_id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Target ceiling for the fund
    pub fn fund_amount(&self) -> Money {
        self.fund_amount
    }

    pub fn current_balance(&self) -> Money {
        self.current_balance
    }

    pub fn monthly_allocation(&self) -> Money {
        self.monthly_allocation
    }

    /// When the fund was created or last successfully mutated
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Add money to the fund
    pub fn deposit(&mut self, amount: Money) -> BudgetLensResult<()> {
        self.deposit_at(amount, Utc::now())
    }

    /// Add money to the fund, stamping the mutation with `now`
    ///
    /// The balance may rise above `fund_amount`; there is no upper clamp.
    pub fn deposit_at(&mut self, amount: Money, now: DateTime<Utc>) -> BudgetLensResult<()> {
        if amount.is_negative() {
            tracing::warn!(budget = %self.budget_id, %amount, "rejected negative deposit");
            return Err(BudgetLensError::InvalidAmount { amount });
        }

        let balance = self
            .current_balance
            .cents()
            .checked_add(amount.cents())
            .ok_or_else(|| BudgetLensError::Arithmetic("fund balance overflow".into()))?;

        self.current_balance = Money::from_cents(balance);
        self.last_updated = now;
        tracing::debug!(budget = %self.budget_id, %amount, balance = %self.current_balance, "deposit");
        Ok(())
    }

    /// Take money out of the fund
    pub fn withdraw(&mut self, amount: Money) -> BudgetLensResult<()> {
        self.withdraw_at(amount, Utc::now())
    }

    /// Take money out of the fund, stamping the mutation with `now`
    pub fn withdraw_at(&mut self, amount: Money, now: DateTime<Utc>) -> BudgetLensResult<()> {
        if amount.is_negative() {
            tracing::warn!(budget = %self.budget_id, %amount, "rejected negative withdrawal");
            return Err(BudgetLensError::InvalidAmount { amount });
        }
        if amount > self.current_balance {
            tracing::warn!(
                budget = %self.budget_id,
                requested = %amount,
                available = %self.current_balance,
                "rejected withdrawal beyond balance"
            );
            return Err(BudgetLensError::InsufficientFunds {
                requested: amount,
                available: self.current_balance,
            });
        }

        self.current_balance -= amount;
        self.last_updated = now;
        tracing::debug!(budget = %self.budget_id, %amount, balance = %self.current_balance, "withdraw");
        Ok(())
    }

    /// True once the balance has reached the target
    pub fn is_full(&self) -> bool {
        self.current_balance >= self.fund_amount
    }

    pub fn state(&self) -> FundState {
        if self.is_full() {
            FundState::Full
        } else {
            FundState::Underfunded
        }
    }

    /// How far the balance is below the target (zero once full)
    pub fn shortfall(&self) -> Money {
        if self.is_full() {
            Money::zero()
        } else {
            self.fund_amount - self.current_balance
        }
    }

    /// Whole months of `monthly_allocation` needed to close the shortfall
    ///
    /// Returns `Some(0)` when already full and `None` when the fund is short
    /// but nothing is allocated to it each month.
    pub fn months_to_full(&self) -> Option<u32> {
        let shortfall = self.shortfall().cents();
        if shortfall == 0 {
            return Some(0);
        }

        let monthly = self.monthly_allocation.cents();
        if monthly <= 0 {
            return None;
        }

        let months = shortfall / monthly + i64::from(shortfall % monthly != 0);
        u32::try_from(months).ok()
    }
}
