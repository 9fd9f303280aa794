//! Spending projection
//!
//! Pure functions that turn a `BudgetPeriod` (and optionally a
//! `SavingsGoal`) into daily allowances, linear end-of-period projections
//! and goal progress. Every zero-length time base is reported as
//! `DivisionByZero` instead of leaking a non-finite number.
//!
//! Scaled divisions round once, half away from zero, to the cent. A
//! projection such as `spent / elapsed * total` is computed as
//! `spent * total / elapsed` so the intermediate daily rate is never rounded.

use serde::Serialize;
use std::fmt;

use crate::error::{BudgetLensError, BudgetLensResult};
use crate::models::{BudgetPeriod, Money, SavingsGoal};

/// Progress below this percentage is `Behind`
pub const NEAR_THRESHOLD: f64 = 70.0;

/// Progress at or above this percentage is `OnTrack`
pub const ON_TRACK_THRESHOLD: f64 = 90.0;

/// Days counted as one week of allowed spending
pub const DAYS_PER_WEEK: u32 = 7;

/// Three-tier progress classification used for color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    Behind,
    Near,
    OnTrack,
}

impl fmt::Display for ProgressTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Behind => write!(f, "Behind"),
            Self::Near => write!(f, "Near"),
            Self::OnTrack => write!(f, "On track"),
        }
    }
}

/// `amount * numerator / denominator`, with a named zero-denominator error
fn scale(
    amount: Money,
    numerator: u32,
    denominator: u32,
    quantity: &'static str,
) -> BudgetLensResult<Money> {
    if denominator == 0 {
        return Err(BudgetLensError::division_by_zero(quantity));
    }
    amount
        .mul_div(i64::from(numerator), i64::from(denominator))
        .ok_or_else(|| BudgetLensError::Arithmetic(format!("{} scaled by {}/{}", amount, numerator, denominator)))
}

/// Even spend per day that uses the allocation exactly
pub fn daily_allowance(period: &BudgetPeriod) -> BudgetLensResult<Money> {
    scale(period.allocated_amount(), 1, period.total_days(), "total days")
}

/// Average spend per elapsed day so far
pub fn actual_daily_rate(period: &BudgetPeriod) -> BudgetLensResult<Money> {
    scale(period.actual_spent(), 1, period.days_elapsed(), "days elapsed")
}

/// Spend at the end of the period if the current rate holds
pub fn projected_end_of_period_spend(period: &BudgetPeriod) -> BudgetLensResult<Money> {
    scale(
        period.actual_spent(),
        period.total_days(),
        period.days_elapsed(),
        "days elapsed",
    )
}

/// Allocation left at the end of the period if the current rate holds
///
/// Negative when an overspend is projected.
pub fn projected_remaining(period: &BudgetPeriod) -> BudgetLensResult<Money> {
    let projected = projected_end_of_period_spend(period)?;
    period
        .allocated_amount()
        .checked_sub(projected)
        .ok_or_else(|| BudgetLensError::overflow(format!("{} less projected {}", period.allocated_amount(), projected)))
}

/// Savings at the end of the period if they keep accruing at the current rate
pub fn projected_savings(period: &BudgetPeriod, current_savings: Money) -> BudgetLensResult<Money> {
    scale(
        current_savings,
        period.total_days(),
        period.days_elapsed(),
        "days elapsed",
    )
}

/// Whether projected savings meet the goal
pub fn is_on_track(projected_savings: Money, monthly_goal: Money) -> bool {
    projected_savings >= monthly_goal
}

/// Raw progress toward the goal as a percentage
///
/// Not clamped: the result can exceed 100 or be negative. Callers that
/// draw a progress bar apply `min(100.0)` themselves.
pub fn goal_progress_percent(current_savings: Money, monthly_goal: Money) -> BudgetLensResult<f64> {
    current_savings
        .percent_of(monthly_goal)
        .ok_or_else(|| BudgetLensError::division_by_zero("monthly goal"))
}

/// Map a progress percentage to its tier
pub fn classify_progress(percent: f64) -> ProgressTier {
    if percent >= ON_TRACK_THRESHOLD {
        ProgressTier::OnTrack
    } else if percent >= NEAR_THRESHOLD {
        ProgressTier::Near
    } else {
        ProgressTier::Behind
    }
}

/// Savings needed per remaining day to still reach the goal
///
/// Negative once the goal has already been exceeded.
pub fn required_daily_savings(
    monthly_goal: Money,
    current_savings: Money,
    days_remaining: u32,
) -> BudgetLensResult<Money> {
    let outstanding = SavingsGoal::new(monthly_goal, current_savings).outstanding()?;
    scale(outstanding, 1, days_remaining, "days remaining")
}

/// Spending allowed over the next `days`, pacing the unspent allocation
/// evenly across the days left in the period
///
/// Never negative: an overspent period allows nothing. A period with no
/// days left also allows nothing.
pub fn allowed_spending_for_days(period: &BudgetPeriod, days: u32) -> BudgetLensResult<Money> {
    let remaining_days = period.days_remaining();
    let left = period.remaining_amount();
    if remaining_days == 0 || !left.is_positive() {
        return Ok(Money::zero());
    }
    scale(left, days.min(remaining_days), remaining_days, "days remaining")
}

/// Spending allowed over the next week
pub fn allowed_spending_for_week(period: &BudgetPeriod) -> BudgetLensResult<Money> {
    allowed_spending_for_days(period, DAYS_PER_WEEK)
}

/// Spending allowed for the rest of the period
pub fn allowed_spending_for_month(period: &BudgetPeriod) -> BudgetLensResult<Money> {
    allowed_spending_for_days(period, period.days_remaining())
}

/// Map a day-zero error to `None`, propagating anything else
fn optional<T>(result: BudgetLensResult<T>) -> BudgetLensResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_division_by_zero() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Savings side of a projection report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsProjection {
    pub monthly_goal: Money,
    pub current_savings: Money,
    /// `None` on the first day of the period
    pub projected_savings: Option<Money>,
    pub on_track: Option<bool>,
    /// `None` when the goal is zero
    pub progress_percent: Option<f64>,
    pub tier: Option<ProgressTier>,
    /// `None` when no days remain
    pub required_daily_savings: Option<Money>,
}

/// Everything the projector can say about a period, ready for display
///
/// Fields whose denominator is zero are `None`, so a period that has only
/// just started renders placeholders instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionReport {
    pub allocated: Money,
    pub spent: Money,
    pub days_elapsed: u32,
    pub days_remaining: u32,
    pub daily_allowance: Option<Money>,
    pub actual_daily_rate: Option<Money>,
    pub projected_spend: Option<Money>,
    pub projected_remaining: Option<Money>,
    pub allowed_this_week: Money,
    pub allowed_rest_of_period: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsProjection>,
}

impl ProjectionReport {
    /// Generate a report for a period and an optional savings goal
    pub fn generate(period: &BudgetPeriod, goal: Option<&SavingsGoal>) -> BudgetLensResult<Self> {
        let savings = match goal {
            Some(goal) => Some(Self::savings(period, goal)?),
            None => None,
        };

        let report = Self {
            allocated: period.allocated_amount(),
            spent: period.actual_spent(),
            days_elapsed: period.days_elapsed(),
            days_remaining: period.days_remaining(),
            daily_allowance: optional(daily_allowance(period))?,
            actual_daily_rate: optional(actual_daily_rate(period))?,
            projected_spend: optional(projected_end_of_period_spend(period))?,
            projected_remaining: optional(projected_remaining(period))?,
            allowed_this_week: allowed_spending_for_week(period)?,
            allowed_rest_of_period: allowed_spending_for_month(period)?,
            savings,
        };

        tracing::debug!(
            elapsed = report.days_elapsed,
            remaining = report.days_remaining,
            projected_spend = ?report.projected_spend,
            "generated projection report"
        );

        Ok(report)
    }

    fn savings(period: &BudgetPeriod, goal: &SavingsGoal) -> BudgetLensResult<SavingsProjection> {
        let projected = optional(projected_savings(period, goal.current_savings))?;
        let percent = optional(goal_progress_percent(goal.current_savings, goal.monthly_goal))?;

        Ok(SavingsProjection {
            monthly_goal: goal.monthly_goal,
            current_savings: goal.current_savings,
            projected_savings: projected,
            on_track: projected.map(|p| is_on_track(p, goal.monthly_goal)),
            progress_percent: percent,
            tier: percent.map(classify_progress),
            required_daily_savings: optional(required_daily_savings(
                goal.monthly_goal,
                goal.current_savings,
                period.days_remaining(),
            ))?,
        })
    }

    /// True when the current rate overruns the allocation
    pub fn is_over_budget(&self) -> bool {
        self.projected_remaining.is_some_and(|r| r.is_negative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(allocated: i64, spent: i64, elapsed: u32, remaining: u32) -> BudgetPeriod {
        BudgetPeriod::new(
            Money::from_cents(allocated),
            Money::from_cents(spent),
            elapsed,
            remaining,
        )
        .unwrap()
    }

    #[test]
    fn test_over_budget_projection() {
        let p = period(53000, 42550, 21, 7);

        assert_eq!(actual_daily_rate(&p).unwrap(), Money::from_cents(2026));
        assert_eq!(projected_end_of_period_spend(&p).unwrap(), Money::from_cents(56733));
        assert_eq!(projected_remaining(&p).unwrap(), Money::from_cents(-3733));
        assert_eq!(daily_allowance(&p).unwrap(), Money::from_cents(1893));
    }

    #[test]
    fn test_daily_allowance_zero_days() {
        let p = period(53000, 0, 0, 0);
        assert!(daily_allowance(&p).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_day_zero_rates_are_errors() {
        let p = period(53000, 1200, 0, 28);

        assert!(daily_allowance(&p).is_ok());
        assert!(actual_daily_rate(&p).unwrap_err().is_division_by_zero());
        assert!(projected_end_of_period_spend(&p)
            .unwrap_err()
            .is_division_by_zero());
        assert!(projected_remaining(&p).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_projected_savings_day_zero() {
        let p = period(100000, 0, 0, 30);
        let err = projected_savings(&p, Money::from_cents(35000)).unwrap_err();
        assert!(matches!(
            err,
            BudgetLensError::DivisionByZero { quantity: "days elapsed" }
        ));
    }

    #[test]
    fn test_projected_savings_and_on_track() {
        // 350 saved after 20 of 30 days projects to 525
        let p = period(100000, 0, 20, 10);
        let projected = projected_savings(&p, Money::from_cents(35000)).unwrap();
        assert_eq!(projected, Money::from_cents(52500));
        assert!(is_on_track(projected, Money::from_cents(50000)));
        assert!(is_on_track(Money::from_cents(50000), Money::from_cents(50000)));
        assert!(!is_on_track(Money::from_cents(49999), Money::from_cents(50000)));
    }

    #[test]
    fn test_goal_progress_and_tier() {
        let pct = goal_progress_percent(Money::from_cents(45000), Money::from_cents(50000)).unwrap();
        assert_eq!(pct, 90.0);
        assert_eq!(classify_progress(pct), ProgressTier::OnTrack);
    }

    #[test]
    fn test_goal_progress_unclamped() {
        let over = goal_progress_percent(Money::from_cents(60000), Money::from_cents(50000)).unwrap();
        assert_eq!(over, 120.0);
        let negative =
            goal_progress_percent(Money::from_cents(-5000), Money::from_cents(50000)).unwrap();
        assert_eq!(negative, -10.0);
        assert!(goal_progress_percent(Money::from_cents(100), Money::zero())
            .unwrap_err()
            .is_division_by_zero());
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_progress(-5.0), ProgressTier::Behind);
        assert_eq!(classify_progress(69.99), ProgressTier::Behind);
        assert_eq!(classify_progress(70.0), ProgressTier::Near);
        assert_eq!(classify_progress(89.99), ProgressTier::Near);
        assert_eq!(classify_progress(90.0), ProgressTier::OnTrack);
        assert_eq!(classify_progress(150.0), ProgressTier::OnTrack);
    }

    #[test]
    fn test_required_daily_savings() {
        let needed =
            required_daily_savings(Money::from_cents(50000), Money::from_cents(35000), 10).unwrap();
        assert_eq!(needed, Money::from_cents(1500));

        let err =
            required_daily_savings(Money::from_cents(50000), Money::from_cents(35000), 0).unwrap_err();
        assert!(matches!(
            err,
            BudgetLensError::DivisionByZero { quantity: "days remaining" }
        ));

        let err = required_daily_savings(Money::from_cents(i64::MAX), Money::from_cents(-1), 5)
            .unwrap_err();
        assert!(matches!(err, BudgetLensError::Arithmetic(_)));
    }

    #[test]
    fn test_projected_remaining_overflow() {
        let half = i64::MAX / 2;
        let period = BudgetPeriod::new(Money::from_cents(half), Money::from_cents(-half), 1, 1).unwrap();
        let err = projected_remaining(&period).unwrap_err();
        assert!(matches!(err, BudgetLensError::Arithmetic(_)));
    }

    #[test]
    fn test_allowed_spending() {
        // 300 left over 10 days: 210 for a week, 300 for the rest
        let p = period(100000, 70000, 20, 10);
        assert_eq!(allowed_spending_for_week(&p).unwrap(), Money::from_cents(21000));
        assert_eq!(allowed_spending_for_month(&p).unwrap(), Money::from_cents(30000));

        // Fewer than seven days left caps the week at what remains
        let p = period(100000, 70000, 27, 3);
        assert_eq!(allowed_spending_for_week(&p).unwrap(), Money::from_cents(30000));

        let overspent = period(100000, 120000, 20, 10);
        assert_eq!(allowed_spending_for_week(&overspent).unwrap(), Money::zero());

        let finished = period(100000, 50000, 30, 0);
        assert_eq!(allowed_spending_for_month(&finished).unwrap(), Money::zero());
    }

    #[test]
    fn test_idempotent() {
        let p = period(53000, 42550, 21, 7);
        assert_eq!(
            projected_end_of_period_spend(&p).unwrap(),
            projected_end_of_period_spend(&p).unwrap()
        );
    }

    #[test]
    fn test_report_mid_period() {
        let p = period(53000, 42550, 21, 7);
        let goal = SavingsGoal::new(Money::from_cents(50000), Money::from_cents(45000));
        let report = ProjectionReport::generate(&p, Some(&goal)).unwrap();

        assert_eq!(report.projected_spend, Some(Money::from_cents(56733)));
        assert!(report.is_over_budget());

        let savings = report.savings.unwrap();
        assert_eq!(savings.progress_percent, Some(90.0));
        assert_eq!(savings.tier, Some(ProgressTier::OnTrack));
        assert_eq!(savings.projected_savings, Some(Money::from_cents(60000)));
        assert_eq!(savings.on_track, Some(true));
    }

    #[test]
    fn test_report_day_zero_uses_placeholders() {
        let p = period(53000, 0, 0, 28);
        let goal = SavingsGoal::new(Money::from_cents(50000), Money::from_cents(35000));
        let report = ProjectionReport::generate(&p, Some(&goal)).unwrap();

        assert_eq!(report.daily_allowance, Some(Money::from_cents(1893)));
        assert_eq!(report.actual_daily_rate, None);
        assert_eq!(report.projected_spend, None);
        assert!(!report.is_over_budget());

        let savings = report.savings.unwrap();
        assert_eq!(savings.projected_savings, None);
        assert_eq!(savings.on_track, None);
        assert_eq!(savings.progress_percent, Some(70.0));
        assert_eq!(savings.tier, Some(ProgressTier::Near));
    }

    #[test]
    fn test_report_zero_goal() {
        let p = period(53000, 100, 5, 0);
        let goal = SavingsGoal::new(Money::zero(), Money::from_cents(100));
        let report = ProjectionReport::generate(&p, Some(&goal)).unwrap();
        let savings = report.savings.unwrap();
        assert_eq!(savings.progress_percent, None);
        assert_eq!(savings.tier, None);
        assert_eq!(savings.required_daily_savings, None);
    }
}
