//! Budget spending statistics
//!
//! Compares actual spending with allocations per category and for the
//! budget as a whole, classifying each as under, on, or over budget.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::io::Read;

use crate::error::{BudgetLensError, BudgetLensResult};
use crate::models::{BudgetCategory, Money};

/// Spending relative to allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingStatus {
    UnderBudget,
    OnBudget,
    OverBudget,
}

impl SpendingStatus {
    /// Classify `spent` against `allocated`
    pub fn classify(allocated: Money, spent: Money) -> Self {
        match spent.cmp(&allocated) {
            Ordering::Less => Self::UnderBudget,
            Ordering::Equal => Self::OnBudget,
            Ordering::Greater => Self::OverBudget,
        }
    }
}

impl fmt::Display for SpendingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderBudget => write!(f, "Under budget"),
            Self::OnBudget => write!(f, "On budget"),
            Self::OverBudget => write!(f, "Over budget"),
        }
    }
}

/// Statistics for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStatistic {
    pub name: String,
    pub allocated: Money,
    pub spent: Money,
    pub remaining: Money,
    /// `None` when nothing was allocated
    pub percent_used: Option<f64>,
    pub status: SpendingStatus,
}

impl CategoryStatistic {
    pub fn from_category(category: &BudgetCategory) -> BudgetLensResult<Self> {
        Ok(Self {
            name: category.name.clone(),
            allocated: category.allocated,
            spent: category.spent,
            remaining: category.remaining()?,
            percent_used: category.spent.percent_of(category.allocated),
            status: SpendingStatus::classify(category.allocated, category.spent),
        })
    }

    /// Amount spent beyond the allocation (zero when within budget)
    pub fn overspend(&self) -> Money {
        if self.status == SpendingStatus::OverBudget {
            Money::zero()
                .checked_sub(self.remaining)
                .unwrap_or(Money::from_cents(i64::MAX))
        } else {
            Money::zero()
        }
    }
}

/// Spending statistics for a whole budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingStatistics {
    pub categories: Vec<CategoryStatistic>,
    pub total_allocated: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    pub percent_used: Option<f64>,
    pub status: SpendingStatus,
}

/// One `name,allocated,spent` row
#[derive(Debug, Deserialize)]
struct CategoryRow {
    name: String,
    allocated: String,
    #[serde(default)]
    spent: String,
}

impl SpendingStatistics {
    /// Compute statistics for a set of categories
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error if a remainder or total leaves the cent
    /// range.
    pub fn from_categories(categories: &[BudgetCategory]) -> BudgetLensResult<Self> {
        let stats = categories
            .iter()
            .map(CategoryStatistic::from_category)
            .collect::<BudgetLensResult<Vec<_>>>()?;

        let total_allocated = Money::checked_sum(stats.iter().map(|s| s.allocated))
            .ok_or_else(|| BudgetLensError::overflow("total allocated"))?;
        let total_spent = Money::checked_sum(stats.iter().map(|s| s.spent))
            .ok_or_else(|| BudgetLensError::overflow("total spent"))?;
        let total_remaining = total_allocated
            .checked_sub(total_spent)
            .ok_or_else(|| BudgetLensError::overflow("total remaining"))?;

        tracing::debug!(
            categories = stats.len(),
            %total_allocated,
            %total_spent,
            "computed spending statistics"
        );

        Ok(Self {
            categories: stats,
            total_allocated,
            total_spent,
            total_remaining,
            percent_used: total_spent.percent_of(total_allocated),
            status: SpendingStatus::classify(total_allocated, total_spent),
        })
    }

    /// Load categories from CSV with a `name,allocated,spent` header and
    /// compute their statistics
    ///
    /// Amounts accept any format `Money::parse` does. An empty `spent`
    /// column counts as zero.
    pub fn from_csv<R: Read>(reader: R) -> BudgetLensResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut categories = Vec::new();
        for (index, row) in csv_reader.deserialize::<CategoryRow>().enumerate() {
            let row = row?;
            let line = index + 2;
            let parse = |field: &str, value: &str| {
                if value.is_empty() {
                    return Ok(Money::zero());
                }
                Money::parse(value).map_err(|e| {
                    BudgetLensError::Csv(format!("line {}: {} ({})", line, e, field))
                })
            };

            let category = BudgetCategory::with_spent(
                row.name,
                parse("allocated", &row.allocated)?,
                parse("spent", &row.spent)?,
            );
            category
                .validate()
                .map_err(|e| BudgetLensError::Validation(format!("line {}: {}", line, e)))?;
            categories.push(category);
        }

        Self::from_categories(&categories)
    }

    /// Overspent categories, largest overspend first
    pub fn over_budget(&self) -> Vec<&CategoryStatistic> {
        let mut over: Vec<&CategoryStatistic> = self
            .categories
            .iter()
            .filter(|s| s.status == SpendingStatus::OverBudget)
            .collect();
        over.sort_by(|a, b| b.overspend().cmp(&a.overspend()));
        over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<BudgetCategory> {
        vec![
            BudgetCategory::with_spent("Groceries", Money::from_cents(40000), Money::from_cents(31250)),
            BudgetCategory::with_spent("Dining", Money::from_cents(10000), Money::from_cents(12500)),
            BudgetCategory::with_spent("Fuel", Money::from_cents(8000), Money::from_cents(8000)),
            BudgetCategory::with_spent("Fun", Money::from_cents(5000), Money::from_cents(9000)),
        ]
    }

    #[test]
    fn test_classify() {
        let a = Money::from_cents(100);
        assert_eq!(SpendingStatus::classify(a, Money::from_cents(99)), SpendingStatus::UnderBudget);
        assert_eq!(SpendingStatus::classify(a, a), SpendingStatus::OnBudget);
        assert_eq!(SpendingStatus::classify(a, Money::from_cents(101)), SpendingStatus::OverBudget);
    }

    #[test]
    fn test_totals() {
        let stats = SpendingStatistics::from_categories(&categories()).unwrap();
        assert_eq!(stats.total_allocated, Money::from_cents(63000));
        assert_eq!(stats.total_spent, Money::from_cents(60750));
        assert_eq!(stats.total_remaining, Money::from_cents(2250));
        assert_eq!(stats.status, SpendingStatus::UnderBudget);
    }

    #[test]
    fn test_per_category() {
        let stats = SpendingStatistics::from_categories(&categories()).unwrap();
        let dining = &stats.categories[1];
        assert_eq!(dining.status, SpendingStatus::OverBudget);
        assert_eq!(dining.percent_used, Some(125.0));
        assert_eq!(dining.overspend(), Money::from_cents(2500));

        assert_eq!(stats.categories[2].status, SpendingStatus::OnBudget);
        assert_eq!(stats.categories[0].overspend(), Money::zero());
    }

    #[test]
    fn test_over_budget_ordering() {
        let stats = SpendingStatistics::from_categories(&categories()).unwrap();
        let names: Vec<&str> = stats.over_budget().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Fun", "Dining"]);
    }

    #[test]
    fn test_zero_allocation() {
        let stats = SpendingStatistics::from_categories(&[BudgetCategory::with_spent(
            "Gifts",
            Money::zero(),
            Money::from_cents(500),
        )])
        .unwrap();
        assert_eq!(stats.categories[0].percent_used, None);
        assert_eq!(stats.categories[0].status, SpendingStatus::OverBudget);
    }

    #[test]
    fn test_empty() {
        let stats = SpendingStatistics::from_categories(&[]).unwrap();
        assert!(stats.categories.is_empty());
        assert_eq!(stats.status, SpendingStatus::OnBudget);
        assert_eq!(stats.percent_used, None);
    }

    #[test]
    fn test_from_csv() {
        let data = "name,allocated,spent\nGroceries,400.00,312.50\nDining, $100 ,125\nSavings,50,\n";
        let stats = SpendingStatistics::from_csv(data.as_bytes()).unwrap();
        assert_eq!(stats.categories.len(), 3);
        assert_eq!(stats.categories[1].spent, Money::from_cents(12500));
        assert_eq!(stats.categories[2].spent, Money::zero());
        assert_eq!(stats.total_allocated, Money::from_cents(55000));
    }

    #[test]
    fn test_from_csv_bad_amount() {
        let data = "name,allocated,spent\nGroceries,lots,1\n";
        let err = SpendingStatistics::from_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BudgetLensError::Csv(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_from_csv_invalid_category() {
        let data = "name,allocated,spent\n,10,1\n";
        let err = SpendingStatistics::from_csv(data.as_bytes()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_csv_total_overflow() {
        let data = "name,allocated,spent\nA,90000000000000000,0\nB,90000000000000000,0\n";
        let err = SpendingStatistics::from_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BudgetLensError::Arithmetic(_)));
    }
}
