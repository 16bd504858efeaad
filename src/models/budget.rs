//! Monthly budget model
//!
//! One spending limit per user per calendar month, keyed by `YYYY-MM`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::MonthPeriod;
use super::transaction::RawAmount;
use crate::error::{HisaabError, HisaabResult};

/// A budget exactly as the data source stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub user_id: String,
    pub budget_amount: RawAmount,
    pub month_year: String,
}

/// A validated monthly budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    /// Owner of the budget
    pub user_id: String,

    /// Spending limit for the month
    pub amount: Money,

    /// The month this budget applies to
    pub month: MonthPeriod,
}

impl Budget {
    /// Create a new budget
    pub fn new(user_id: impl Into<String>, amount: Money, month: MonthPeriod) -> Self {
        Self {
            user_id: user_id.into(),
            amount,
            month,
        }
    }

    /// Validate a stored record
    pub fn from_record(record: &BudgetRecord) -> HisaabResult<Self> {
        let amount = record
            .budget_amount
            .to_money()
            .map_err(HisaabError::malformed_budget)?;
        let month = MonthPeriod::parse(&record.month_year)
            .map_err(|e| HisaabError::malformed_budget(e.to_string()))?;

        Ok(Self {
            user_id: record.user_id.clone(),
            amount,
            month,
        })
    }

    /// The budgeted amount, treating a missing budget as zero
    pub fn amount_or_zero(budget: Option<&Budget>) -> Money {
        budget.map(|b| b.amount).unwrap_or_default()
    }
}

impl From<&Budget> for BudgetRecord {
    fn from(budget: &Budget) -> Self {
        Self {
            user_id: budget.user_id.clone(),
            budget_amount: RawAmount::from(budget.amount),
            month_year: budget.month.to_string(),
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budget: {}", self.month, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_record() {
        let record: BudgetRecord = serde_json::from_value(json!({
            "userId": "u1",
            "budgetAmount": 40000,
            "monthYear": "2024-03"
        }))
        .unwrap();

        let budget = Budget::from_record(&record).unwrap();
        assert_eq!(budget.amount, Money::from_units(40_000));
        assert_eq!(budget.month, MonthPeriod::new(2024, 3).unwrap());
        assert_eq!(BudgetRecord::from(&budget), record);
    }

    #[test]
    fn test_bad_month_key_is_malformed() {
        let record = BudgetRecord {
            user_id: "u1".into(),
            budget_amount: RawAmount::Text("100".into()),
            month_year: "March".into(),
        };
        assert!(Budget::from_record(&record)
            .unwrap_err()
            .is_malformed_record());
    }

    #[test]
    fn test_negative_amount_is_malformed() {
        let record = BudgetRecord {
            user_id: "u1".into(),
            budget_amount: RawAmount::Text("-100".into()),
            month_year: "2024-03".into(),
        };
        let err = Budget::from_record(&record).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed budget record: amount is negative: -100"
        );
    }

    #[test]
    fn test_missing_budget_is_zero() {
        assert_eq!(Budget::amount_or_zero(None), Money::zero());
        let budget = Budget::new("u1", Money::from_units(10), MonthPeriod::current());
        assert_eq!(Budget::amount_or_zero(Some(&budget)), Money::from_units(10));
    }
}
