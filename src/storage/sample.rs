//! Built-in demonstration data
//!
//! Any user id resolves to the same account holder with twelve months of
//! salary and expenses ending at the anchor month, plus a monthly budget of
//! 40,000. Used when no data files are configured.

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};

use crate::error::HisaabResult;
use crate::models::{BudgetRecord, Money, MonthPeriod, RawAmount, TransactionRecord, User};

use super::StatementSource;

/// User id written by `hisaab init --sample`
pub const SAMPLE_USER_ID: &str = "hasnat";

const SAMPLE_BUDGET: i64 = 40_000;

/// (received, spent) per month, most recent first
const MONTHLY_FIGURES: [(i64, i64); 12] = [
    (50_000, 42_000),
    (45_000, 38_000),
    (52_000, 41_000),
    (48_000, 35_000),
    (47_000, 39_000),
    (51_000, 44_000),
    (49_000, 37_000),
    (53_000, 46_000),
    (46_000, 34_000),
    (48_000, 40_000),
    (50_000, 43_000),
    (45_000, 36_000),
];

/// Statement source serving the demonstration fixture
#[derive(Debug, Clone, Default)]
pub struct SampleStatementSource {
    anchor: Option<NaiveDate>,
}

impl SampleStatementSource {
    /// Fixture anchored at `anchor`; `None` anchors at today's date on each call
    pub fn new(anchor: Option<NaiveDate>) -> Self {
        Self { anchor }
    }

    pub fn anchored_at(anchor: NaiveDate) -> Self {
        Self::new(Some(anchor))
    }

    fn anchor(&self) -> NaiveDate {
        self.anchor.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn user(user_id: &str) -> User {
        User {
            id: user_id.to_string(),
            full_name: "Hasnat Ashraf".to_string(),
            account_number: "+92 324 9536391".to_string(),
            username: Some("hasnat".to_string()),
        }
    }

    /// One salary and one expense record per month for the twelve months
    /// ending at the anchor month
    ///
    /// Each record falls on the anchor's day of month, clamped to the last
    /// day of shorter months.
    pub fn transactions(&self, user_id: &str) -> Vec<TransactionRecord> {
        let anchor = self.anchor();
        let current = MonthPeriod::containing(anchor);

        let mut records = Vec::with_capacity(MONTHLY_FIGURES.len() * 2);
        let months = current.trailing(MONTHLY_FIGURES.len());
        for (month, (received, spent)) in months.into_iter().zip(MONTHLY_FIGURES) {
            let date = same_day_in(month, anchor.day())
                .format("%Y-%m-%d")
                .to_string();

            records.push(TransactionRecord {
                user_id: user_id.to_string(),
                amount: RawAmount::from(Money::from_units(received)),
                kind: "income".to_string(),
                description: "Monthly Salary".to_string(),
                category: "Salary".to_string(),
                date: date.clone(),
            });
            records.push(TransactionRecord {
                user_id: user_id.to_string(),
                amount: RawAmount::from(Money::from_units(spent)),
                kind: "expense".to_string(),
                description: "Monthly Expenses".to_string(),
                category: "General".to_string(),
                date,
            });
        }
        records
    }

    pub fn budget(user_id: &str, month: MonthPeriod) -> BudgetRecord {
        BudgetRecord {
            user_id: user_id.to_string(),
            budget_amount: RawAmount::from(Money::from_units(SAMPLE_BUDGET)),
            month_year: month.to_string(),
        }
    }
}

fn same_day_in(month: MonthPeriod, day: u32) -> NaiveDate {
    let last = month.end_date();
    month.start_date().with_day(day.min(last.day())).unwrap_or(last)
}

#[async_trait]
impl StatementSource for SampleStatementSource {
    async fn get_user(&self, user_id: &str) -> HisaabResult<Option<User>> {
        Ok(Some(Self::user(user_id)))
    }

    async fn get_transactions(&self, user_id: &str) -> HisaabResult<Vec<TransactionRecord>> {
        Ok(self.transactions(user_id))
    }

    async fn get_budget(
        &self,
        user_id: &str,
        month: MonthPeriod,
    ) -> HisaabResult<Option<BudgetRecord>> {
        Ok(Some(Self::budget(user_id, month)))
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_transactions_span_twelve_months() {
        let source = SampleStatementSource::anchored_at(date(2024, 3, 15));
        let records = source.transactions("u1");
        assert_eq!(records.len(), 24);

        let transactions = Transaction::from_records(&records).unwrap();
        assert_eq!(transactions[0].date, date(2024, 3, 15));
        assert_eq!(transactions[0].amount, Money::from_units(50_000));
        assert!(transactions[0].is_income());
        assert!(transactions[1].is_expense());
        assert_eq!(transactions[23].date, date(2023, 4, 15));
        assert_eq!(transactions[23].amount, Money::from_units(36_000));
    }

    #[test]
    fn test_day_is_clamped_to_month_end() {
        let source = SampleStatementSource::anchored_at(date(2024, 3, 31));
        let transactions = Transaction::from_records(&source.transactions("u1")).unwrap();

        // Feb 2024 has 29 days
        assert_eq!(transactions[2].date, date(2024, 2, 29));
        assert_eq!(transactions[4].date, date(2024, 1, 31));
    }

    #[tokio::test]
    async fn test_resolves_any_user() {
        let source = SampleStatementSource::anchored_at(date(2024, 3, 15));

        let user = source.get_user("anyone").await.unwrap().unwrap();
        assert_eq!(user.id, "anyone");
        assert_eq!(user.full_name, "Hasnat Ashraf");

        let month = MonthPeriod::new(2024, 3).unwrap();
        let budget = source.get_budget("anyone", month).await.unwrap().unwrap();
        assert_eq!(budget.month_year, "2024-03");
        assert_eq!(source.name(), "sample");
    }
}
