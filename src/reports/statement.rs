//! Account Statement
//!
//! Turns a user's transactions and the month's budget into the figures
//! printed on a monthly statement: current-month totals, budget analysis,
//! a personalised tip and a twelve month history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::labels::{issue_date_label, period_label};
use super::tip::{Tip, TipInputs};
use crate::error::{HisaabError, HisaabResult};
use crate::models::{
    Budget, BudgetRecord, Money, MonthPeriod, Transaction, TransactionKind, TransactionRecord,
    User,
};

/// Number of months in the statement history, current month included
pub const HISTORY_MONTHS: usize = 12;

/// Where spending stands against the month's budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Overspent")]
    Overspent,
}

impl BudgetStatus {
    /// Overspent only when spending is strictly above the budget
    pub fn classify(spent: Money, budget: Money) -> Self {
        if spent > budget {
            Self::Overspent
        } else {
            Self::OnTrack
        }
    }

    pub fn is_overspent(&self) -> bool {
        matches!(self, Self::Overspent)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On Track"),
            Self::Overspent => write!(f, "Overspent"),
        }
    }
}

/// Income and spending inside one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotals {
    pub period: MonthPeriod,
    pub total_received: Money,
    pub total_spent: Money,
}

impl MonthTotals {
    /// Sum the transactions dated inside `period`
    ///
    /// Fails if a total no longer fits in a [`Money`].
    pub fn collect(period: MonthPeriod, transactions: &[Transaction]) -> HisaabResult<Self> {
        let mut total_received = Money::zero();
        let mut total_spent = Money::zero();

        for txn in transactions.iter().filter(|t| period.contains(t.date)) {
            let total = match txn.kind {
                TransactionKind::Income => &mut total_received,
                TransactionKind::Expense => &mut total_spent,
            };
            *total = total.checked_add(txn.amount).ok_or_else(|| {
                HisaabError::malformed_transaction(format!(
                    "amount out of range: {} {} total for {} exceeds the largest supported amount",
                    txn.amount, txn.kind, period
                ))
            })?;
        }

        Ok(Self {
            period,
            total_received,
            total_spent,
        })
    }

    /// Received minus spent
    ///
    /// Both totals are non-negative, so the difference always fits.
    pub fn balance(&self) -> Money {
        self.total_received - self.total_spent
    }
}

/// One row of the statement history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    /// The month this row covers
    pub period: MonthPeriod,
    /// "Mar 2024"
    pub month_label: String,
    pub total_received: Money,
    pub total_spent: Money,
    pub balance: Money,
}

impl From<MonthTotals> for MonthBucket {
    fn from(totals: MonthTotals) -> Self {
        Self {
            month_label: totals.period.label(),
            balance: totals.balance(),
            period: totals.period,
            total_received: totals.total_received,
            total_spent: totals.total_spent,
        }
    }
}

/// A computed monthly statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementReport {
    /// Account holder's name
    pub user_name: String,
    /// Account holder's account number
    pub account_number: String,
    /// The statement month
    pub period: MonthPeriod,
    /// "1st Mar - 31st Mar 2024"
    pub period_label: String,
    /// "15th Mar 2024"
    pub issue_date_label: String,
    /// Income in the statement month
    pub total_received: Money,
    /// Spending in the statement month
    pub total_spent: Money,
    /// Received minus spent (may be negative)
    pub balance: Money,
    /// Spending against budget
    pub budget_status: BudgetStatus,
    /// Budget for the statement month (zero when none was set)
    pub budget_amount: Money,
    /// Budget left, never below zero
    pub remaining_budget: Money,
    /// Which tip was selected
    pub tip: Tip,
    /// Text of the selected tip
    pub tip_text: String,
    /// Twelve months, most recent first
    pub monthly_history: Vec<MonthBucket>,
}

impl StatementReport {
    /// Compute the statement for the month containing `as_of`
    ///
    /// `transactions` need not be sorted and may include transactions outside
    /// the history window; those are ignored. A missing budget counts as zero.
    pub fn generate(
        user: Option<&User>,
        transactions: &[Transaction],
        budget: Option<&Budget>,
        as_of: NaiveDate,
    ) -> HisaabResult<Self> {
        let user = user.ok_or_else(|| HisaabError::user_not_found("<missing>"))?;

        let period = MonthPeriod::containing(as_of);
        let current = MonthTotals::collect(period, transactions)?;

        let monthly_history = period
            .trailing(HISTORY_MONTHS)
            .into_iter()
            .map(|month| MonthTotals::collect(month, transactions).map(MonthBucket::from))
            .collect::<HisaabResult<Vec<MonthBucket>>>()?;

        let budget_amount = Budget::amount_or_zero(budget);
        let budget_status = BudgetStatus::classify(current.total_spent, budget_amount);

        let monthly_spent: Vec<Money> = monthly_history.iter().map(|m| m.total_spent).collect();
        let tip_inputs = TipInputs {
            spent: current.total_spent,
            budget: budget_amount,
            monthly_spent: &monthly_spent,
        };
        let tip = Tip::select(&tip_inputs);
        let remaining_budget = tip_inputs.remaining_unfloored().floor_zero();

        tracing::debug!(
            user_id = %user.id,
            period = %period,
            transactions = transactions.len(),
            status = %budget_status,
            tip = ?tip,
            "computed statement"
        );

        Ok(Self {
            user_name: user.full_name.clone(),
            account_number: user.account_number.clone(),
            period,
            period_label: period_label(&period),
            issue_date_label: issue_date_label(as_of),
            total_received: current.total_received,
            total_spent: current.total_spent,
            balance: current.balance(),
            budget_status,
            budget_amount,
            remaining_budget,
            tip,
            tip_text: tip.text().to_string(),
            monthly_history,
        })
    }

    /// Validate raw records, then compute the statement
    ///
    /// Any malformed transaction or budget aborts the whole computation.
    pub fn generate_from_records(
        user: Option<&User>,
        records: &[TransactionRecord],
        budget: Option<&BudgetRecord>,
        as_of: NaiveDate,
    ) -> HisaabResult<Self> {
        let transactions = Transaction::from_records(records)?;
        let budget = budget.map(Budget::from_record).transpose()?;
        Self::generate(user, &transactions, budget.as_ref(), as_of)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str("Account Statement\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("{}\n", self.user_name));
        output.push_str(&format!("Account Number: {}\n", self.account_number));
        output.push_str(&format!("Statement Period: {}\n", self.period_label));
        output.push_str(&format!("Date of Issue: {}\n\n", self.issue_date_label));

        output.push_str("Budget Breakdown\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<30} {:>20}\n", "Total Received", money(self.total_received)));
        output.push_str(&format!("{:<30} {:>20}\n", "Total Spent", money(self.total_spent)));
        output.push_str(&format!("{:<30} {:>20}\n\n", "Balance", money(self.balance)));

        output.push_str("Budget Analysis\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<30} {:>20}\n", "Where do you stand", self.budget_status));
        output.push_str(&format!("{:<30} {:>20}\n", "Budget Set", money(self.budget_amount)));
        output.push_str(&format!(
            "{:<30} {:>20}\n\n",
            "Remaining Budget",
            money(self.remaining_budget)
        ));

        output.push_str(&format!("Tip: {}\n\n", self.tip_text));

        output.push_str(&format!("Previous Months ({})\n", self.monthly_history.len()));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>15} {:>15} {:>15}\n",
            "Month", "Received", "Spent", "Balance"
        ));
        for row in &self.monthly_history {
            output.push_str(&format!(
                "{:<12} {:>15} {:>15} {:>15}\n",
                row.month_label,
                money(row.total_received),
                money(row.total_spent),
                money(row.balance)
            ));
        }

        output
    }
}

/// Compute a statement; see [`StatementReport::generate`]
pub fn compute_statement(
    user: Option<&User>,
    transactions: &[Transaction],
    budget: Option<&Budget>,
    as_of: NaiveDate,
) -> HisaabResult<StatementReport> {
    StatementReport::generate(user, transactions, budget, as_of)
}

/// Validate raw records and compute a statement; see
/// [`StatementReport::generate_from_records`]
pub fn compute_statement_from_records(
    user: Option<&User>,
    records: &[TransactionRecord],
    budget: Option<&BudgetRecord>,
    as_of: NaiveDate,
) -> HisaabResult<StatementReport> {
    StatementReport::generate_from_records(user, records, budget, as_of)
}
