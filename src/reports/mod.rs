//! Reports module for Hisaab
//!
//! Computes the monthly account statement: period totals, budget analysis,
//! the personalised tip and the rolling twelve month history.

pub mod labels;
pub mod statement;
pub mod tip;

pub use statement::{
    compute_statement, compute_statement_from_records, BudgetStatus, MonthBucket, MonthTotals,
    StatementReport, HISTORY_MONTHS,
};
pub use tip::{Tip, TipInputs};
