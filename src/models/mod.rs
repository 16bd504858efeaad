//! Core data models for Hisaab
//!
//! This module contains the data structures a statement is computed from:
//! users, transactions, monthly budgets, money and calendar months.

pub mod budget;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use budget::{Budget, BudgetRecord};
pub use money::Money;
pub use period::MonthPeriod;
pub use transaction::{RawAmount, Transaction, TransactionKind, TransactionRecord};
pub use user::User;
