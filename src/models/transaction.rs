//! Transaction model
//!
//! Transactions arrive from the data source as loosely-typed
//! [`TransactionRecord`]s and are validated into [`Transaction`] before any
//! aggregation happens. A bad amount or date aborts validation instead of
//! being skipped.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{HisaabError, HisaabResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received
    Income,
    /// Money spent
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = HisaabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(HisaabError::malformed_transaction(format!(
                "unknown transaction type '{}'",
                other
            ))),
        }
    }
}

/// An amount as stored by the data source: a JSON number or a decimal string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RawAmount {
    /// Parse into a non-negative [`Money`] amount
    pub fn to_money(&self) -> Result<Money, String> {
        let text = match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        };
        let amount = Money::parse(&text).map_err(|e| e.to_string())?;
        if amount.is_negative() {
            return Err(format!("amount is negative: {}", text));
        }
        Ok(amount)
    }
}

impl From<Money> for RawAmount {
    fn from(amount: Money) -> Self {
        if amount.is_whole() {
            Self::Number(serde_json::Number::from(amount.units()))
        } else {
            Self::Text(amount.to_string())
        }
    }
}

/// Parse a stored calendar timestamp into its calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date in the timestamp's own
/// offset is used) and offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`.
pub fn parse_record_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(format!("unparseable date '{}'", s))
}

/// A transaction exactly as the data source stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub user_id: String,
    pub amount: RawAmount,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub date: String,
}

/// A validated financial transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Owner of the transaction
    pub user_id: String,

    /// Amount (always non-negative; direction comes from `kind`)
    pub amount: Money,

    /// Income or expense
    pub kind: TransactionKind,

    /// Free-text description
    pub description: String,

    /// Spending/income category
    pub category: String,

    /// Calendar date of the transaction
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        user_id: impl Into<String>,
        kind: TransactionKind,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            amount,
            kind,
            description: String::new(),
            category: String::new(),
            date,
        }
    }

    /// Create an income transaction
    pub fn income(user_id: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(user_id, TransactionKind::Income, amount, date)
    }

    /// Create an expense transaction
    pub fn expense(user_id: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(user_id, TransactionKind::Expense, amount, date)
    }

    /// Attach a description and category
    pub fn with_details(
        mut self,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self.category = category.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate a stored record
    pub fn from_record(record: &TransactionRecord) -> HisaabResult<Self> {
        let amount = record
            .amount
            .to_money()
            .map_err(HisaabError::malformed_transaction)?;
        let kind = record.kind.parse()?;
        let date = parse_record_date(&record.date).map_err(HisaabError::malformed_transaction)?;

        Ok(Self {
            user_id: record.user_id.clone(),
            amount,
            kind,
            description: record.description.clone(),
            category: record.category.clone(),
            date,
        })
    }

    /// Validate a list of stored records, failing on the first bad one
    pub fn from_records(records: &[TransactionRecord]) -> HisaabResult<Vec<Self>> {
        records.iter().map(Self::from_record).collect()
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            user_id: txn.user_id.clone(),
            amount: RawAmount::from(txn.amount),
            kind: txn.kind.to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            date: txn.date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.description
        )
    }
}
