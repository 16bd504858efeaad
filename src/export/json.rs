//! JSON Export functionality
//!
//! Shapes a [`StatementReport`] into the document served by the statement
//! API. Amounts are plain JSON numbers in currency units.

use serde::{Serialize, Serializer};
use std::io::Write;

use crate::error::{HisaabError, HisaabResult};
use crate::models::Money;
use crate::reports::{BudgetStatus, StatementReport};

/// An amount written as a JSON number (integer when whole)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonAmount(pub Money);

impl Serialize for JsonAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_whole() {
            serializer.serialize_i64(self.0.units())
        } else {
            serializer.serialize_f64(self.0.to_f64())
        }
    }
}

impl From<Money> for JsonAmount {
    fn from(amount: Money) -> Self {
        Self(amount)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSection {
    pub name: String,
    pub account_number: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSection {
    pub period: String,
    pub issue_date: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSection {
    pub total_received: JsonAmount,
    pub total_spent: JsonAmount,
    pub balance: JsonAmount,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSection {
    pub status: BudgetStatus,
    pub budget_set: JsonAmount,
    pub remaining_budget: JsonAmount,
}

#[derive(Debug, Clone, Serialize)]
pub struct TipSection {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
    pub month: String,
    pub total_received: JsonAmount,
    pub total_spent: JsonAmount,
    pub balance: JsonAmount,
}

/// The statement document returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementDocument {
    pub user: UserSection,
    pub statement: StatementSection,
    pub budget: BudgetSection,
    pub analysis: AnalysisSection,
    pub tip: TipSection,
    pub monthly_history: Vec<MonthEntry>,
}

impl From<&StatementReport> for StatementDocument {
    fn from(report: &StatementReport) -> Self {
        Self {
            user: UserSection {
                name: report.user_name.clone(),
                account_number: report.account_number.clone(),
            },
            statement: StatementSection {
                period: report.period_label.clone(),
                issue_date: report.issue_date_label.clone(),
            },
            budget: BudgetSection {
                total_received: report.total_received.into(),
                total_spent: report.total_spent.into(),
                balance: report.balance.into(),
            },
            analysis: AnalysisSection {
                status: report.budget_status,
                budget_set: report.budget_amount.into(),
                remaining_budget: report.remaining_budget.into(),
            },
            tip: TipSection {
                content: report.tip_text.clone(),
            },
            monthly_history: report
                .monthly_history
                .iter()
                .map(|row| MonthEntry {
                    month: row.month_label.clone(),
                    total_received: row.total_received.into(),
                    total_spent: row.total_spent.into(),
                    balance: row.balance.into(),
                })
                .collect(),
        }
    }
}

/// Write the statement document as JSON
pub fn export_statement_json<W: Write>(
    report: &StatementReport,
    writer: &mut W,
    pretty: bool,
) -> HisaabResult<()> {
    let document = StatementDocument::from(report);

    if pretty {
        serde_json::to_writer_pretty(writer, &document)
    } else {
        serde_json::to_writer(writer, &document)
    }
    .map_err(|e| HisaabError::Export(e.to_string()))?;

    Ok(())
}
