//! Statement service
//!
//! Resolves the user, transactions and current-month budget from a
//! [`StatementSource`] and hands them to the statement computation.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::error::{HisaabError, HisaabResult};
use crate::models::MonthPeriod;
use crate::reports::StatementReport;
use crate::storage::StatementSource;

/// Service producing account statements
#[derive(Clone)]
pub struct StatementService {
    source: Arc<dyn StatementSource>,
}

impl StatementService {
    /// Create a new statement service
    pub fn new(source: Arc<dyn StatementSource>) -> Self {
        Self { source }
    }

    /// Statement for the current month
    pub async fn current_statement(&self, user_id: &str) -> HisaabResult<StatementReport> {
        self.statement_for(user_id, Local::now().date_naive()).await
    }

    /// Statement for the month containing `as_of`
    ///
    /// The three fetches run concurrently; computation starts only once all
    /// of them succeed.
    pub async fn statement_for(
        &self,
        user_id: &str,
        as_of: NaiveDate,
    ) -> HisaabResult<StatementReport> {
        let month = MonthPeriod::containing(as_of);

        tracing::debug!(user_id, month = %month, source = self.source.name(), "fetching statement inputs");

        let (user, records, budget) = tokio::try_join!(
            self.source.get_user(user_id),
            self.source.get_transactions(user_id),
            self.source.get_budget(user_id, month),
        )
        .map_err(|e| self.fetch_failure(e))?;

        let user = user.ok_or_else(|| HisaabError::user_not_found(user_id))?;

        let report =
            StatementReport::generate_from_records(Some(&user), &records, budget.as_ref(), as_of)?;

        tracing::info!(
            user_id,
            period = %report.period,
            status = %report.budget_status,
            transactions = records.len(),
            "generated statement"
        );

        Ok(report)
    }

    /// Bad records stay `MalformedRecord`; any other fetch error becomes `Storage`
    fn fetch_failure(&self, err: HisaabError) -> HisaabError {
        tracing::warn!(source = self.source.name(), error = %err, "failed to fetch statement inputs");
        match err {
            HisaabError::Storage(_) | HisaabError::MalformedRecord { .. } => err,
            other => HisaabError::Storage(format!("{} source: {}", self.source.name(), other)),
        }
    }
}
