//! Storage layer for Hisaab
//!
//! A [`StatementSource`] resolves the three inputs of a statement: the user,
//! their transactions and the budget for a month. Implementations always
//! return resolved values, so nothing downstream knows whether records came
//! from files or from the demonstration fixture.

pub mod file_io;
pub mod files;
pub mod init;
pub mod sample;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::config::paths::HisaabPaths;
use crate::config::settings::{DataSource, Settings};
use crate::error::HisaabResult;
use crate::models::{BudgetRecord, MonthPeriod, TransactionRecord, User};

pub use file_io::{read_json_async, write_json_atomic};
pub use files::{BudgetData, FileStatementSource, TransactionData, UserData};
pub use init::initialize_storage;
pub use sample::{SampleStatementSource, SAMPLE_USER_ID};

/// Provider of the raw records a statement is computed from
#[async_trait]
pub trait StatementSource: Send + Sync {
    /// The user with this id, if any
    async fn get_user(&self, user_id: &str) -> HisaabResult<Option<User>>;

    /// All of the user's transactions, in no particular order
    async fn get_transactions(&self, user_id: &str) -> HisaabResult<Vec<TransactionRecord>>;

    /// The user's budget for `month`, if one was set
    async fn get_budget(
        &self,
        user_id: &str,
        month: MonthPeriod,
    ) -> HisaabResult<Option<BudgetRecord>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Pick the configured source
///
/// `force_sample` overrides the settings (the `--sample` flag); a sample
/// source is anchored at `sample_anchor` or at today's date.
pub fn open_source(
    settings: &Settings,
    paths: &HisaabPaths,
    force_sample: bool,
    sample_anchor: Option<NaiveDate>,
) -> Arc<dyn StatementSource> {
    if force_sample || settings.data_source == DataSource::Sample {
        Arc::new(SampleStatementSource::new(sample_anchor))
    } else {
        Arc::new(FileStatementSource::new(paths.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_source() {
        let paths = HisaabPaths::with_base_dir("/tmp/hisaab-test");
        let mut settings = Settings::default();

        assert_eq!(open_source(&settings, &paths, false, None).name(), "files");
        assert_eq!(open_source(&settings, &paths, true, None).name(), "sample");

        settings.data_source = DataSource::Sample;
        assert_eq!(open_source(&settings, &paths, false, None).name(), "sample");
    }
}
