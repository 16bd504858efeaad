//! Storage initialization
//!
//! Handles first-run setup: directories, empty collections and, on request,
//! the demonstration data set.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::paths::HisaabPaths;
use crate::error::HisaabError;
use crate::models::MonthPeriod;

use super::file_io::write_json_atomic;
use super::files::{BudgetData, TransactionData, UserData};
use super::sample::{SampleStatementSource, SAMPLE_USER_ID};

/// Initialize storage for a fresh installation
///
/// Existing collection files are left untouched. With `sample_anchor` set,
/// missing collections are seeded with the demonstration data ending at that
/// date instead of being created empty. Returns the files written.
pub fn initialize_storage(
    paths: &HisaabPaths,
    sample_anchor: Option<NaiveDate>,
) -> Result<Vec<PathBuf>, HisaabError> {
    paths.ensure_directories()?;

    let (users, transactions, budgets) = match sample_anchor {
        Some(anchor) => sample_collections(anchor),
        None => Default::default(),
    };

    let mut written = Vec::new();

    if !paths.users_file().exists() {
        write_json_atomic(paths.users_file(), &users)?;
        written.push(paths.users_file());
    }
    if !paths.transactions_file().exists() {
        write_json_atomic(paths.transactions_file(), &transactions)?;
        written.push(paths.transactions_file());
    }
    if !paths.budgets_file().exists() {
        write_json_atomic(paths.budgets_file(), &budgets)?;
        written.push(paths.budgets_file());
    }

    tracing::info!(
        data_dir = %paths.data_dir().display(),
        files = written.len(),
        sample = sample_anchor.is_some(),
        "initialized storage"
    );

    Ok(written)
}

fn sample_collections(anchor: NaiveDate) -> (UserData, TransactionData, BudgetData) {
    let source = SampleStatementSource::anchored_at(anchor);
    let months = MonthPeriod::containing(anchor).trailing(12);

    (
        UserData {
            users: vec![SampleStatementSource::user(SAMPLE_USER_ID)],
        },
        TransactionData {
            transactions: source.transactions(SAMPLE_USER_ID),
        },
        BudgetData {
            budgets: months
                .into_iter()
                .map(|month| SampleStatementSource::budget(SAMPLE_USER_ID, month))
                .collect(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStatementSource, StatementSource};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HisaabPaths::with_base_dir(temp_dir.path());

        let written = initialize_storage(&paths, None).unwrap();
        assert_eq!(written.len(), 3);
        assert!(paths.users_file().exists());

        let source = FileStatementSource::new(paths);
        assert!(source.get_user(SAMPLE_USER_ID).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sample_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HisaabPaths::with_base_dir(temp_dir.path());
        let anchor = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        initialize_storage(&paths, Some(anchor)).unwrap();

        let source = FileStatementSource::new(paths);
        let user = source.get_user(SAMPLE_USER_ID).await.unwrap().unwrap();
        assert_eq!(user.full_name, "Hasnat Ashraf");
        assert_eq!(
            source.get_transactions(SAMPLE_USER_ID).await.unwrap().len(),
            24
        );
        let oldest = MonthPeriod::new(2023, 4).unwrap();
        assert!(source
            .get_budget(SAMPLE_USER_ID, oldest)
            .await
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_existing_files_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HisaabPaths::with_base_dir(temp_dir.path());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.users_file(), r#"{"users": []}"#).unwrap();

        let anchor = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let written = initialize_storage(&paths, Some(anchor)).unwrap();

        assert_eq!(written.len(), 2);
        assert!(!written.contains(&paths.users_file()));
        let users = std::fs::read_to_string(paths.users_file()).unwrap();
        assert_eq!(users, r#"{"users": []}"#);
    }
}
