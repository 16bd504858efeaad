//! JSON-file statement source
//!
//! Reads the three collections under the data directory on every request,
//! so edits to the files are picked up without restarting the server.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::paths::HisaabPaths;
use crate::error::{HisaabError, HisaabResult};
use crate::models::{BudgetRecord, MonthPeriod, TransactionRecord, User};

use super::file_io::{read_json_async, write_json_atomic};
use super::StatementSource;

/// Contents of users.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Contents of transactions.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// Contents of budgets.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetData {
    #[serde(default)]
    pub budgets: Vec<BudgetRecord>,
}

/// transactions.json as stored, one untyped value per record
#[derive(Debug, Default, Deserialize)]
struct StoredTransactions {
    #[serde(default)]
    transactions: Vec<Value>,
}

/// budgets.json as stored, one untyped value per record
#[derive(Debug, Default, Deserialize)]
struct StoredBudgets {
    #[serde(default)]
    budgets: Vec<Value>,
}

fn text_field<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

/// Convert one stored record, reporting a shape mismatch through `malformed`
fn decode_record<T, F>(record: Value, malformed: F) -> HisaabResult<T>
where
    T: DeserializeOwned,
    F: FnOnce(String) -> HisaabError,
{
    serde_json::from_value(record).map_err(|e| malformed(e.to_string()))
}

/// Statement source backed by `users.json`, `transactions.json` and `budgets.json`
#[derive(Debug, Clone)]
pub struct FileStatementSource {
    paths: HisaabPaths,
}

impl FileStatementSource {
    pub fn new(paths: HisaabPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &HisaabPaths {
        &self.paths
    }

    /// Write all three collections, replacing any existing files
    pub fn save_all(
        &self,
        users: &UserData,
        transactions: &TransactionData,
        budgets: &BudgetData,
    ) -> HisaabResult<()> {
        write_json_atomic(self.paths.users_file(), users)?;
        write_json_atomic(self.paths.transactions_file(), transactions)?;
        write_json_atomic(self.paths.budgets_file(), budgets)?;
        Ok(())
    }
}

#[async_trait]
impl StatementSource for FileStatementSource {
    async fn get_user(&self, user_id: &str) -> HisaabResult<Option<User>> {
        let data: UserData = read_json_async(self.paths.users_file()).await?;
        Ok(data.users.into_iter().find(|u| u.id == user_id))
    }

    async fn get_transactions(&self, user_id: &str) -> HisaabResult<Vec<TransactionRecord>> {
        let data: StoredTransactions = read_json_async(self.paths.transactions_file()).await?;
        let records = data
            .transactions
            .into_iter()
            .filter(|t| text_field(t, "userId") == Some(user_id))
            .map(|t| decode_record(t, |e| HisaabError::malformed_transaction(e)))
            .collect::<HisaabResult<Vec<TransactionRecord>>>()?;

        tracing::debug!(user_id, count = records.len(), "loaded transactions");
        Ok(records)
    }

    async fn get_budget(
        &self,
        user_id: &str,
        month: MonthPeriod,
    ) -> HisaabResult<Option<BudgetRecord>> {
        let data: StoredBudgets = read_json_async(self.paths.budgets_file()).await?;
        let key = month.to_string();
        data.budgets
            .into_iter()
            .find(|b| {
                text_field(b, "userId") == Some(user_id)
                    && text_field(b, "monthYear").map(str::trim) == Some(key.as_str())
            })
            .map(|b| decode_record(b, |e| HisaabError::malformed_budget(e)))
            .transpose()
    }

    fn name(&self) -> &'static str {
        "files"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RawAmount};
    use tempfile::TempDir;

    fn txn(user_id: &str, amount: i64, kind: &str, date: &str) -> TransactionRecord {
        TransactionRecord {
            user_id: user_id.into(),
            amount: RawAmount::from(Money::from_units(amount)),
            kind: kind.into(),
            description: String::new(),
            category: String::new(),
            date: date.into(),
        }
    }

    fn budget(user_id: &str, amount: i64, month_year: &str) -> BudgetRecord {
        BudgetRecord {
            user_id: user_id.into(),
            budget_amount: RawAmount::from(Money::from_units(amount)),
            month_year: month_year.into(),
        }
    }

    fn seeded_source() -> (TempDir, FileStatementSource) {
        let temp_dir = TempDir::new().unwrap();
        let source = FileStatementSource::new(HisaabPaths::with_base_dir(temp_dir.path()));

        source
            .save_all(
                &UserData {
                    users: vec![User::new("u1", "Ayesha Khan", "0300 1234567")],
                },
                &TransactionData {
                    transactions: vec![
                        txn("u1", 50_000, "income", "2024-03-01"),
                        txn("u2", 1_000, "expense", "2024-03-02"),
                        txn("u1", 42_000, "expense", "2024-03-10"),
                    ],
                },
                &BudgetData {
                    budgets: vec![
                        budget("u1", 35_000, "2024-02"),
                        budget("u1", 40_000, "2024-03"),
                        budget("u2", 10_000, "2024-03"),
                    ],
                },
            )
            .unwrap();

        (temp_dir, source)
    }

    #[tokio::test]
    async fn test_get_user() {
        let (_dir, source) = seeded_source();

        let user = source.get_user("u1").await.unwrap().unwrap();
        assert_eq!(user.full_name, "Ayesha Khan");
        assert!(source.get_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_transactions_filtered_by_user() {
        let (_dir, source) = seeded_source();

        let records = source.get_transactions("u1").await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.user_id == "u1"));
    }

    #[tokio::test]
    async fn test_budget_matched_by_month() {
        let (_dir, source) = seeded_source();
        let march = MonthPeriod::new(2024, 3).unwrap();

        let record = source.get_budget("u1", march).await.unwrap().unwrap();
        assert_eq!(record.month_year, "2024-03");
        assert_eq!(
            record.budget_amount.to_money().unwrap(),
            Money::from_units(40_000)
        );

        let april = MonthPeriod::new(2024, 4).unwrap();
        assert!(source.get_budget("u1", april).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_files_read_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileStatementSource::new(HisaabPaths::with_base_dir(temp_dir.path()));

        assert!(source.get_user("u1").await.unwrap().is_none());
        assert!(source.get_transactions("u1").await.unwrap().is_empty());
        let month = MonthPeriod::new(2024, 3).unwrap();
        assert!(source.get_budget("u1", month).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let (_dir, source) = seeded_source();
        std::fs::write(source.paths().users_file(), "[").unwrap();

        let err = source.get_user("u1").await.unwrap_err();
        assert!(matches!(err, HisaabError::Storage(_)));
    }

    #[tokio::test]
    async fn test_bad_transaction_only_affects_its_owner() {
        let (_dir, source) = seeded_source();
        let transactions = serde_json::json!({"transactions": [
            {"userId": "u1", "amount": 500, "type": "income", "date": "2024-03-01"},
            {"userId": "u2", "amount": null, "type": "expense", "date": "2024-03-02"},
            {"userId": "u3", "amount": true, "type": "expense", "date": 20240302},
            {"userId": "u4", "type": "expense"}
        ]});
        std::fs::write(source.paths().transactions_file(), transactions.to_string()).unwrap();

        assert_eq!(source.get_transactions("u1").await.unwrap().len(), 1);
        for user_id in ["u2", "u3", "u4"] {
            let err = source.get_transactions(user_id).await.unwrap_err();
            assert!(err.is_malformed_record(), "{}: {}", user_id, err);
        }
    }

    #[tokio::test]
    async fn test_bad_budget_is_malformed() {
        let (_dir, source) = seeded_source();
        let budgets = serde_json::json!({"budgets": [
            {"userId": "u1", "budgetAmount": 40000, "monthYear": "2024-03"},
            {"userId": "u2", "budgetAmount": null, "monthYear": "2024-03"}
        ]});
        std::fs::write(source.paths().budgets_file(), budgets.to_string()).unwrap();
        let march = MonthPeriod::new(2024, 3).unwrap();

        assert!(source.get_budget("u1", march).await.unwrap().is_some());
        let err = source.get_budget("u2", march).await.unwrap_err();
        assert!(err.is_malformed_record());
    }

    #[test]
    fn test_collection_file_shape() {
        let json = r#"{"users": [{"_id": "u9", "fullName": "Bilal", "accountNumber": "42"}]}"#;
        let data: UserData = serde_json::from_str(json).unwrap();
        assert_eq!(data.users[0].id, "u9");

        let empty: TransactionData = serde_json::from_str("{}").unwrap();
        assert!(empty.transactions.is_empty());
    }
}
