//! User model

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier the data source keys records by
    #[serde(alias = "_id")]
    pub id: String,

    /// Name printed on the statement
    pub full_name: String,

    /// Account number printed on the statement
    pub account_number: String,

    /// Optional login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// Create a new user
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            account_number: account_number.into(),
            username: None,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.account_number)
    }
}
