//! Custom error types for Hisaab
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Hisaab operations
#[derive(Error, Debug)]
pub enum HisaabError {
    /// No user record exists for the requested identifier
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    /// A transaction or budget record could not be interpreted
    #[error("Malformed {record} record: {reason}")]
    MalformedRecord {
        record: &'static str,
        reason: String,
    },

    /// Invalid user input (dates, formats, arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Failures while fetching records from a data source
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl HisaabError {
    /// Create a "user not found" error
    pub fn user_not_found(user_id: impl Into<String>) -> Self {
        Self::UserNotFound {
            user_id: user_id.into(),
        }
    }

    /// Create a malformed transaction record error
    pub fn malformed_transaction(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: "transaction",
            reason: reason.into(),
        }
    }

    /// Create a malformed budget record error
    pub fn malformed_budget(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: "budget",
            reason: reason.into(),
        }
    }

    /// Check if this is a "user not found" error
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }

    /// Check if this is a malformed record error
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

impl From<std::io::Error> for HisaabError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Hisaab operations
pub type HisaabResult<T> = Result<T, HisaabError>;
