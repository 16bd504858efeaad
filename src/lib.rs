//! Hisaab - monthly account statements
//!
//! This library computes a personal-finance statement for one calendar month
//! from a user's transactions and monthly budget, and renders it as HTML,
//! JSON, CSV, YAML or terminal text.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, transactions, budgets, money, months)
//! - `reports`: Statement computation
//! - `export`: Statement renderers
//! - `storage`: Statement sources (JSON files and sample data)
//! - `services`: Fetch-then-compute orchestration
//! - `api`: HTTP endpoints
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use hisaab::models::{Money, Transaction, User};
//! use hisaab::reports::compute_statement;
//!
//! let user = User::new("u1", "Hasnat Ashraf", "+92 324 9536391");
//! let txns = vec![Transaction::income("u1", Money::from_units(50_000), as_of)];
//! let report = compute_statement(Some(&user), &txns, None, as_of)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{HisaabError, HisaabResult};
