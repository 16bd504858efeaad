//! Service layer for Hisaab
//!
//! Coordinates the storage layer and the statement computation.

pub mod statement;

pub use statement::StatementService;
