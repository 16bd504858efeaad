//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod serve;
pub mod statement;

pub use serve::{handle_serve_command, ServeArgs};
pub use statement::{handle_statement_command, StatementArgs, StatementFormat};
