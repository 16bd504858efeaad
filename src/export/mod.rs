//! Export module for Hisaab
//!
//! Renders a computed statement in several formats:
//! - HTML: the printable statement document
//! - JSON: the document served by the statement API
//! - CSV: the monthly history table (spreadsheet-compatible)
//! - YAML: the JSON document in a human-readable form

pub mod csv;
pub mod html;
pub mod json;
pub mod yaml;

pub use csv::export_history_csv;
pub use html::{escape_html, export_statement_html, render_statement_html, HtmlOptions};
pub use json::{export_statement_json, StatementDocument};
pub use yaml::export_statement_yaml;
