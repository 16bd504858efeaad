//! YAML Export functionality
//!
//! Writes the same document as the JSON export in a human-readable form.

use crate::error::{HisaabError, HisaabResult};
use crate::export::json::StatementDocument;
use crate::reports::StatementReport;
use std::io::Write;

/// Export the statement document as YAML
pub fn export_statement_yaml<W: Write>(
    report: &StatementReport,
    writer: &mut W,
) -> HisaabResult<()> {
    let document = StatementDocument::from(report);

    writeln!(writer, "# Account statement for {}", report.period)
        .map_err(|e| HisaabError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &document).map_err(|e| HisaabError::Export(e.to_string()))?;

    Ok(())
}
