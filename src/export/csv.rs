//! CSV Export functionality
//!
//! Exports the monthly history table of a statement.

use crate::error::{HisaabError, HisaabResult};
use crate::reports::StatementReport;
use std::io::Write;

/// Export the twelve month history to CSV, most recent month first
pub fn export_history_csv<W: Write>(report: &StatementReport, writer: W) -> HisaabResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Month", "Period", "Received", "Spent", "Balance"])
        .map_err(|e| HisaabError::Export(e.to_string()))?;

    for row in &report.monthly_history {
        csv_writer
            .write_record([
                row.month_label.clone(),
                row.period.to_string(),
                row.total_received.to_string(),
                row.total_spent.to_string(),
                row.balance.to_string(),
            ])
            .map_err(|e| HisaabError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| HisaabError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, User};
    use crate::reports::compute_statement;
    use chrono::NaiveDate;

    #[test]
    fn test_history_csv() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let user = User::new("u1", "Test User", "001");
        let txns = vec![
            Transaction::income("u1", Money::from_units(1_000), date(2024, 1, 5)),
            Transaction::expense("u1", Money::from_cents(25_050), date(2023, 12, 31)),
        ];
        let report = compute_statement(Some(&user), &txns, None, date(2024, 1, 20)).unwrap();

        let mut output = Vec::new();
        export_history_csv(&report, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Month,Period,Received,Spent,Balance");
        assert_eq!(lines[1], "Jan 2024,2024-01,1000.00,0.00,1000.00");
        assert_eq!(lines[2], "Dec 2023,2023-12,0.00,250.50,-250.50");
        assert_eq!(lines[12], "Feb 2023,2023-02,0.00,0.00,0.00");
    }
}
