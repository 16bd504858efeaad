//! CLI command for account statements
//!
//! Computes a statement through the [`StatementService`] and prints or
//! exports it in the requested format.

use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::{HisaabPaths, Settings};
use crate::error::{HisaabError, HisaabResult};
use crate::export::{
    export_history_csv, export_statement_html, export_statement_json, export_statement_yaml,
    HtmlOptions,
};
use crate::reports::StatementReport;
use crate::services::StatementService;
use crate::storage::open_source;

/// Output format for a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatementFormat {
    /// Plain text for the terminal
    Text,
    /// The API's JSON document
    Json,
    /// Printable HTML document
    Html,
    /// Monthly history table
    Csv,
    /// The JSON document as YAML
    Yaml,
}

/// Arguments of `hisaab statement`
#[derive(Args, Debug)]
pub struct StatementArgs {
    /// User ID to produce the statement for
    pub user_id: String,

    /// Compute the statement as of this date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: StatementFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use the built-in sample data instead of the data files
    #[arg(long)]
    pub sample: bool,
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date_arg(value: &str) -> HisaabResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        HisaabError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", value))
    })
}

/// Handle `hisaab statement`
pub async fn handle_statement_command(
    paths: &HisaabPaths,
    settings: &Settings,
    args: StatementArgs,
) -> HisaabResult<()> {
    let as_of = match args.as_of.as_deref() {
        Some(value) => parse_date_arg(value)?,
        None => Local::now().date_naive(),
    };

    let source = open_source(settings, paths, args.sample, Some(as_of));
    let service = StatementService::new(source);
    let report = service.statement_for(&args.user_id, as_of).await?;

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                HisaabError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_statement(&report, args.format, settings, &mut writer)?;
            writer.flush().map_err(|e| HisaabError::Export(e.to_string()))?;
            println!("Statement written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_statement(&report, args.format, settings, &mut writer)?;
            writer.flush().map_err(|e| HisaabError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Render `report` in `format` into `writer`
pub fn write_statement<W: Write>(
    report: &StatementReport,
    format: StatementFormat,
    settings: &Settings,
    writer: &mut W,
) -> HisaabResult<()> {
    match format {
        StatementFormat::Text => {
            let text = report.format_terminal(&settings.currency_symbol);
            write!(writer, "{}", text).map_err(|e| HisaabError::Export(e.to_string()))
        }
        StatementFormat::Json => {
            export_statement_json(report, writer, true)?;
            writeln!(writer).map_err(|e| HisaabError::Export(e.to_string()))
        }
        StatementFormat::Html => {
            export_statement_html(report, &HtmlOptions::from(settings), writer)
        }
        StatementFormat::Csv => export_history_csv(report, writer),
        StatementFormat::Yaml => export_statement_yaml(report, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SampleStatementSource;
    use std::sync::Arc;

    async fn sample_report() -> StatementReport {
        let as_of = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let service =
            StatementService::new(Arc::new(SampleStatementSource::anchored_at(as_of)));
        service.statement_for("demo", as_of).await.unwrap()
    }

    fn render(report: &StatementReport, format: StatementFormat) -> String {
        let mut output = Vec::new();
        write_statement(report, format, &Settings::default(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(matches!(
            parse_date_arg("15/03/2024"),
            Err(HisaabError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_each_format() {
        let report = sample_report().await;

        assert!(render(&report, StatementFormat::Text).contains("Hasnat Ashraf"));
        assert!(render(&report, StatementFormat::Json).contains("\"accountNumber\""));
        assert!(render(&report, StatementFormat::Html).starts_with("<!DOCTYPE html>"));
        assert!(render(&report, StatementFormat::Csv).starts_with("Month,Period"));
        assert!(render(&report, StatementFormat::Yaml).starts_with("# Account statement"));
    }

    #[tokio::test]
    async fn test_output_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let output = temp_dir.path().join("statement.html");
        let paths = HisaabPaths::with_base_dir(temp_dir.path());

        handle_statement_command(
            &paths,
            &Settings::default(),
            StatementArgs {
                user_id: "demo".into(),
                as_of: Some("2024-03-15".into()),
                format: StatementFormat::Html,
                output: Some(output.clone()),
                sample: true,
            },
        )
        .await
        .unwrap();

        let html = std::fs::read_to_string(output).unwrap();
        assert!(html.contains("1st Mar - 31st Mar 2024"));
    }
}
