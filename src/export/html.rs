//! HTML statement rendering
//!
//! Produces a self-contained, printable document from a computed
//! [`StatementReport`]. Nothing is recomputed here: figures are only
//! formatted, and `budget_status` picks the colour of the status card.

use std::fmt::Write as _;
use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{HisaabError, HisaabResult};
use crate::models::Money;
use crate::reports::StatementReport;

const STYLES: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: Arial, sans-serif; background: #f8fafc; color: #334155; line-height: 1.5; }
        .container { max-width: 800px; margin: 0 auto; background: white; min-height: 100vh; }
        .header { text-align: center; padding: 32px; border-bottom: 1px solid #e2e8f0; }
        .logo { display: inline-flex; align-items: center; gap: 8px; margin-bottom: 16px; }
        .logo-icon { width: 32px; height: 32px; background: #ff6b47; border-radius: 4px; color: white; font-weight: bold; font-size: 18px; display: flex; align-items: center; justify-content: center; }
        .logo-text { font-size: 24px; font-weight: bold; color: #1e293b; }
        .statement-title { font-size: 20px; font-weight: 600; color: #1e293b; margin-bottom: 24px; }
        .user-info { display: flex; justify-content: space-between; text-align: left; font-size: 14px; }
        .user-details h3 { font-weight: 600; color: #1e293b; margin-bottom: 4px; }
        .user-details p, .statement-info p { color: #64748b; }
        .statement-info { text-align: right; }
        .statement-info .value { color: #1e293b; font-weight: 500; }
        .content { padding: 32px; }
        .section { margin-bottom: 32px; }
        .section-title { font-size: 18px; font-weight: 600; color: #1e293b; margin-bottom: 16px; }
        .grid { display: grid; gap: 32px; grid-template-columns: 1fr 1fr; }
        .metric-cards { display: flex; flex-direction: column; gap: 16px; }
        .metric-card { padding: 16px; border-radius: 12px; border: 1px solid; }
        .metric-card.green { background: #f0fdf4; border-color: #bbf7d0; }
        .metric-card.blue { background: #eff6ff; border-color: #93c5fd; }
        .metric-card.orange { background: #fff7ed; border-color: #fed7aa; }
        .metric-card.red { background: #fef2f2; border-color: #fecaca; }
        .metric-card.purple { background: #faf5ff; border-color: #d8b4fe; }
        .metric-card.teal { background: #f0fdfa; border-color: #5eead4; }
        .metric-card .label { font-size: 14px; color: #64748b; margin-bottom: 2px; }
        .metric-card .value { font-size: 18px; font-weight: 600; color: #1e293b; }
        .overspent { color: #dc2626 !important; }
        .on-track { color: #16a34a !important; }
        .tip-section { background: #fff7ed; border: 1px solid #fed7aa; border-radius: 12px; padding: 24px; font-size: 14px; color: #374151; }
        .history-table { width: 100%; border-collapse: collapse; border: 1px solid #e2e8f0; font-size: 14px; }
        .history-table thead { background: #f8fafc; }
        .history-table th, .history-table td { padding: 12px 16px; text-align: left; }
        .history-table th { font-weight: 600; color: #1e293b; border-bottom: 1px solid #e2e8f0; }
        .history-table tbody tr:nth-child(even) { background: #f8fafc; }
        .text-right { text-align: right !important; }
        .text-green { color: #059669; font-weight: 500; }
        .text-red { color: #dc2626; font-weight: 500; }
        .footer { background: #1e293b; color: #9ca3af; padding: 24px 32px; font-size: 12px; }
        .footer strong { color: white; font-size: 16px; }
        @media print { body { background: white; } .container { min-height: auto; } }
"#;

/// Presentation settings for a rendered statement
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Prefix for every amount, e.g. "Rs"
    pub currency_symbol: String,
    /// Name shown in the header and footer
    pub brand_name: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for HtmlOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            brand_name: settings.brand_name.clone(),
        }
    }
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn metric_card(out: &mut String, colour: &str, label: &str, value: &str, value_class: &str) {
    let _ = write!(
        out,
        r#"
                        <div class="metric-card {colour}">
                            <div class="label">{label}</div>
                            <div class="value {value_class}">{value}</div>
                        </div>"#
    );
}

/// Render the statement as a complete HTML document
pub fn render_statement_html(report: &StatementReport, options: &HtmlOptions) -> String {
    let money = |m: Money| escape_html(&m.format_with_symbol(&options.currency_symbol));
    let brand = escape_html(&options.brand_name);
    let initial = escape_html(
        &options
            .brand_name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default(),
    );
    let (status_colour, status_class) = if report.budget_status.is_overspent() {
        ("red", "overspent")
    } else {
        ("green", "on-track")
    };

    let mut out = String::with_capacity(16 * 1024);

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{brand} - Account Statement</title>
    <style>{STYLES}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div class="logo">
                <div class="logo-icon">{initial}</div>
                <div class="logo-text">{brand}</div>
            </div>
            <div class="statement-title">Account Statement</div>
            <div class="user-info">
                <div class="user-details">
                    <h3>{name}</h3>
                    <p>Account Number: {account}</p>
                </div>
                <div class="statement-info">
                    <p>Statement Period</p>
                    <p class="value">{period}</p>
                    <p style="margin-top: 8px;">Date of Issue</p>
                    <p class="value">{issued}</p>
                </div>
            </div>
        </div>

        <div class="content">
            <div class="grid">
                <div class="section">
                    <div class="section-title">Budget Breakdown</div>
                    <div class="metric-cards">"#,
        name = escape_html(&report.user_name),
        account = escape_html(&report.account_number),
        period = escape_html(&report.period_label),
        issued = escape_html(&report.issue_date_label),
    );

    metric_card(&mut out, "green", "Total Received", &money(report.total_received), "");
    metric_card(&mut out, "blue", "Total Spent", &money(report.total_spent), "");
    metric_card(&mut out, "orange", "Balance", &money(report.balance), "");

    out.push_str(
        r#"
                    </div>
                </div>

                <div class="section">
                    <div class="section-title">Budget Analysis</div>
                    <div class="metric-cards">"#,
    );

    metric_card(
        &mut out,
        status_colour,
        "Where do you stand",
        &report.budget_status.to_string(),
        status_class,
    );
    metric_card(&mut out, "purple", "Budget Set", &money(report.budget_amount), "");
    metric_card(
        &mut out,
        "teal",
        "Remaining Budget",
        &money(report.remaining_budget),
        "",
    );

    let _ = write!(
        out,
        r#"
                    </div>
                </div>
            </div>

            <div class="section">
                <div class="section-title">Personalised Tip</div>
                <div class="tip-section">{tip}</div>
            </div>

            <div class="section">
                <div class="section-title">Previous Months ({months})</div>
                <table class="history-table">
                    <thead>
                        <tr>
                            <th>Month</th>
                            <th class="text-right">Received</th>
                            <th class="text-right">Spent</th>
                            <th class="text-right">Balance</th>
                        </tr>
                    </thead>
                    <tbody>"#,
        tip = escape_html(&report.tip_text),
        months = report.monthly_history.len(),
    );

    for row in &report.monthly_history {
        let _ = write!(
            out,
            r#"
                        <tr>
                            <td>{}</td>
                            <td class="text-right text-green">{}</td>
                            <td class="text-right text-red">{}</td>
                            <td class="text-right">{}</td>
                        </tr>"#,
            escape_html(&row.month_label),
            money(row.total_received),
            money(row.total_spent),
            money(row.balance),
        );
    }

    let _ = write!(
        out,
        r#"
                    </tbody>
                </table>
            </div>
        </div>

        <div class="footer">
            <p><strong>{brand}</strong></p>
            <p>{brand} provides personal financial analytics, helping you navigate daily finances with precision.
               Receive real-time updates and holistic monthly reports.</p>
            <p style="margin-top: 16px;">Terms and Conditions &middot; Privacy Policy &middot; Code of Ethics</p>
        </div>
    </div>
</body>
</html>
"#
    );

    out
}

/// Write the rendered statement to `writer`
pub fn export_statement_html<W: Write>(
    report: &StatementReport,
    options: &HtmlOptions,
    writer: &mut W,
) -> HisaabResult<()> {
    writer
        .write_all(render_statement_html(report, options).as_bytes())
        .map_err(|e| HisaabError::Export(e.to_string()))
}
