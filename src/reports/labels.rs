//! Date labels printed on a statement

use chrono::{Datelike, NaiveDate};

use crate::models::MonthPeriod;

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// "21st Mar"
fn day_month(date: NaiveDate) -> String {
    format!(
        "{}{} {}",
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%b")
    )
}

/// "15th Mar 2024"
pub fn issue_date_label(date: NaiveDate) -> String {
    format!("{} {}", day_month(date), date.year())
}

/// "1st Mar - 31st Mar 2024"
pub fn period_label(period: &MonthPeriod) -> String {
    format!(
        "{} - {}",
        day_month(period.start_date()),
        issue_date_label(period.end_date())
    )
}
