//! Calendar date parsing, formatting and interval arithmetic.
//!
//! Dates are plain calendar dates with no time-of-day. Date-time inputs are
//! normalized to UTC before their date component is taken, so the local
//! timezone never shifts a value by a day.
//!
//! Month and year shifts clamp to the end of the target month:
//! - `2026-01-31 + 1 month` -> `2026-02-28`
//! - `2024-02-29 + 1 year` -> `2025-02-28`

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-time layouts with an offset, extended (`+02:00`) or basic (`+0200`).
/// A trailing `Z` is rewritten to `+00:00` before these are tried.
const ZONED_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Date-time layouts without an offset. These are read as UTC.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

static PLAIN_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Units for interval offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Days,
    Weeks,
    Months,
    Years,
}

impl Unit {
    /// Parse one of the eight accepted unit spellings.
    ///
    /// Only the exact lowercase singular and plural forms are recognized.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "day" | "days" => Some(Unit::Days),
            "week" | "weeks" => Some(Unit::Weeks),
            "month" | "months" => Some(Unit::Months),
            "year" | "years" => Some(Unit::Years),
            _ => None,
        }
    }

    /// Spelling of the unit for a given amount (`1 day`, `2 days`).
    #[must_use]
    pub fn keyword(self, amount: u32) -> &'static str {
        match (self, amount == 1) {
            (Unit::Days, true) => "day",
            (Unit::Days, false) => "days",
            (Unit::Weeks, true) => "week",
            (Unit::Weeks, false) => "weeks",
            (Unit::Months, true) => "month",
            (Unit::Months, false) => "months",
            (Unit::Years, true) => "year",
            (Unit::Years, false) => "years",
        }
    }
}

/// Direction of an interval offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            _ => None,
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or an ISO 8601 date-time.
///
/// The plain form must survive a format round trip unchanged, which rejects
/// impossible dates such as `2026-02-30` or `2026-13-01`.
///
/// Date-time input is converted to UTC and only its date is kept. That path
/// skips the round-trip check and relies on chrono's own validation.
#[must_use]
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    if PLAIN_DATE.is_match(text) {
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT).ok()?;
        return (format_calendar_date(date) == text).then_some(date);
    }
    parse_date_time(text)
}

fn parse_date_time(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    let zoned = match text.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{local}+00:00"),
        None => text.to_string(),
    };
    let with_offset = ZONED_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&zoned, fmt).ok());
    if let Some(dt) = with_offset {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

/// Format a date as zero-padded `YYYY-MM-DD`.
#[must_use]
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Apply `amount` units to `date`, negated when subtracting.
///
/// Returns `None` only if the result falls outside the representable date
/// range.
#[must_use]
pub fn apply_interval(
    date: NaiveDate,
    amount: u32,
    unit: Unit,
    op: Operator,
) -> Option<NaiveDate> {
    let amount = match op {
        Operator::Add => i64::from(amount),
        Operator::Subtract => -i64::from(amount),
    };

    match unit {
        Unit::Days => date.checked_add_signed(Duration::try_days(amount)?),
        Unit::Weeks => date.checked_add_signed(Duration::try_weeks(amount)?),
        Unit::Months => add_months(date, amount),
        Unit::Years => add_months(date, amount.checked_mul(12)?),
    }
}

fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let total_months = i64::from(date.year()) * 12 + i64::from(date.month0()) + months;
    let new_year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let new_month = u32::try_from(total_months.rem_euclid(12)).ok()? + 1;

    // Handle day overflow (e.g., Jan 31 + 1 month = Feb 28/29)
    let new_day = date.day().min(days_in_month(new_year, new_month));

    NaiveDate::from_ymd_opt(new_year, new_month, new_day)
}

/// Number of days in `month` (1-12) of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
