//! Typed variable values.

use std::fmt;

use chrono::NaiveDate;

use crate::datemath::{format_calendar_date, parse_calendar_date};

/// A resolved, typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Calendar date, no time-of-day.
    Date(NaiveDate),
    Number(f64),
    String(String),
}

impl Value {
    /// Infer the type of a raw caller-supplied string.
    ///
    /// Dates win over numbers, numbers over strings. A string is numeric when
    /// its trimmed form is non-empty and parses completely as a finite float.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        if let Some(date) = parse_calendar_date(raw) {
            return Value::Date(date);
        }

        let trimmed = raw.trim();
        if !trimmed.is_empty()
            && let Ok(n) = trimmed.parse::<f64>()
            && n.is_finite()
        {
            return Value::Number(n);
        }

        Value::String(raw.to_string())
    }

    /// Name of the value's type, as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Date(_) => "date",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// Textual form used for substitution.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Date(d) => f.write_str(&format_calendar_date(*d)),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
        }
    }
}
