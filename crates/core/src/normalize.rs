//! Boundary normalization for dates and numbers.
//!
//! Form state and loosely-typed JSON deliver dates and amounts in several
//! shapes. Everything crossing the API boundary goes through this module,
//! which converts to canonical forms (`NaiveDate` in memory, `YYYY-MM-DD`
//! strings and plain numbers in payloads) and never panics on bad input.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decimal separator convention for locale-aware number parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalFormat {
    /// `1,234.56` — point decimal, comma grouping (en-US style).
    Point,
    /// `1.234,56` — comma decimal, point grouping (de-DE style).
    Comma,
}

/// A date-like value as it arrives from a form or loosely-typed JSON:
/// already a date, some string rendition, or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
    #[default]
    Null,
}

impl DateInput {
    /// Best-effort conversion to a calendar date.
    /// Total: malformed or absent input yields `None`, never a panic.
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            DateInput::Date(d) => Some(*d),
            DateInput::Text(s) => parse_date_text(s),
            DateInput::Null => None,
        }
    }

    /// Canonical `YYYY-MM-DD` form for API payloads.
    /// Returns `""` when no valid date can be extracted.
    pub fn to_iso_string(&self) -> String {
        self.to_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DateInput::Null)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<Option<NaiveDate>> for DateInput {
    fn from(d: Option<NaiveDate>) -> Self {
        d.map(DateInput::Date).unwrap_or(DateInput::Null)
    }
}

/// Accepted string shapes, tried in order: plain ISO date, RFC 3339
/// timestamp, ISO datetime without offset, and the SQL-ish variant
/// with a space separator. The time portion is discarded.
fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

/// Parse a date input-control value. Strict `YYYY-MM-DD` only, so the
/// value round-trips to the same calendar day regardless of timezone.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// A number-like value from a form or loosely-typed JSON: a plain
/// number, the text a user typed, or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl NumberInput {
    /// Best-effort numeric conversion. Text uses a point decimal
    /// separator; malformed or non-finite input yields `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            NumberInput::Number(n) => Some(*n).filter(|n| n.is_finite()),
            NumberInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            NumberInput::Null => None,
        }
    }
}

impl From<f64> for NumberInput {
    fn from(n: f64) -> Self {
        NumberInput::Number(n)
    }
}

impl From<i64> for NumberInput {
    fn from(n: i64) -> Self {
        NumberInput::Number(n as f64)
    }
}

impl From<&str> for NumberInput {
    fn from(s: &str) -> Self {
        NumberInput::Text(s.to_string())
    }
}

/// Parse user-typed numeric text honoring the locale's decimal separator.
/// Grouping separators are stripped. Partial input (trailing separator)
/// and leftover garbage reject the whole value.
pub fn parse_locale_number(value: &str, format: DecimalFormat) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (decimal, grouping) = match format {
        DecimalFormat::Point => ('.', ','),
        DecimalFormat::Comma => (',', '.'),
    };
    if trimmed.ends_with(decimal) {
        return None;
    }
    let mut normalized = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if c == grouping {
            continue;
        }
        if c == decimal {
            normalized.push('.');
        } else {
            normalized.push(c);
        }
    }
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// JSON payload form of a date-like input: `"YYYY-MM-DD"` or `null`.
pub fn date_payload(value: &DateInput) -> Value {
    match value.to_date() {
        Some(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        None => Value::Null,
    }
}

/// JSON payload form of an optional date already held as `NaiveDate`.
pub fn optional_date_payload(value: Option<NaiveDate>) -> Value {
    match value {
        Some(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        None => Value::Null,
    }
}

/// JSON payload form of a number-like input: a plain number or `null`.
pub fn number_payload(value: &NumberInput) -> Value {
    value
        .to_number()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// JSON payload form of an id-like input: a whole number or `null`.
/// Fractional input is truncated toward zero.
pub fn id_payload(value: &NumberInput) -> Value {
    match value.to_number() {
        Some(n) => Value::Number(serde_json::Number::from(n as i64)),
        None => Value::Null,
    }
}
