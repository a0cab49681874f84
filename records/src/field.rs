//! FILENAME: records/src/field.rs
//! PURPOSE: Defines the field value coercion used by search and export.
//! CONTEXT: Every record field that participates in the tabular pipeline
//! is coerced to a `FieldValue` before being matched against a query or
//! written to a CSV cell. The coercion rules are fixed so that search
//! and export always agree on what a field "looks like" as text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record field reduced to its displayable/searchable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Empty,
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Coerces the value to plain text.
    ///
    /// Numbers use their default decimal form with no grouping, so the
    /// result stays machine-parseable; integers drop the decimal point.
    /// Dates render as ISO `YYYY-MM-DD`. `Empty` is the empty string.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Number(n) => format_plain_number(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<NaiveDate>> for FieldValue {
    fn from(value: Option<NaiveDate>) -> Self {
        match value {
            Some(d) => FieldValue::Date(d),
            None => FieldValue::Empty,
        }
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

/// Format a number in its plain decimal form (no grouping, no glyphs).
///
/// Integers drop the decimal point; decimals keep up to 10 significant
/// fraction digits with trailing zeros trimmed.
pub fn format_plain_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.0}", value);
    }

    let formatted = format!("{:.10}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
