//! Raw column values handed to a codec by the data-access layer.

use chrono::{DateTime, Utc};

/// A scalar value as it comes off a database row, before any codec runs.
///
/// Codecs match on the variants they understand and reject the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Bytes(&'a [u8]),
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

impl RawValue<'_> {
    /// Short name of the representation, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int64",
            RawValue::Float(_) => "float64",
            RawValue::Bytes(_) => "bytes",
            RawValue::Text(_) => "text",
            RawValue::Timestamp(_) => "timestamp",
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(s: &'a str) -> Self {
        RawValue::Text(s)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(s: &'a String) -> Self {
        RawValue::Text(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for RawValue<'a> {
    fn from(b: &'a [u8]) -> Self {
        RawValue::Bytes(b)
    }
}

impl From<i64> for RawValue<'_> {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<f64> for RawValue<'_> {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<bool> for RawValue<'_> {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<DateTime<Utc>> for RawValue<'_> {
    fn from(v: DateTime<Utc>) -> Self {
        RawValue::Timestamp(v)
    }
}
