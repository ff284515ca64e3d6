//! Date/time transform with named-format resolution
//!
//! Resolves `input_format`/`output_format` configuration into either one of
//! the named interchange formats or a literal chrono pattern. Input values
//! are strings parsed under the input format, or numbers interpreted as
//! Unix epoch seconds UTC. Output is always a string.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result, Transform, TransformConfig};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::fmt::Write as _;

const DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
const DATE_PATTERN: &str = "%Y-%m-%d";

/// A resolved date format: one of the named interchange formats, or a
/// literal chrono `strftime` pattern used verbatim
///
/// The named set is closed; any other name is treated as a custom pattern.
/// Custom patterns are a best-effort escape hatch, not a compatibility
/// guarantee with other pattern dialects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// `2021-01-01T00:00:00Z`
    Rfc3339,
    /// RFC 3339 with fractional seconds
    Rfc3339Nano,
    /// `YYYY-MM-DD HH:MM:SS`, UTC, no offset
    DateTime,
    /// `YYYY-MM-DD`
    Date,
    /// Decimal seconds since the Unix epoch
    Unix,
    /// Decimal milliseconds since the Unix epoch
    UnixMilli,
    /// Literal chrono pattern passed through for parsing and formatting
    Custom(String),
}

impl DateFormat {
    /// Resolve a configured format name
    pub fn resolve(name: &str) -> Self {
        match name {
            "RFC3339" => DateFormat::Rfc3339,
            "RFC3339Nano" => DateFormat::Rfc3339Nano,
            "DateTime" => DateFormat::DateTime,
            "Date" => DateFormat::Date,
            "Unix" => DateFormat::Unix,
            "UnixMilli" => DateFormat::UnixMilli,
            other => DateFormat::Custom(other.to_string()),
        }
    }

    /// Parse a string under this format into a UTC timestamp
    ///
    /// Formats without an offset (`DateTime`, `Date`, and offset-free
    /// custom patterns) are interpreted as UTC. `Unix`/`UnixMilli` parse a
    /// decimal epoch count.
    pub fn parse(&self, s: &str) -> Result<DateTime<Utc>> {
        match self {
            DateFormat::Rfc3339 | DateFormat::Rfc3339Nano => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| Error::format_parse(s, "RFC 3339 timestamp", e)),
            DateFormat::DateTime => NaiveDateTime::parse_from_str(s, DATETIME_PATTERN)
                .map(|dt| dt.and_utc())
                .map_err(|e| Error::format_parse(s, "DateTime timestamp", e)),
            DateFormat::Date => NaiveDate::parse_from_str(s, DATE_PATTERN)
                .map(midnight_utc)
                .map_err(|e| Error::format_parse(s, "Date", e)),
            DateFormat::Unix => s
                .trim()
                .parse::<i64>()
                .map_err(anyhow::Error::from)
                .and_then(|secs| {
                    DateTime::from_timestamp(secs, 0)
                        .ok_or_else(|| anyhow::anyhow!("epoch seconds out of range: {secs}"))
                })
                .map_err(|e| Error::format_parse(s, "Unix timestamp", e)),
            DateFormat::UnixMilli => s
                .trim()
                .parse::<i64>()
                .map_err(anyhow::Error::from)
                .and_then(|millis| {
                    DateTime::from_timestamp_millis(millis)
                        .ok_or_else(|| anyhow::anyhow!("epoch milliseconds out of range: {millis}"))
                })
                .map_err(|e| Error::format_parse(s, "UnixMilli timestamp", e)),
            DateFormat::Custom(pattern) => parse_custom(s, pattern),
        }
    }

    /// Render a UTC timestamp under this format
    pub fn format(&self, dt: &DateTime<Utc>) -> Result<String> {
        match self {
            DateFormat::Rfc3339 => Ok(dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            DateFormat::Rfc3339Nano => Ok(dt.to_rfc3339_opts(SecondsFormat::Nanos, true)),
            DateFormat::DateTime => Ok(dt.format(DATETIME_PATTERN).to_string()),
            DateFormat::Date => Ok(dt.format(DATE_PATTERN).to_string()),
            DateFormat::Unix => Ok(dt.timestamp().to_string()),
            DateFormat::UnixMilli => Ok(dt.timestamp_millis().to_string()),
            DateFormat::Custom(pattern) => {
                // An unknown pattern token only surfaces when rendered
                let mut out = String::new();
                write!(&mut out, "{}", dt.format(pattern)).map_err(|_| Error::Configuration {
                    message: format!("invalid date pattern {pattern:?}"),
                    key: Some("output_format".to_string()),
                })?;
                Ok(out)
            }
        }
    }
}

fn midnight_utc(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Parse under a custom pattern, trying offset-bearing, then naive
/// datetime (UTC assumed), then date-only (midnight UTC)
fn parse_custom(s: &str, pattern: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_str(s, pattern) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
        return Ok(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, pattern)
        .map(midnight_utc)
        .map_err(|e| Error::format_parse(s, "custom-pattern timestamp", e))
}

/// Parses a date/time input and re-renders it in the output format
///
/// Both formats default to RFC 3339 when unconfigured.
#[derive(Debug, Clone)]
pub struct DateTransform {
    input: DateFormat,
    output: DateFormat,
}

impl DateTransform {
    pub fn new(input: DateFormat, output: DateFormat) -> Self {
        Self { input, output }
    }

    /// Build from a configuration mapping (`input_format`, `output_format`)
    pub fn from_config(config: &TransformConfig<'_>) -> Result<Self> {
        let input = DateFormat::resolve(config.str_or("input_format", "RFC3339")?);
        let output = DateFormat::resolve(config.str_or("output_format", "RFC3339")?);
        Ok(Self::new(input, output))
    }

    fn timestamp_of(&self, value: &Value) -> Result<DateTime<Utc>> {
        match value {
            Value::String(s) => self.input.parse(s),
            Value::Number(n) => {
                if let Some(secs) = n.as_i64() {
                    DateTime::from_timestamp(secs, 0).ok_or_else(|| Error::FormatParse {
                        value: n.to_string(),
                        target: "epoch seconds",
                        source: None,
                    })
                } else {
                    // Fractional epoch seconds keep millisecond precision
                    let f = n.as_f64().unwrap_or(0.0);
                    DateTime::from_timestamp_millis((f * 1000.0).round() as i64).ok_or_else(
                        || Error::FormatParse {
                            value: n.to_string(),
                            target: "epoch seconds",
                            source: None,
                        },
                    )
                }
            }
            other => Err(Error::type_conversion(other, "date/time")),
        }
    }
}

impl Transform for DateTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        let dt = self.timestamp_of(value)?;
        Ok(Value::String(self.output.format(&dt)?))
    }
}
