//! Scalar conversions: string, int, float, bool
//!
//! Each transform matches exhaustively over the closed value-kind set.
//! Kinds outside a transform's accepted set fail with a type-conversion
//! error carrying the observed kind; malformed text fails with a
//! format-parse error carrying the underlying parser diagnostic. No
//! transform ever substitutes a guessed default for a bad input.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use crate::value::canonical_string;
use crate::{Error, Result, Transform};
use serde_json::{Number, Value};

/// Converts any value to its canonical string representation
///
/// Null becomes the empty string; this transform never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringTransform;

impl Transform for StringTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        Ok(Value::String(canonical_string(value)))
    }
}

/// Converts null, numbers, and numeric strings to an integer
///
/// Floats truncate toward zero. Strings must be base-10 integer literals.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntTransform;

impl Transform for IntTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::from(0i64)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::from(u))
                } else {
                    // Finite by construction: serde_json numbers are never NaN/inf
                    let truncated = n.as_f64().unwrap_or(0.0).trunc();
                    Ok(Value::from(truncated as i64))
                }
            }
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| Error::format_parse(s.clone(), "integer", e)),
            other => Err(Error::type_conversion(other, "integer")),
        }
    }
}

/// Converts null, numbers, and decimal strings to a float
///
/// Integers widen to f64. Strings must be decimal float literals.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatTransform;

impl Transform for FloatTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Null => Ok(float_value(0.0)),
            Value::Number(n) => {
                let f = n.as_f64().unwrap_or(0.0);
                Ok(float_value(f))
            }
            Value::String(s) => {
                let f = s
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| Error::format_parse(s.clone(), "float", e))?;
                // f64::parse accepts "NaN"/"inf", which JSON cannot carry
                Number::from_f64(f).map(Value::Number).ok_or_else(|| {
                    Error::FormatParse {
                        value: s.clone(),
                        target: "float",
                        source: None,
                    }
                })
            }
            other => Err(Error::type_conversion(other, "float")),
        }
    }
}

fn float_value(f: f64) -> Value {
    // Callers only pass values read back out of a serde_json Number, which
    // are always finite
    Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or_else(|| Value::Number(Number::from(0)))
}

/// Converts null, booleans, strings, and numbers to a boolean
///
/// Strings must be the exact literals `true` or `false`; any numeric value
/// is true when nonzero.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoolTransform;

impl Transform for BoolTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Bool(false)),
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::String(s) => s
                .parse::<bool>()
                .map(Value::Bool)
                .map_err(|e| Error::format_parse(s.clone(), "boolean", e)),
            Value::Number(n) => {
                let nonzero = if let Some(i) = n.as_i64() {
                    i != 0
                } else if let Some(u) = n.as_u64() {
                    u != 0
                } else {
                    n.as_f64().unwrap_or(0.0) != 0.0
                };
                Ok(Value::Bool(nonzero))
            }
            other => Err(Error::type_conversion(other, "boolean")),
        }
    }
}
