//! Value classification and canonical stringification
//!
//! Extracted field values arrive as `serde_json::Value`. This module
//! classifies them into a closed set of kinds so every transform's
//! accepted-kind set is an exhaustive match, and renders any value as its
//! canonical human-readable string.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::fmt;

/// The closed set of runtime kinds a field value can have
///
/// JSON numbers are classified as `Integer` when they are exactly
/// representable as `i64` or `u64`, and `Float` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Classify a JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    ValueKind::Integer
                } else {
                    ValueKind::Float
                }
            }
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Bool => write!(f, "boolean"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Sequence => write!(f, "sequence"),
            ValueKind::Mapping => write!(f, "mapping"),
        }
    }
}

/// Render a value as its canonical human-readable string
///
/// Null becomes the empty string, strings pass through unchanged, booleans
/// and numbers use their decimal display form, and sequences or mappings
/// are rendered as compact JSON.
pub fn canonical_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Compact JSON; serialization of a Value cannot fail
        other => other.to_string(),
    }
}
