//! Text transforms: upper, lower, trim
//!
//! String-only transforms; any other input kind is a type-conversion error.
//! Case folding uses Unicode-aware mappings.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result, Transform};
use serde_json::Value;

/// Uppercases a string value
#[derive(Debug, Default, Clone, Copy)]
pub struct UpperTransform;

impl Transform for UpperTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        match value.as_str() {
            Some(s) => Ok(Value::String(s.to_uppercase())),
            None => Err(Error::type_conversion(value, "string")),
        }
    }
}

/// Lowercases a string value
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerTransform;

impl Transform for LowerTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        match value.as_str() {
            Some(s) => Ok(Value::String(s.to_lowercase())),
            None => Err(Error::type_conversion(value, "string")),
        }
    }
}

/// Strips leading and trailing whitespace from a string value
#[derive(Debug, Default, Clone, Copy)]
pub struct TrimTransform;

impl Transform for TrimTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        match value.as_str() {
            Some(s) => Ok(Value::String(s.trim().to_string())),
            None => Err(Error::type_conversion(value, "string")),
        }
    }
}
