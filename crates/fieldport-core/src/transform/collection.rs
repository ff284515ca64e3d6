//! Collection marshaling: split and join
//!
//! Both transforms take a literal delimiter from configuration, defaulting
//! to a single comma. Split is not pattern-based; the delimiter matches
//! verbatim.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use crate::value::canonical_string;
use crate::{Error, Result, Transform, TransformConfig};
use serde_json::Value;

pub(crate) const DEFAULT_DELIMITER: &str = ",";

/// Splits a string into a sequence of substrings on a literal delimiter
///
/// Consecutive delimiters yield empty elements; a string not containing
/// the delimiter yields a single-element sequence.
#[derive(Debug, Clone)]
pub struct SplitTransform {
    delimiter: String,
}

impl SplitTransform {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Build from a configuration mapping (`delimiter`)
    pub fn from_config(config: &TransformConfig<'_>) -> Result<Self> {
        Ok(Self::new(config.str_or("delimiter", DEFAULT_DELIMITER)?))
    }
}

impl Transform for SplitTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        match value.as_str() {
            Some(s) => Ok(Value::Array(
                s.split(&self.delimiter)
                    .map(|part| Value::String(part.to_string()))
                    .collect(),
            )),
            None => Err(Error::type_conversion(value, "string")),
        }
    }
}

/// Joins a sequence of arbitrary values into one delimited string
///
/// Each element is rendered with its canonical string representation; an
/// empty sequence joins to the empty string.
#[derive(Debug, Clone)]
pub struct JoinTransform {
    delimiter: String,
}

impl JoinTransform {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Build from a configuration mapping (`delimiter`)
    pub fn from_config(config: &TransformConfig<'_>) -> Result<Self> {
        Ok(Self::new(config.str_or("delimiter", DEFAULT_DELIMITER)?))
    }
}

impl Transform for JoinTransform {
    fn apply(&self, value: &Value) -> Result<Value> {
        match value.as_array() {
            Some(elements) => Ok(Value::String(
                elements
                    .iter()
                    .map(canonical_string)
                    .collect::<Vec<_>>()
                    .join(&self.delimiter),
            )),
            None => Err(Error::type_conversion(value, "sequence")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_basic() {
        let t = SplitTransform::new(",");
        assert_eq!(
            t.apply(&json!("a,b,c")).unwrap(),
            json!(["a", "b", "c"])
        );
    }

    #[test]
    fn test_split_consecutive_delimiters_keep_empty_elements() {
        let t = SplitTransform::new(",");
        assert_eq!(t.apply(&json!("a,,c,")).unwrap(), json!(["a", "", "c", ""]));
    }

    #[test]
    fn test_split_without_delimiter_is_single_element() {
        let t = SplitTransform::new(";");
        assert_eq!(t.apply(&json!("a,b")).unwrap(), json!(["a,b"]));
    }

    #[test]
    fn test_split_multichar_delimiter_is_literal() {
        let t = SplitTransform::new("::");
        assert_eq!(t.apply(&json!("a::b::c")).unwrap(), json!(["a", "b", "c"]));
    }

    #[test]
    fn test_split_rejects_non_strings() {
        let t = SplitTransform::new(",");
        assert!(matches!(
            t.apply(&json!(["a"])).unwrap_err(),
            Error::TypeConversion { .. }
        ));
    }

    #[test]
    fn test_join_mixed_elements() {
        let t = JoinTransform::new("-");
        assert_eq!(
            t.apply(&json!(["a", 1, true, null])).unwrap(),
            json!("a-1-true-")
        );
    }

    #[test]
    fn test_join_empty_sequence() {
        let t = JoinTransform::new(",");
        assert_eq!(t.apply(&json!([])).unwrap(), json!(""));
    }

    #[test]
    fn test_join_rejects_non_sequences() {
        let t = JoinTransform::new(",");
        assert!(matches!(
            t.apply(&json!("a,b")).unwrap_err(),
            Error::TypeConversion { .. }
        ));
    }

    #[test]
    fn test_split_join_inverse() {
        let split = SplitTransform::new(",");
        let join = JoinTransform::new(",");
        let parts = split.apply(&json!("apple,banana,orange")).unwrap();
        assert_eq!(join.apply(&parts).unwrap(), json!("apple,banana,orange"));
    }
}
