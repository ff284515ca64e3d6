//! Error types for the Fieldport core library
//!
//! This module defines the error handling system for the transform engine,
//! using thiserror for ergonomic error definitions and anyhow to carry
//! underlying parser diagnostics.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use crate::value::ValueKind;
use thiserror::Error;

/// Main error type for transform operations
#[derive(Error, Debug)]
pub enum Error {
    /// A transform type name was not found in the registry
    #[error("unknown transform type: {name}")]
    UnknownTransformType { name: String },

    /// The runtime kind of the input value is outside the transform's
    /// accepted set
    #[error("type conversion failed: cannot convert {actual} to {target}")]
    TypeConversion {
        actual: ValueKind,
        target: &'static str,
    },

    /// A string value failed to parse under its required lexical rule
    #[error("format parse failed: {value:?} is not a valid {target}")]
    FormatParse {
        value: String,
        target: &'static str,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A configuration mapping was malformed for the transform being built
    #[error("invalid transform configuration: {message}")]
    Configuration {
        message: String,
        key: Option<String>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `TypeConversion` error recording the observed kind of `value`
    pub fn type_conversion(value: &serde_json::Value, target: &'static str) -> Self {
        Error::TypeConversion {
            actual: ValueKind::of(value),
            target,
        }
    }

    /// Build a `FormatParse` error wrapping the underlying parser diagnostic
    pub fn format_parse(
        value: impl Into<String>,
        target: &'static str,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Error::FormatParse {
            value: value.into(),
            target,
            source: Some(source.into()),
        }
    }
}
