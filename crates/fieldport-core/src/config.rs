//! Typed access to transform configuration mappings
//!
//! The pipeline/config layer hands each transform creator a string-keyed
//! mapping of arbitrary scalar values. Creators extract only the keys they
//! recognize; everything else is ignored and missing keys take documented
//! defaults.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use serde_json::{Map, Value};

/// Borrowed view over a transform's configuration mapping
#[derive(Debug, Clone, Copy)]
pub struct TransformConfig<'a> {
    entries: &'a Map<String, Value>,
}

impl<'a> TransformConfig<'a> {
    /// Wrap a configuration mapping
    pub fn new(entries: &'a Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Look up a string-valued key
    ///
    /// Returns `Ok(None)` when the key is absent. A present key holding a
    /// non-string value is a configuration error, not a silent default.
    pub fn get_str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(Error::Configuration {
                message: format!(
                    "key {:?} must be a string, got {}",
                    key,
                    crate::ValueKind::of(other)
                ),
                key: Some(key.to_string()),
            }),
        }
    }

    /// Look up a string-valued key, falling back to a default
    pub fn str_or(&self, key: &str, default: &'a str) -> Result<&'a str> {
        Ok(self.get_str(key)?.unwrap_or(default))
    }
}

impl<'a> From<&'a Map<String, Value>> for TransformConfig<'a> {
    fn from(entries: &'a Map<String, Value>) -> Self {
        Self::new(entries)
    }
}
