//! Transform registry: name-to-creator lookup and chain materialization
//!
//! The pipeline/config layer supplies a transform type name and a
//! configuration mapping per field; the registry resolves the name to a
//! creator and hands back a ready transform. Registration is
//! last-write-wins by design, and `register` takes `&mut self` so the
//! configure-then-use discipline is enforced by the borrow checker —
//! callers that need to extend a registry shared across running workers
//! must supply their own lock.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use crate::transform::{
    BoolTransform, Chain, DateTransform, FloatTransform, IntTransform, JoinTransform,
    LowerTransform, SplitTransform, StringTransform, TrimTransform, UpperTransform,
};
use crate::{Error, Result, Transform, TransformConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A factory that builds a configured transform from a configuration
/// mapping
///
/// Creators must not retain the mapping beyond extracting the keys they
/// recognize.
pub type Creator = Box<dyn Fn(&TransformConfig<'_>) -> Result<Box<dyn Transform>> + Send + Sync>;

/// One declarative step of a field's transform pipeline
///
/// Deserialized from pipeline configuration, e.g.
/// `{"type": "split", "config": {"delimiter": ";"}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformSpec {
    /// Registered transform type name (case-sensitive)
    #[serde(rename = "type")]
    pub type_name: String,
    /// Configuration mapping; unrecognized keys are ignored
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub config: Map<String, Value>,
}

impl TransformSpec {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            config: Map::new(),
        }
    }

    pub fn with_config(mut self, config: Map<String, Value>) -> Self {
        self.config = config;
        self
    }
}

/// The name-to-creator lookup table used to instantiate transforms from
/// configuration
///
/// Names are arbitrary case-sensitive strings. A registry is created once
/// at pipeline-build time and shared immutably afterwards.
pub struct Registry {
    creators: HashMap<String, Creator>,
}

impl Registry {
    /// Create an empty registry with no types registered
    pub fn new() -> Self {
        Self {
            creators: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the ten built-in transform
    /// types: `string`, `int`, `float`, `bool`, `date`, `split`, `join`,
    /// `upper`, `lower`, `trim`
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("string", |_| Ok(Box::new(StringTransform)));
        registry.register("int", |_| Ok(Box::new(IntTransform)));
        registry.register("float", |_| Ok(Box::new(FloatTransform)));
        registry.register("bool", |_| Ok(Box::new(BoolTransform)));
        registry.register("date", |config| {
            Ok(Box::new(DateTransform::from_config(config)?))
        });
        registry.register("split", |config| {
            Ok(Box::new(SplitTransform::from_config(config)?))
        });
        registry.register("join", |config| {
            Ok(Box::new(JoinTransform::from_config(config)?))
        });
        registry.register("upper", |_| Ok(Box::new(UpperTransform)));
        registry.register("lower", |_| Ok(Box::new(LowerTransform)));
        registry.register("trim", |_| Ok(Box::new(TrimTransform)));
        registry
    }

    /// Insert or overwrite the creator for `name`
    ///
    /// Re-registering an existing name silently replaces the previous
    /// creator: last write wins, with no error and no warning.
    pub fn register<F>(&mut self, name: impl Into<String>, creator: F)
    where
        F: Fn(&TransformConfig<'_>) -> Result<Box<dyn Transform>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.creators.contains_key(&name) {
            log::debug!("transform type {name:?} re-registered, replacing previous creator");
        }
        self.creators.insert(name, Box::new(creator));
    }

    /// Resolve `name` and build a transform from `config`
    ///
    /// Fails with `UnknownTransformType` when the name is absent;
    /// otherwise the stored creator runs and its error, if any, is
    /// propagated unchanged.
    pub fn create(&self, name: &str, config: &Map<String, Value>) -> Result<Box<dyn Transform>> {
        let creator = self
            .creators
            .get(name)
            .ok_or_else(|| Error::UnknownTransformType {
                name: name.to_string(),
            })?;
        creator(&TransformConfig::new(config))
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    /// Registered type names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    /// Materialize an ordered chain from declarative step specs
    pub fn build_chain(&self, specs: &[TransformSpec]) -> Result<Chain> {
        log::debug!("building transform chain with {} step(s)", specs.len());
        specs
            .iter()
            .map(|spec| self.create(&spec.type_name, &spec.config))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
