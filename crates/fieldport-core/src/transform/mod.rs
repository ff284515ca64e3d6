//! Transform engine for normalizing extracted field values
//!
//! This module implements the polymorphic conversion capability, the
//! built-in transforms, and the registry/chain plumbing that materializes
//! configured pipelines from declarative specifications.
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

pub mod chain;
pub mod collection;
pub mod datetime;
pub mod registry;
pub mod scalar;
pub mod text;

use crate::Result;
use serde_json::Value;

pub use chain::Chain;
pub use collection::{JoinTransform, SplitTransform};
pub use datetime::{DateFormat, DateTransform};
pub use registry::{Registry, TransformSpec};
pub use scalar::{BoolTransform, FloatTransform, IntTransform, StringTransform};
pub use text::{LowerTransform, TrimTransform, UpperTransform};

/// A single pure value-to-value conversion unit
///
/// Implementations are immutable after construction: any state is fixed
/// configuration captured when the creator runs, so one instance may be
/// invoked concurrently from multiple workers.
pub trait Transform: Send + Sync {
    /// Convert one untyped value into one converted value, or fail
    fn apply(&self, value: &Value) -> Result<Value>;
}

impl std::fmt::Debug for dyn Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Transform")
    }
}
