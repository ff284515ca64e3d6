//! Fieldport Core - transform registry and chain composition engine
//!
//! This crate normalizes heterogeneous, loosely-typed values extracted
//! from external data sources into well-defined target representations
//! before they reach downstream pipeline stages.
//!
//! # Main Components
//!
//! - **Error Handling**: typed error taxonomy using `thiserror` and `anyhow`
//! - **Value Model**: closed value-kind classification over `serde_json::Value`
//! - **Transforms**: ten built-in conversions plus a pluggable `Transform` trait
//! - **Registry**: name-to-creator lookup instantiating transforms from
//!   declarative configuration
//! - **Chain**: ordered composition with deterministic short-circuit on failure
//!
//! # Example
//!
//! ```
//! use fieldport_core::{Registry, Transform, TransformSpec};
//! use serde_json::json;
//!
//! fn example() -> fieldport_core::Result<()> {
//!     let registry = Registry::with_builtins();
//!     let chain = registry.build_chain(&[
//!         TransformSpec::new("trim"),
//!         TransformSpec::new("lower"),
//!     ])?;
//!     assert_eq!(chain.apply(&json!("  Mixed Case  "))?, json!("mixed case"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod error;
pub mod transform;
pub mod value;

// Re-export main types for convenience
pub use config::TransformConfig;
pub use error::{Error, Result};
pub use transform::{
    // Capability and composition
    Transform, Chain,

    // Registry plumbing
    Registry, TransformSpec,

    // Built-in transforms
    BoolTransform, DateFormat, DateTransform, FloatTransform, IntTransform, JoinTransform,
    LowerTransform, SplitTransform, StringTransform, TrimTransform, UpperTransform,
};
pub use value::{canonical_string, ValueKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
