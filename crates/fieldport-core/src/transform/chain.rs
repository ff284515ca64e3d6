//! Ordered transform composition with short-circuit failure
//!
//! Copyright (c) 2025 Fieldport Team
//! Licensed under the Apache-2.0 license

use crate::{Result, Transform};
use serde_json::Value;

/// An ordered sequence of transforms applied to a single value
///
/// Each member's successful output feeds the next member's input. The
/// first failure aborts the chain and is returned as-is; no partial or
/// best-effort value survives and no later member executes. An empty
/// chain is the identity function.
#[derive(Debug)]
pub struct Chain {
    steps: Vec<Box<dyn Transform>>,
}

impl Chain {
    /// Build a chain from already-constructed transforms
    pub fn new(steps: Vec<Box<dyn Transform>>) -> Self {
        Self { steps }
    }

    /// Number of member transforms
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Transform for Chain {
    fn apply(&self, value: &Value) -> Result<Value> {
        let mut current = value.clone();
        for step in &self.steps {
            current = step.apply(&current)?;
        }
        Ok(current)
    }
}

impl FromIterator<Box<dyn Transform>> for Chain {
    fn from_iter<I: IntoIterator<Item = Box<dyn Transform>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{LowerTransform, SplitTransform, TrimTransform, UpperTransform};
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = Chain::new(Vec::new());
        assert!(chain.is_empty());
        assert_eq!(chain.apply(&json!({"as": "is"})).unwrap(), json!({"as": "is"}));
    }

    #[test]
    fn test_steps_run_in_configured_order() {
        let chain = Chain::new(vec![
            Box::new(TrimTransform),
            Box::new(LowerTransform),
            Box::new(SplitTransform::new(",")),
        ]);
        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.apply(&json!("  APPLE,BANANA,ORANGE  ")).unwrap(),
            json!(["apple", "banana", "orange"])
        );
    }

    #[test]
    fn test_first_failure_short_circuits() {
        // The split output is a sequence, so the upper step must fail and
        // the trailing lower step must never observe a value
        let chain = Chain::new(vec![
            Box::new(SplitTransform::new(",")),
            Box::new(UpperTransform),
            Box::new(LowerTransform),
        ]);
        let err = chain.apply(&json!("a,b")).unwrap_err();
        assert!(matches!(err, Error::TypeConversion { .. }));
    }

    #[test]
    fn test_failure_returns_no_partial_value() {
        let chain = Chain::new(vec![Box::new(TrimTransform), Box::new(UpperTransform)]);
        assert!(chain.apply(&json!(42)).is_err());
    }
}
