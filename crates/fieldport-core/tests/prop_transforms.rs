//! Property-based tests for the transform engine
//!
//! These tests verify key invariants that should hold for all valid
//! inputs to the conversion and composition machinery.

use fieldport_core::{
    BoolTransform, IntTransform, JoinTransform, Registry, SplitTransform, StringTransform,
    Transform,
};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for element strings that cannot contain the comma delimiter
fn comma_free_element() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,20}"
}

proptest! {
    #[test]
    fn int_then_string_is_lossless_for_decimal_integers(n in any::<i64>()) {
        let parsed = IntTransform.apply(&json!(n.to_string())).unwrap();
        let rendered = StringTransform.apply(&parsed).unwrap();
        prop_assert_eq!(rendered, json!(n.to_string()));
    }

    #[test]
    fn join_inverts_split_when_delimiter_absent_from_elements(
        elements in prop::collection::vec(comma_free_element(), 1..8)
    ) {
        let joined = elements.join(",");
        let split = SplitTransform::new(",").apply(&json!(joined)).unwrap();
        let rejoined = JoinTransform::new(",").apply(&split).unwrap();
        prop_assert_eq!(rejoined, json!(joined));
    }

    #[test]
    fn split_element_count_tracks_delimiter_count(s in "[a-z,]{0,30}") {
        let delimiters = s.matches(',').count();
        let split = SplitTransform::new(",").apply(&json!(s)).unwrap();
        prop_assert_eq!(split.as_array().unwrap().len(), delimiters + 1);
    }

    #[test]
    fn bool_never_guesses_for_sequences(elements in prop::collection::vec(any::<bool>(), 0..4)) {
        let input = Value::Array(elements.into_iter().map(Value::Bool).collect());
        prop_assert!(BoolTransform.apply(&input).is_err());
    }

    #[test]
    fn nonzero_integers_are_true(n in any::<i64>()) {
        let out = BoolTransform.apply(&json!(n)).unwrap();
        prop_assert_eq!(out, json!(n != 0));
    }

    #[test]
    fn int_truncates_toward_zero(f in -1.0e15..1.0e15f64) {
        let out = IntTransform.apply(&json!(f)).unwrap();
        prop_assert_eq!(out.as_i64(), Some(f.trunc() as i64));
    }

    #[test]
    fn epoch_seconds_round_trip_through_rfc3339(secs in 0i64..4_102_444_800) {
        let registry = Registry::with_builtins();
        let to_rfc3339 = registry.create("date", &serde_json::Map::new()).unwrap();
        let back_to_unix = registry
            .create(
                "date",
                json!({"output_format": "Unix"}).as_object().unwrap(),
            )
            .unwrap();

        let rendered = to_rfc3339.apply(&json!(secs)).unwrap();
        let round_tripped = back_to_unix.apply(&rendered).unwrap();
        prop_assert_eq!(round_tripped, json!(secs.to_string()));
    }
}
