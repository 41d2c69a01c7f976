//! Locating the two documents to compare inside an input payload.
//!
//! The payload is an object holding `expected` and `actual`, either directly
//! or inside a nested `compare_item` object. Other keys are ignored.

use jsoncmp_types::JsonValue;

use crate::error::{AnalyzeError, Result};

/// Optional wrapper key holding the envelope.
pub const COMPARE_ITEM_KEY: &str = "compare_item";
pub const EXPECTED_KEY: &str = "expected";
pub const ACTUAL_KEY: &str = "actual";

/// The pair of documents taken from a payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    pub expected: JsonValue,
    pub actual: JsonValue,
    /// `true` when the pair came from inside `compare_item`.
    pub nested: bool,
}

/// Take `expected` and `actual` out of a parsed payload.
///
/// A `compare_item` value that is not an object is ignored and the top level
/// is used instead. A key holding `null` counts as present.
pub fn extract_envelope(document: JsonValue) -> Result<Envelope> {
    let mut root = match document {
        JsonValue::Object(map) => map,
        other => return Err(AnalyzeError::NotAnObject(other.kind())),
    };

    let (mut container, nested) = match root.shift_remove(COMPARE_ITEM_KEY) {
        Some(JsonValue::Object(inner)) => (inner, true),
        Some(other) => {
            // Not a wrapper; put it back so the root stays intact.
            root.insert(COMPARE_ITEM_KEY.to_string(), other);
            (root, false)
        }
        None => (root, false),
    };

    let expected = container.shift_remove(EXPECTED_KEY);
    let actual = container.shift_remove(ACTUAL_KEY);

    match (expected, actual) {
        (Some(expected), Some(actual)) => Ok(Envelope {
            expected,
            actual,
            nested,
        }),
        (None, Some(_)) => Err(missing(EXPECTED_KEY)),
        (Some(_), None) => Err(missing(ACTUAL_KEY)),
        (None, None) => Err(missing("expected, actual")),
    }
}

fn missing(what: &str) -> AnalyzeError {
    AnalyzeError::MissingSections {
        missing: what.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn v(value: serde_json::Value) -> JsonValue {
        JsonValue::from(value)
    }

    #[test]
    fn root_level_sections() {
        let envelope = extract_envelope(v(json!({"expected": {"a": 1}, "actual": {"a": 2}, "id": "x"})))
            .unwrap();
        assert_eq!(envelope.expected, v(json!({"a": 1})));
        assert_eq!(envelope.actual, v(json!({"a": 2})));
        assert!(!envelope.nested);
    }

    #[test]
    fn compare_item_sections() {
        let envelope = extract_envelope(v(json!({
            "compare_item": {"expected": 1, "actual": 2, "tag": "t"},
            "request_id": "r"
        })))
        .unwrap();
        assert_eq!(envelope.expected, v(json!(1)));
        assert_eq!(envelope.actual, v(json!(2)));
        assert!(envelope.nested);
    }

    #[test]
    fn compare_item_takes_precedence_over_root() {
        let envelope = extract_envelope(v(json!({
            "expected": "root",
            "actual": "root",
            "compare_item": {"expected": "inner", "actual": "inner"}
        })))
        .unwrap();
        assert_eq!(envelope.expected, v(json!("inner")));
    }

    #[test]
    fn non_object_compare_item_falls_back_to_root() {
        let envelope = extract_envelope(v(json!({
            "compare_item": [1, 2],
            "expected": true,
            "actual": false
        })))
        .unwrap();
        assert_eq!(envelope.expected, JsonValue::Boolean(true));
        assert!(!envelope.nested);

        let envelope = extract_envelope(v(json!({
            "compare_item": null,
            "expected": 1,
            "actual": 1
        })))
        .unwrap();
        assert!(!envelope.nested);
    }

    #[test]
    fn null_sections_are_present() {
        let envelope = extract_envelope(v(json!({"expected": null, "actual": null}))).unwrap();
        assert!(envelope.expected.is_null());
        assert!(envelope.actual.is_null());
    }

    #[test]
    fn missing_expected() {
        let err = extract_envelope(v(json!({"actual": {}}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingSections);
        assert!(err.to_string().contains("must include \"expected\" and \"actual\""));
        assert!(err.to_string().contains("missing expected"));
    }

    #[test]
    fn missing_both_inside_compare_item() {
        let err = extract_envelope(v(json!({"compare_item": {"id": 1}}))).unwrap_err();
        assert!(matches!(err, AnalyzeError::MissingSections { ref missing } if missing == "expected, actual"));
    }

    #[test]
    fn sections_at_root_are_not_used_when_compare_item_is_incomplete() {
        let err = extract_envelope(v(json!({
            "expected": 1,
            "actual": 1,
            "compare_item": {"expected": 1}
        })))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingSections);
    }

    #[test]
    fn non_object_top_level() {
        for doc in [json!([1, 2]), json!("text"), json!(null), json!(3)] {
            let err = extract_envelope(v(doc)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput);
        }
    }
}
