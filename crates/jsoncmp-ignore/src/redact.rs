//! Redaction: removing ignored nodes from a private copy of a document.
//!
//! A pattern is relative. It is attempted at every node of the document (an
//! outer pre-order walk), and each attempt navigates the pattern's segments
//! downward from that node (the inner match). Attempts that hit a missing key,
//! an out-of-range index or a node of the wrong type are abandoned silently.

use tracing::debug;

use jsoncmp_types::JsonValue;

use crate::config::IgnorePaths;
use crate::pattern::{IndexSelector, PathSegment, Pattern};

/// A compiled set of ignore patterns, applied in first-collected order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreRules {
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Compile collected paths, skipping any that fail to parse.
    pub fn from_paths(paths: &IgnorePaths) -> Self {
        Self::new(paths.patterns())
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Return a redacted deep copy of `value`. The input is never modified.
    pub fn apply(&self, value: &JsonValue) -> JsonValue {
        apply_ignore_patterns(value, &self.patterns)
    }
}

/// Apply every pattern, in order, to a single deep copy of `value`.
pub fn apply_ignore_patterns(value: &JsonValue, patterns: &[Pattern]) -> JsonValue {
    let mut copy = value.clone();
    for pattern in patterns {
        debug!(pattern = %pattern, "applying ignore pattern");
        redact_everywhere(&mut copy, pattern.segments());
    }
    copy
}

/// Attempt the pattern at `node`, then at every node below it.
fn redact_everywhere(node: &mut JsonValue, segments: &[PathSegment]) {
    redact_at(node, segments);

    match node {
        JsonValue::List(items) => {
            for item in items.iter_mut() {
                redact_everywhere(item, segments);
            }
        }
        JsonValue::Object(map) => {
            for child in map.values_mut() {
                redact_everywhere(child, segments);
            }
        }
        JsonValue::Null | JsonValue::Boolean(_) | JsonValue::Number(_) | JsonValue::String(_) => {}
    }
}

/// Navigate `segments` from `node`, removing whatever the final segment names.
fn redact_at(node: &mut JsonValue, segments: &[PathSegment]) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };
    let last = rest.is_empty();

    match (segment, node) {
        (PathSegment::Property(key), JsonValue::Object(map)) => {
            if last {
                map.shift_remove(key);
            } else if let Some(child) = map.get_mut(key) {
                redact_at(child, rest);
            }
        }
        (PathSegment::Index(IndexSelector::At(index)), JsonValue::List(items)) => {
            if last {
                if *index < items.len() {
                    items.remove(*index);
                }
            } else if let Some(child) = items.get_mut(*index) {
                redact_at(child, rest);
            }
        }
        (PathSegment::Index(IndexSelector::Wildcard), JsonValue::List(items)) => {
            if last {
                items.clear();
            } else {
                for child in items.iter_mut() {
                    redact_at(child, rest);
                }
            }
        }
        // Segment does not fit this node's type.
        (PathSegment::Property(_), _) | (PathSegment::Index(_), _) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_pattern;
    use serde_json::json;

    fn v(value: serde_json::Value) -> JsonValue {
        JsonValue::from(value)
    }

    fn redact(value: serde_json::Value, patterns: &[&str]) -> JsonValue {
        let patterns: Vec<Pattern> = patterns.iter().map(|p| parse_pattern(p).unwrap()).collect();
        apply_ignore_patterns(&v(value), &patterns)
    }

    #[test]
    fn removes_leaf_property() {
        let out = redact(json!({"a": {"b": 1, "c": 2}}), &["a.b"]);
        assert_eq!(out, v(json!({"a": {"c": 2}})));
    }

    #[test]
    fn keeps_remaining_key_order() {
        let out = redact(json!({"z": 1, "drop": 2, "a": 3}), &["drop"]);
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn original_is_untouched() {
        let original = v(json!({"a": {"b": 1}}));
        let rules = IgnoreRules::new(vec![parse_pattern("a.b").unwrap()]);
        let redacted = rules.apply(&original);
        assert_eq!(original, v(json!({"a": {"b": 1}})));
        assert_eq!(redacted, v(json!({"a": {}})));
    }

    #[test]
    fn relative_pattern_matches_below_root() {
        let doc = json!({"success": {"order": {"createdDate": "2024-01-01", "id": 7}}});
        let out = redact(doc, &["order.createdDate"]);
        assert_eq!(out, v(json!({"success": {"order": {"id": 7}}})));
    }

    #[test]
    fn relative_pattern_matches_every_occurrence() {
        let doc = json!({
            "left": {"meta": {"ts": 1, "k": 1}},
            "right": [{"meta": {"ts": 2, "k": 2}}],
            "meta": {"ts": 3}
        });
        let out = redact(doc, &["meta.ts"]);
        assert_eq!(
            out,
            v(json!({
                "left": {"meta": {"k": 1}},
                "right": [{"meta": {"k": 2}}],
                "meta": {}
            }))
        );
    }

    #[test]
    fn wildcard_removes_key_from_every_element() {
        let doc = json!({"cycles": [
            {"index": 0, "total": 10},
            {"total": 15},
            {"index": 2, "total": 20}
        ]});
        let out = redact(doc, &["cycles[*].index"]);
        assert_eq!(
            out,
            v(json!({"cycles": [{"total": 10}, {"total": 15}, {"total": 20}]}))
        );
    }

    #[test]
    fn trailing_wildcard_empties_list() {
        let out = redact(json!({"tags": [1, 2, 3], "keep": true}), &["tags[*]"]);
        assert_eq!(out, v(json!({"tags": [], "keep": true})));
    }

    #[test]
    fn trailing_index_removes_single_element() {
        let out = redact(json!({"tags": ["a", "b", "c"]}), &["tags[1]"]);
        assert_eq!(out, v(json!({"tags": ["a", "c"]})));
    }

    #[test]
    fn out_of_range_index_is_noop() {
        let out = redact(json!({"tags": ["a"]}), &["tags[5]", "tags[3].x"]);
        assert_eq!(out, v(json!({"tags": ["a"]})));
    }

    #[test]
    fn intermediate_index_navigates() {
        let out = redact(json!({"rows": [{"x": 1}, {"x": 2}]}), &["rows[1].x"]);
        assert_eq!(out, v(json!({"rows": [{"x": 1}, {}]})));
    }

    #[test]
    fn type_mismatch_is_silent() {
        let doc = json!({"a": [1, 2], "b": {"0": true}, "c": "text"});
        let out = redact(doc.clone(), &["a.length", "b[0]", "c.d", "c[*]"]);
        assert_eq!(out, v(doc));
    }

    #[test]
    fn missing_intermediate_is_silent() {
        let doc = json!({"a": {"b": 1}});
        let out = redact(doc.clone(), &["x.y.z"]);
        assert_eq!(out, v(doc));
    }

    #[test]
    fn leading_index_pattern_matches_nested_lists() {
        let doc = json!({"matrix": [[{"id": 1, "v": 1}], [{"id": 2, "v": 2}]]});
        let out = redact(doc, &["[0].id"]);
        assert_eq!(out, v(json!({"matrix": [[{"v": 1}], [{"v": 2}]]})));
    }

    #[test]
    fn scalar_document_is_unchanged() {
        assert_eq!(redact(json!(42), &["a", "[0]"]), v(json!(42)));
    }

    #[test]
    fn empty_rules_are_identity() {
        let doc = v(json!({"a": [1, {"b": null}]}));
        let rules = IgnoreRules::default();
        assert!(rules.is_empty());
        assert_eq!(rules.apply(&doc), doc);
    }

    #[test]
    fn rules_from_collected_paths() {
        let paths: IgnorePaths = ["a.b", "bad[]"].into_iter().collect();
        let rules = IgnoreRules::from_paths(&paths);
        assert_eq!(rules.patterns().len(), 1);
        assert_eq!(rules.apply(&v(json!({"a": {"b": 1}}))), v(json!({"a": {}})));
    }

    // Index removals shift later elements, so overlapping index patterns
    // depend on the order they were collected in.
    #[test]
    fn overlapping_index_patterns_apply_in_collected_order() {
        let doc = json!({"items": ["a", "b", "c"]});

        let out = redact(doc.clone(), &["items[0]", "items[1]"]);
        // The pattern is also attempted below the root, but no nested node
        // holds an `items` key, so each pattern removes exactly once.
        assert_eq!(out, v(json!({"items": ["b"]})));

        let out = redact(doc, &["items[1]", "items[0]"]);
        assert_eq!(out, v(json!({"items": ["c"]})));
    }

    #[test]
    fn nested_and_parent_patterns_compose() {
        let doc = json!({"price": {"tax": {"rate": 1}, "total": 5}});
        let a = redact(doc.clone(), &["price.tax.rate", "price.tax"]);
        let b = redact(doc, &["price.tax", "price.tax.rate"]);
        assert_eq!(a, b);
        assert_eq!(a, v(json!({"price": {"total": 5}})));
    }
}
