//! Structural diff: compare two JSON documents node by node.
//!
//! The walk is depth-first. Lists are compared index by index, objects over
//! the union of their keys (expected's order first, then keys only present in
//! actual, in actual's order), so the output is deterministic for identical
//! inputs.

use std::fmt;

use serde::Serialize;

use jsoncmp_types::{JsonPath, JsonValue};

/// The result of comparing two documents.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StructuralDiff {
    /// The differences, in traversal order.
    pub entries: Vec<DiffEntry>,
}

impl StructuralDiff {
    /// Create an empty structural diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the documents are structurally equal.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries present in expected but absent in actual.
    pub fn missing(&self) -> usize {
        self.count(DiffKind::Missing)
    }

    /// Number of entries present in actual but absent in expected.
    pub fn extra(&self) -> usize {
        self.count(DiffKind::Extra)
    }

    /// Number of entries present on both sides with unequal values.
    pub fn mismatches(&self) -> usize {
        self.count(DiffKind::Mismatch)
    }

    fn count(&self, kind: DiffKind) -> usize {
        self.entries.iter().filter(|e| e.kind() == kind).count()
    }
}

/// The category of a single difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Missing,
    Extra,
    Mismatch,
}

impl DiffKind {
    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing => "Missing in actual",
            Self::Extra => "Extra in actual",
            Self::Mismatch => "Value mismatch",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Missing => "missing",
            Self::Extra => "extra",
            Self::Mismatch => "mismatch",
        };
        f.write_str(name)
    }
}

/// A single difference between expected and actual.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffEntry {
    /// Present in expected, absent in actual.
    Missing { path: JsonPath, expected: JsonValue },
    /// Present in actual, absent in expected.
    Extra { path: JsonPath, actual: JsonValue },
    /// Present on both sides but not structurally equal.
    Mismatch {
        path: JsonPath,
        expected: JsonValue,
        actual: JsonValue,
    },
}

impl DiffEntry {
    pub fn path(&self) -> &JsonPath {
        match self {
            Self::Missing { path, .. } | Self::Extra { path, .. } | Self::Mismatch { path, .. } => {
                path
            }
        }
    }

    pub fn kind(&self) -> DiffKind {
        match self {
            Self::Missing { .. } => DiffKind::Missing,
            Self::Extra { .. } => DiffKind::Extra,
            Self::Mismatch { .. } => DiffKind::Mismatch,
        }
    }

    /// The expected-side value, if the entry carries one.
    pub fn expected(&self) -> Option<&JsonValue> {
        match self {
            Self::Missing { expected, .. } | Self::Mismatch { expected, .. } => Some(expected),
            Self::Extra { .. } => None,
        }
    }

    /// The actual-side value, if the entry carries one.
    pub fn actual(&self) -> Option<&JsonValue> {
        match self {
            Self::Extra { actual, .. } | Self::Mismatch { actual, .. } => Some(actual),
            Self::Missing { .. } => None,
        }
    }

    fn mismatch(path: &JsonPath, expected: &JsonValue, actual: &JsonValue) -> Self {
        Self::Mismatch {
            path: path.clone(),
            expected: expected.clone(),
            actual: actual.clone(),
        }
    }
}

/// Compute the structural diff between two documents, starting at the root.
pub fn diff_values(expected: &JsonValue, actual: &JsonValue) -> StructuralDiff {
    let mut entries = Vec::new();
    diff_at(expected, actual, &JsonPath::root(), &mut entries);
    StructuralDiff { entries }
}

/// Compare two values located at `path`, appending differences to `out`.
///
/// A list compared with a non-list, or an object compared with a non-object,
/// yields a single `Mismatch` carrying both full values without descending.
pub fn diff_at(
    expected: &JsonValue,
    actual: &JsonValue,
    path: &JsonPath,
    out: &mut Vec<DiffEntry>,
) {
    match (expected, actual) {
        (JsonValue::List(exp_items), JsonValue::List(act_items)) => {
            diff_lists(exp_items, act_items, path, out);
        }
        (JsonValue::List(_), _) | (_, JsonValue::List(_)) => {
            out.push(DiffEntry::mismatch(path, expected, actual));
        }
        (JsonValue::Object(exp_map), JsonValue::Object(act_map)) => {
            // Expected's keys in order, then keys only actual has.
            let keys = exp_map
                .keys()
                .chain(act_map.keys().filter(|k| !exp_map.contains_key(*k)));

            for key in keys {
                let next = path.key(key);
                match (exp_map.get(key), act_map.get(key)) {
                    (Some(exp), Some(act)) => diff_at(exp, act, &next, out),
                    (Some(exp), None) => out.push(DiffEntry::Missing {
                        path: next,
                        expected: exp.clone(),
                    }),
                    (None, Some(act)) => out.push(DiffEntry::Extra {
                        path: next,
                        actual: act.clone(),
                    }),
                    (None, None) => {}
                }
            }
        }
        (JsonValue::Object(_), _) | (_, JsonValue::Object(_)) => {
            out.push(DiffEntry::mismatch(path, expected, actual));
        }
        _ if expected == actual => {}
        _ => out.push(DiffEntry::mismatch(path, expected, actual)),
    }
}

fn diff_lists(
    expected: &[JsonValue],
    actual: &[JsonValue],
    path: &JsonPath,
    out: &mut Vec<DiffEntry>,
) {
    let max_len = expected.len().max(actual.len());

    for index in 0..max_len {
        let next = path.index(index);
        match (expected.get(index), actual.get(index)) {
            (Some(exp), Some(act)) => diff_at(exp, act, &next, out),
            (Some(exp), None) => out.push(DiffEntry::Missing {
                path: next,
                expected: exp.clone(),
            }),
            (None, Some(act)) => out.push(DiffEntry::Extra {
                path: next,
                actual: act.clone(),
            }),
            (None, None) => {}
        }
    }
}
