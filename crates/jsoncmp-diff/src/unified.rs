//! Unified-diff rendering of two JSON documents.
//!
//! Both documents are serialized to canonical pretty JSON and compared line by
//! line with the `similar` crate (Myers diff). The context radius always
//! covers the longer document, so the output is one hunk showing the complete
//! before/after text rather than isolated changes.

use std::fmt;

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

use jsoncmp_types::JsonValue;

use crate::error::Result;
use crate::structural::StructuralDiff;

/// Labels used in the `---`/`+++` header lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// File label for the expected document.
    pub expected_label: String,
    /// File label for the actual document.
    pub actual_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            expected_label: "expected.json".into(),
            actual_label: "actual.json".into(),
        }
    }
}

/// A rendered unified diff with line statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnifiedDiff {
    text: String,
    additions: usize,
    deletions: usize,
}

impl UnifiedDiff {
    /// The "no diff to show" value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of `+` lines.
    pub fn additions(&self) -> usize {
        self.additions
    }

    /// Number of `-` lines.
    pub fn deletions(&self) -> usize {
        self.deletions
    }
}

impl fmt::Display for UnifiedDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Classification of a line of unified-diff text, for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// `---` or `+++` file header.
    Header,
    /// `@@ ... @@` hunk marker.
    Hunk,
    Added,
    Removed,
    Context,
}

impl LineKind {
    /// Classify one line of rendered diff text.
    pub fn of(line: &str) -> Self {
        if line.starts_with("---") || line.starts_with("+++") {
            Self::Header
        } else if line.starts_with("@@") {
            Self::Hunk
        } else if line.starts_with('+') {
            Self::Added
        } else if line.starts_with('-') {
            Self::Removed
        } else {
            Self::Context
        }
    }
}

/// Render the unified diff between two documents.
///
/// Returns [`UnifiedDiff::empty`] when `structural` has no entries, even if
/// the canonical texts differ in formatting only (e.g. object key order).
pub fn render_unified_diff(
    expected: &JsonValue,
    actual: &JsonValue,
    structural: &StructuralDiff,
    options: &RenderOptions,
) -> Result<UnifiedDiff> {
    if structural.is_empty() {
        return Ok(UnifiedDiff::empty());
    }

    let expected_text = canonical_text(expected)?;
    let actual_text = canonical_text(actual)?;

    let context = expected_text.lines().count().max(actual_text.lines().count());
    let text_diff = TextDiff::from_lines(expected_text.as_str(), actual_text.as_str());

    let mut additions = 0usize;
    let mut deletions = 0usize;
    for change in text_diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => additions += 1,
            ChangeTag::Delete => deletions += 1,
            ChangeTag::Equal => {}
        }
    }

    let text = text_diff
        .unified_diff()
        .context_radius(context)
        .header(&options.expected_label, &options.actual_label)
        .to_string();

    Ok(UnifiedDiff {
        text,
        additions,
        deletions,
    })
}

/// Pretty JSON terminated by a newline, so the final line diffs like any other.
fn canonical_text(value: &JsonValue) -> Result<String> {
    let mut text = value.to_pretty_string()?;
    text.push('\n');
    Ok(text)
}
