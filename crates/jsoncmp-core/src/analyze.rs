//! The analysis pipeline.
//!
//! payload text → envelope → redaction (per side) → structural diff → unified
//! diff. The result reports the original documents, the differences found
//! between the redacted copies, and the rendered text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use jsoncmp_diff::{diff_values, render_unified_diff, DiffEntry, RenderOptions};
use jsoncmp_ignore::{collect_ignore_paths, IgnoreRules};
use jsoncmp_types::JsonValue;

use crate::envelope::{extract_envelope, Envelope};
use crate::error::{AnalyzeError, Result};

/// Options for an [`Analyzer`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Unified-diff rendering options.
    pub render: RenderOptions,
}

/// The outcome of one analysis call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    /// The expected document as given, before redaction.
    pub expected: JsonValue,
    /// The actual document as given, before redaction.
    pub actual: JsonValue,
    /// Differences between the redacted documents, in traversal order.
    pub differences: Vec<DiffEntry>,
    /// Full-context unified diff; empty when there are no differences.
    pub unified_diff: String,
    /// Number of `+` lines in the unified diff.
    pub additions: usize,
    /// Number of `-` lines in the unified diff.
    pub deletions: usize,
}

impl DiffResult {
    /// Returns `true` when no differences were found.
    pub fn is_match(&self) -> bool {
        self.differences.is_empty()
    }
}

/// Runs analyses with a fixed set of options.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    options: AnalyzeOptions,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    /// Analyze a payload, optionally suppressing paths named by `config`.
    pub fn analyze(&self, payload: &str, config: Option<&str>) -> Result<DiffResult> {
        let document = JsonValue::parse(payload).map_err(AnalyzeError::MalformedInput)?;
        let envelope = extract_envelope(document)?;
        let rules = IgnoreRules::from_paths(&collect_ignore_paths(config)?);
        self.analyze_envelope(envelope, &rules)
    }

    /// Compare an already-extracted pair under the given rules.
    pub fn analyze_envelope(&self, envelope: Envelope, rules: &IgnoreRules) -> Result<DiffResult> {
        let Envelope {
            expected,
            actual,
            nested,
        } = envelope;

        let redacted_expected = rules.apply(&expected);
        let redacted_actual = rules.apply(&actual);

        let structural = diff_values(&redacted_expected, &redacted_actual);
        let unified = render_unified_diff(
            &redacted_expected,
            &redacted_actual,
            &structural,
            &self.options.render,
        )?;

        debug!(
            differences = structural.len(),
            missing = structural.missing(),
            extra = structural.extra(),
            mismatches = structural.mismatches(),
            patterns = rules.patterns().len(),
            nested,
            additions = unified.additions(),
            deletions = unified.deletions(),
            "analysis complete"
        );

        let additions = unified.additions();
        let deletions = unified.deletions();
        Ok(DiffResult {
            expected,
            actual,
            differences: structural.entries,
            unified_diff: unified.into_string(),
            additions,
            deletions,
        })
    }
}

/// Analyze a payload with default options.
pub fn analyze(payload: &str, config: Option<&str>) -> Result<DiffResult> {
    Analyzer::new().analyze(payload, config)
}
