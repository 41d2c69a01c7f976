//! Error types for analysis.

use thiserror::Error;

use jsoncmp_diff::DiffError;
use jsoncmp_ignore::IgnoreError;
use jsoncmp_types::ValueKind;

/// Errors that end an analysis call. No partial result is produced.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The payload text is not valid JSON.
    #[error("Invalid JSON: unable to parse input ({0})")]
    MalformedInput(#[source] serde_json::Error),

    /// The payload parsed, but its top level is not an object.
    #[error("Parsed input must be a JSON object, found {0}")]
    NotAnObject(ValueKind),

    /// The envelope lacks `expected`, `actual`, or both.
    #[error(
        "Input JSON must include \"expected\" and \"actual\" sections either at the root or inside \"compare_item\" (missing {missing})"
    )]
    MissingSections { missing: String },

    /// The ignore configuration is unusable.
    #[error(transparent)]
    InvalidConfig(#[from] IgnoreError),

    /// Rendering the unified diff failed.
    #[error("render error: {0}")]
    Render(#[from] DiffError),
}

/// Coarse classification of [`AnalyzeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    MissingSections,
    InvalidConfig,
    Render,
}

impl AnalyzeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput(_) | Self::NotAnObject(_) => ErrorKind::MalformedInput,
            Self::MissingSections { .. } => ErrorKind::MissingSections,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::Render(_) => ErrorKind::Render,
        }
    }
}

/// Convenience alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
