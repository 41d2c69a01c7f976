//! Error types for ignore-path handling.

use jsoncmp_types::{JsonPath, ValueKind};
use thiserror::Error;

/// Errors raised while reading an ignore configuration.
#[derive(Debug, Error)]
pub enum IgnoreError {
    /// The configuration text is not valid JSON.
    #[error("Invalid configuration JSON: unable to parse configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// An `ignore_paths` entry is not an array of strings.
    #[error("\"ignore_paths\" must be an array of strings (found {found} at {location})")]
    NotStringArray { location: JsonPath, found: ValueKind },
}

/// Errors raised while parsing a single ignore-path expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("empty ignore path")]
    Empty,

    /// A `.` with nothing before or after it.
    #[error("empty property name at offset {offset}")]
    EmptySegment { offset: usize },

    /// `[]` with no content.
    #[error("empty index at offset {offset}")]
    EmptyIndex { offset: usize },

    /// Bracket content that is neither digits nor `*`.
    #[error("invalid index {text:?} at offset {offset}")]
    InvalidIndex { text: String, offset: usize },

    #[error("unterminated '[' at offset {offset}")]
    UnterminatedBracket { offset: usize },

    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
}

/// Convenience alias for configuration handling.
pub type Result<T> = std::result::Result<T, IgnoreError>;
