//! Ignore-path language for jsoncmp.
//!
//! Ignore paths name parts of a document that must not count as differences,
//! such as timestamps or generated identifiers. They are collected from a JSON
//! configuration document, parsed into patterns, and applied to private copies
//! of the documents before they reach the differ.
//!
//! # Key Types
//!
//! - [`Pattern`] / [`PathSegment`] / [`IndexSelector`] -- Parsed ignore-path expressions
//! - [`IgnorePaths`] -- Deduplicated path strings discovered in a configuration
//! - [`IgnoreRules`] -- Compiled patterns that produce redacted copies

pub mod config;
pub mod error;
pub mod pattern;
pub mod redact;

pub use config::{collect_from_value, collect_ignore_paths, IgnorePaths, IGNORE_PATHS_KEY};
pub use error::{IgnoreError, PatternError, Result};
pub use pattern::{parse_pattern, IndexSelector, PathSegment, Pattern};
pub use redact::{apply_ignore_patterns, IgnoreRules};
