//! Diff engine for jsoncmp.
//!
//! Compares two JSON documents structurally, producing an ordered list of
//! typed difference entries, and renders the pair as a full-context unified
//! diff for human review.
//!
//! This crate knows nothing about ignore paths: callers redact documents
//! before handing them in.
//!
//! # Key Types
//!
//! - [`StructuralDiff`] / [`DiffEntry`] / [`DiffKind`] -- Path-addressed structural differences
//! - [`UnifiedDiff`] / [`RenderOptions`] / [`LineKind`] -- Line-level text rendering

pub mod error;
pub mod structural;
pub mod unified;

pub use error::{DiffError, Result};
pub use structural::{diff_at, diff_values, DiffEntry, DiffKind, StructuralDiff};
pub use unified::{render_unified_diff, LineKind, RenderOptions, UnifiedDiff};
