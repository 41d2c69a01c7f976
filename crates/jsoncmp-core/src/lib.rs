//! Analysis entry point for jsoncmp.
//!
//! Takes raw payload text holding an `expected`/`actual` pair (at the root or
//! inside `compare_item`) plus optional ignore configuration, and produces a
//! [`DiffResult`]: the original documents, the structural differences between
//! their redacted copies, and a full-context unified diff.
//!
//! Calls are pure and independent; they may run concurrently on any thread.
//!
//! # Key Types
//!
//! - [`analyze`] / [`Analyzer`] / [`AnalyzeOptions`] -- Entry points
//! - [`DiffResult`] -- Outcome consumed by presentation layers
//! - [`Envelope`] -- The extracted `expected`/`actual` pair
//! - [`AnalyzeError`] / [`ErrorKind`] -- Terminal failures

pub mod analyze;
pub mod envelope;
pub mod error;

pub use analyze::{analyze, AnalyzeOptions, Analyzer, DiffResult};
pub use envelope::{extract_envelope, Envelope, ACTUAL_KEY, COMPARE_ITEM_KEY, EXPECTED_KEY};
pub use error::{AnalyzeError, ErrorKind, Result};

pub use jsoncmp_diff::{DiffEntry, DiffKind, LineKind, RenderOptions};
pub use jsoncmp_types::{JsonPath, JsonValue};
