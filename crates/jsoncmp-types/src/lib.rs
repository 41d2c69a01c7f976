//! Foundation types for jsoncmp.
//!
//! Every other jsoncmp crate depends on `jsoncmp-types` for the shared value
//! model and for the path strings used in difference reports.
//!
//! # Key Types
//!
//! - [`JsonValue`] -- Closed sum type over JSON values with ordered objects
//! - [`ValueKind`] -- Payload-free variant tag, used in logs and messages
//! - [`JsonPath`] -- Dotted/bracketed document location (`items[1].price`)

pub mod path;
pub mod value;

pub use path::{JsonPath, ROOT_LABEL};
pub use value::{JsonValue, Map, ValueKind};
