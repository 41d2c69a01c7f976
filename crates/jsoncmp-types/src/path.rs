//! Document paths as reported in difference entries.
//!
//! A path is built by appending `.key` for object fields and `[index]` for
//! list elements. The root is the empty path and displays as `root`.

use std::fmt;

use serde::{Serialize, Serializer};

/// Label used whenever the root path has to be named.
pub const ROOT_LABEL: &str = "root";

/// A dotted/bracketed location inside a JSON document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsonPath(String);

impl JsonPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of an object field below this path.
    pub fn key(&self, key: &str) -> Self {
        if self.is_root() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Path of a list element below this path.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// The raw path text; empty for the root.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str(ROOT_LABEL)
        } else {
            f.write_str(&self.0)
        }
    }
}

impl Serialize for JsonPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_displays_label() {
        let root = JsonPath::root();
        assert!(root.is_root());
        assert_eq!(root.as_str(), "");
        assert_eq!(root.to_string(), "root");
    }

    #[test]
    fn key_at_root_has_no_leading_dot() {
        assert_eq!(JsonPath::root().key("item").as_str(), "item");
    }

    #[test]
    fn index_at_root_is_bare_brackets() {
        assert_eq!(JsonPath::root().index(3).as_str(), "[3]");
    }

    #[test]
    fn nested_segments_concatenate() {
        let path = JsonPath::root().key("items").index(1).key("price");
        assert_eq!(path.to_string(), "items[1].price");
    }

    #[test]
    fn serializes_as_display_text() {
        let json = serde_json::to_string(&JsonPath::root().key("a").index(0)).unwrap();
        assert_eq!(json, "\"a[0]\"");
        assert_eq!(serde_json::to_string(&JsonPath::root()).unwrap(), "\"root\"");
    }
}
