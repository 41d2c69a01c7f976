//! Discovery of ignore paths inside a configuration document.
//!
//! A configuration is any JSON document. Every array stored under a key named
//! `ignore_paths`, at any depth, contributes its strings to the ignore set.

use indexmap::IndexSet;
use tracing::{debug, warn};

use jsoncmp_types::{JsonPath, JsonValue};

use crate::error::{IgnoreError, Result};
use crate::pattern::{parse_pattern, Pattern};

/// Key under which ignore-path arrays are found.
pub const IGNORE_PATHS_KEY: &str = "ignore_paths";

/// Deduplicated ignore-path strings in first-collected order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnorePaths {
    paths: IndexSet<String>,
}

impl IgnorePaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path. Surrounding whitespace is trimmed and empty strings are
    /// dropped. Returns `true` if the path was not already present.
    pub fn insert(&mut self, path: &str) -> bool {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.paths.insert(trimmed.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Parse every path, skipping (and logging) those that do not parse.
    pub fn patterns(&self) -> Vec<Pattern> {
        self.paths
            .iter()
            .filter_map(|raw| match parse_pattern(raw) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(path = %raw, error = %e, "skipping unparsable ignore path");
                    None
                }
            })
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for IgnorePaths {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut paths = Self::new();
        for path in iter {
            paths.insert(path);
        }
        paths
    }
}

/// Collect ignore paths from optional configuration text.
///
/// Absent or blank text yields an empty set. Otherwise the text must be JSON,
/// and every `ignore_paths` value found must be an array of strings.
pub fn collect_ignore_paths(config: Option<&str>) -> Result<IgnorePaths> {
    let text = match config {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Ok(IgnorePaths::new()),
    };

    let document = JsonValue::parse(text).map_err(IgnoreError::Parse)?;
    let paths = collect_from_value(&document)?;
    debug!(count = paths.len(), "collected ignore paths");
    Ok(paths)
}

/// Collect ignore paths from an already-parsed configuration document.
pub fn collect_from_value(document: &JsonValue) -> Result<IgnorePaths> {
    let mut paths = IgnorePaths::new();
    walk(document, &JsonPath::root(), &mut paths)?;
    Ok(paths)
}

fn walk(node: &JsonValue, location: &JsonPath, paths: &mut IgnorePaths) -> Result<()> {
    match node {
        JsonValue::Object(map) => {
            for (key, value) in map {
                let child = location.key(key);
                if key == IGNORE_PATHS_KEY {
                    take_paths(value, &child, paths)?;
                } else {
                    walk(value, &child, paths)?;
                }
            }
        }
        JsonValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(item, &location.index(index), paths)?;
            }
        }
        JsonValue::Null | JsonValue::Boolean(_) | JsonValue::Number(_) | JsonValue::String(_) => {}
    }
    Ok(())
}

fn take_paths(value: &JsonValue, location: &JsonPath, paths: &mut IgnorePaths) -> Result<()> {
    let items = value.as_list().ok_or_else(|| IgnoreError::NotStringArray {
        location: location.clone(),
        found: value.kind(),
    })?;

    for (index, item) in items.iter().enumerate() {
        match item {
            JsonValue::String(path) => {
                paths.insert(path);
            }
            other => {
                return Err(IgnoreError::NotStringArray {
                    location: location.index(index),
                    found: other.kind(),
                })
            }
        }
    }
    Ok(())
}
