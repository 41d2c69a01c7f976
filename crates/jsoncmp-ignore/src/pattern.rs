//! Ignore-path expressions.
//!
//! Grammar:
//! - A pattern is a property name or an index, followed by any number of
//!   `.name` or `[index]` segments
//! - An index is a run of ASCII digits or the wildcard `*`
//! - Property names are any run of characters other than `.`, `[` and `]`
//! - Leading, trailing or doubled dots and empty brackets are rejected
//!
//! Examples: `success.price.tax`, `success.prices[*].price.tax`, `[0].id`.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

/// Which list elements an index segment selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexSelector {
    /// A single position.
    At(usize),
    /// Every element (`[*]`).
    Wildcard,
}

/// One step of a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Property(String),
    /// A list position or wildcard.
    Index(IndexSelector),
}

/// A parsed ignore-path expression. Always holds at least one segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    segments: Vec<PathSegment>,
}

impl Pattern {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Property(key) if i == 0 => f.write_str(key)?,
                PathSegment::Property(key) => write!(f, ".{key}")?,
                PathSegment::Index(IndexSelector::At(n)) => write!(f, "[{n}]")?,
                PathSegment::Index(IndexSelector::Wildcard) => f.write_str("[*]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pattern(s)
    }
}

/// Where the parser is relative to the last segment it produced.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    Start,
    AfterDot,
    AfterSegment,
}

/// Parse an ignore-path expression.
///
/// # Examples
///
/// ```
/// use jsoncmp_ignore::pattern::{parse_pattern, IndexSelector, PathSegment};
///
/// let pattern = parse_pattern("prices[*].tax").unwrap();
/// assert_eq!(
///     pattern.segments(),
///     &[
///         PathSegment::Property("prices".into()),
///         PathSegment::Index(IndexSelector::Wildcard),
///         PathSegment::Property("tax".into()),
///     ]
/// );
/// assert!(parse_pattern("prices[]").is_err());
/// assert!(parse_pattern(".prices").is_err());
/// ```
pub fn parse_pattern(text: &str) -> Result<Pattern, PatternError> {
    if text.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut segments = Vec::new();
    let mut position = Position::Start;
    let mut chars = text.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        match ch {
            '.' => {
                if position != Position::AfterSegment {
                    return Err(PatternError::EmptySegment { offset });
                }
                chars.next();
                position = Position::AfterDot;
            }
            '[' => {
                if position == Position::AfterDot {
                    return Err(PatternError::EmptySegment { offset });
                }
                chars.next();
                let mut content = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    content.push(c);
                }
                if !closed {
                    return Err(PatternError::UnterminatedBracket { offset });
                }
                segments.push(PathSegment::Index(parse_index(&content, offset)?));
                position = Position::AfterSegment;
            }
            ']' => return Err(PatternError::UnexpectedCharacter { ch, offset }),
            _ => {
                // A name directly after `]` needs a dot: `a[0]b` is invalid.
                if position == Position::AfterSegment {
                    return Err(PatternError::UnexpectedCharacter { ch, offset });
                }
                let mut name = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if matches!(c, '.' | '[' | ']') {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                segments.push(PathSegment::Property(name));
                position = Position::AfterSegment;
            }
        }
    }

    if position == Position::AfterDot {
        return Err(PatternError::EmptySegment { offset: text.len() });
    }

    Ok(Pattern { segments })
}

fn parse_index(content: &str, offset: usize) -> Result<IndexSelector, PatternError> {
    if content.is_empty() {
        return Err(PatternError::EmptyIndex { offset });
    }
    if content == "*" {
        return Ok(IndexSelector::Wildcard);
    }
    if !content.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PatternError::InvalidIndex {
            text: content.to_string(),
            offset,
        });
    }
    content
        .parse::<usize>()
        .map(IndexSelector::At)
        .map_err(|_| PatternError::InvalidIndex {
            text: content.to_string(),
            offset,
        })
}
