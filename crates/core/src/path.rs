//! Paths into nested values
//!
//! A [`Path`] is an ordered sequence of [`PathSegment`]s. Each segment is
//! either a field name or an array index. The empty path (root) denotes the
//! stored value itself.
//!
//! ## Text Syntax
//!
//! | Text | Segments |
//! |------|----------|
//! | `""`, `"$"` | root |
//! | `"user.name"` | `Key("user")`, `Key("name")` |
//! | `"items[2].id"` | `Key("items")`, `Index(2)`, `Key("id")` |
//! | `"$.items[0]"` | `Key("items")`, `Index(0)` |
//!
//! ## Building
//!
//! ```
//! use mapstore_core::{Path, PathSegment};
//!
//! let path = Path::root().key("items").index(2).key("id");
//! assert_eq!(path.len(), 3);
//! assert_eq!(path, "items[2].id".parse::<Path>().unwrap());
//! assert_eq!(path.segments()[1], PathSegment::Index(2));
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// One step of a [`Path`].
///
/// Serializes untagged, so a path reads as a JSON array such as `["a", 0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Array position
    Index(usize),
    /// Object field name
    Key(String),
}

impl PathSegment {
    /// Array position addressed by this segment, if any.
    ///
    /// `Key` segments count as positions only when they are canonical
    /// decimal numbers (`"0"`, `"17"`, but not `"01"` or `"+1"`).
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(i) => Some(*i),
            PathSegment::Key(k) => parse_canonical_index(k),
        }
    }

    /// Field name addressed by this segment. Indexes render as decimal text.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            PathSegment::Key(k) => Cow::Borrowed(k),
            PathSegment::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    /// Check if this is an `Index` segment
    pub fn is_index(&self) -> bool {
        matches!(self, PathSegment::Index(_))
    }
}

fn parse_canonical_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        PathSegment::Key(s.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(s: String) -> Self {
        PathSegment::Key(s)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        PathSegment::Index(i)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{}", k),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// An ordered sequence of segments addressing a location inside a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path, addressing the value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Append a field segment.
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(name.into()));
        self
    }

    /// Append an index segment.
    pub fn index(mut self, i: usize) -> Self {
        self.segments.push(PathSegment::Index(i));
        self
    }

    /// Append any segment in place.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    /// The segments in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Iterate over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Alias for [`Path::is_empty`].
    pub fn is_root(&self) -> bool {
        self.is_empty()
    }

    /// The path without its last segment, or `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        let (_, rest) = self.segments.split_last()?;
        Some(Path {
            segments: rest.to_vec(),
        })
    }

    /// The last segment, or `None` at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path { segments }
    }
}

impl<S: Into<PathSegment>, const N: usize> From<[S; N]> for Path {
    fn from(segments: [S; N]) -> Self {
        segments.into_iter().map(Into::into).collect()
    }
}

/// Renders the text syntax, `$` for the root.
///
/// Keys are written as-is. A key containing `.`, `[` or `]`, an empty key,
/// or a key that starts with `$` does not parse back to the same segments,
/// so the text form is for display and logs; use the serde form to
/// round-trip arbitrary paths.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "$");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && !segment.is_index() {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let body = match s.strip_prefix('$') {
            Some(rest) => rest.strip_prefix('.').unwrap_or(rest),
            None => s,
        };

        let invalid = |reason: &str| Error::InvalidPath(format!("{:?}: {}", s, reason));

        let mut segments = Vec::new();
        let mut chars = body.char_indices().peekable();
        let mut expect_key = true;

        while let Some(&(start, c)) = chars.peek() {
            match c {
                '[' => {
                    chars.next();
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some((_, ']')) => break,
                            Some((_, d)) if d.is_ascii_digit() => digits.push(d),
                            Some(_) => return Err(invalid("index must be a decimal number")),
                            None => return Err(invalid("unclosed '['")),
                        }
                    }
                    let index = digits
                        .parse()
                        .map_err(|_| invalid("index must be a decimal number"))?;
                    segments.push(PathSegment::Index(index));
                    expect_key = false;
                }
                '.' => {
                    if expect_key {
                        return Err(invalid("empty field name"));
                    }
                    chars.next();
                    expect_key = true;
                    if chars.peek().is_none() {
                        return Err(invalid("trailing '.'"));
                    }
                }
                ']' => return Err(invalid("unexpected ']'")),
                _ => {
                    if !expect_key {
                        return Err(invalid("missing '.' before field name"));
                    }
                    let mut end = body.len();
                    while let Some(&(i, c)) = chars.peek() {
                        if c == '.' || c == '[' || c == ']' {
                            end = i;
                            break;
                        }
                        chars.next();
                    }
                    segments.push(PathSegment::Key(body[start..end].to_string()));
                    expect_key = false;
                }
            }
        }

        Ok(Path { segments })
    }
}

// ============================================================================
// Tests
// ============================================================================
