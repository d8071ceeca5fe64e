//! Path expressions for reaching into nested values.
//!
//! A path expression is a string such as `"servers[0].host"`. It is split on
//! the delimiters `.`, `[` and `]`, which all behave the same way: each one
//! closes the current segment and opens a new one. Brackets are therefore
//! sugar for readability only. `"a[1]"`, `"a.1"` and `"a]1["` are the same
//! path.
//!
//! Parsing is total. Every string is a valid path, and nothing is
//! validated. Consecutive, leading or trailing delimiters produce empty
//! segments; [`Path::segments`] keeps them and [`Path::steps`] skips them,
//! which is what traversal uses.
//!
//! # Examples
//!
//! ```
//! use nested::path::{Path, split};
//!
//! assert_eq!(split("a.b[2].c"), vec!["a", "b", "2", "", "c"]);
//! assert_eq!(split(""), vec![""]);
//!
//! let path = Path::parse("a.b[2].c");
//! let steps: Vec<&str> = path.steps().map(|s| s.as_key()).collect();
//! assert_eq!(steps, vec!["a", "b", "2", "c"]);
//! assert_eq!(path.depth(), 4);
//! ```

use std::fmt;

/// Characters that separate path segments.
pub const DELIMITERS: [char; 3] = ['.', '[', ']'];

/// Splits a path expression into its raw segments, empty ones included.
///
/// There is always at least one segment.
pub fn split(path: &str) -> Vec<&str> {
    Path::parse(path).segments().collect()
}

/// A parsed path expression, borrowing the original string.
///
/// `Path` is `Copy` and cheap to construct; segments are produced lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Path<'a> {
    raw: &'a str,
}

/// One non-empty step of a path.
///
/// A segment is always usable as a key. It is additionally usable as a list
/// index when it parses as a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a>(&'a str);

impl<'a> Path<'a> {
    /// The empty path, which resolves to the root itself.
    pub const ROOT: Path<'static> = Path { raw: "" };

    /// Parses a path expression. Never fails.
    pub const fn parse(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Returns the original expression
    pub fn as_str(self) -> &'a str {
        self.raw
    }

    /// Returns every segment in order, including empty ones.
    pub fn segments(self) -> impl Iterator<Item = &'a str> {
        self.raw.split(DELIMITERS)
    }

    /// Returns the non-empty segments in traversal order.
    pub fn steps(self) -> impl Iterator<Item = Segment<'a>> {
        self.segments()
            .filter(|segment| !segment.is_empty())
            .map(Segment)
    }

    /// Returns the number of non-empty segments
    pub fn depth(self) -> usize {
        self.steps().count()
    }

    /// Returns true if the path has no non-empty segments.
    pub fn is_root(self) -> bool {
        self.steps().next().is_none()
    }
}

impl<'a> Segment<'a> {
    /// Returns the segment as a map key or field name
    pub fn as_key(self) -> &'a str {
        self.0
    }

    /// Returns the segment as a list index, if it is a non-negative integer.
    ///
    /// Negative numbers and numbers beyond `usize` are not indices.
    pub fn as_index(self) -> Option<usize> {
        self.0.parse().ok()
    }
}

impl<'a> From<&'a str> for Path<'a> {
    fn from(raw: &'a str) -> Self {
        Path::parse(raw)
    }
}

impl AsRef<str> for Path<'_> {
    fn as_ref(&self) -> &str {
        self.raw
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.raw)
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
