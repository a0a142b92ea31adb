//! Span module - Source location tracking.
//!
//! Source text reaches the compiler as a sequence of physical lines, so a
//! location is a line index plus a half-open byte range inside that line.
//!
//! # Examples
//!
//! ```
//! use prelim_util::span::Span;
//!
//! let span = Span::new(2, 4, 7);
//! assert_eq!(span.line_number(), 3);
//! assert_eq!(span.column(), 5);
//! assert_eq!(span.len(), 3);
//! ```

use std::fmt;

/// A half-open byte range `[begin, end)` on one physical line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Zero-based line index.
    pub line: usize,
    /// Start byte offset within the line (inclusive).
    pub begin: usize,
    /// End byte offset within the line (exclusive).
    pub end: usize,
}

impl Span {
    /// Placeholder span for diagnostics without a location.
    pub const DUMMY: Span = Span {
        line: 0,
        begin: 0,
        end: 0,
    };

    /// Create a new span.
    #[inline]
    pub const fn new(line: usize, begin: usize, end: usize) -> Self {
        Self { line, begin, end }
    }

    /// Create an empty span at a single position.
    #[inline]
    pub const fn point(line: usize, offset: usize) -> Self {
        Self::new(line, offset, offset)
    }

    /// One-based line number, as shown to users.
    #[inline]
    pub const fn line_number(&self) -> usize {
        self.line + 1
    }

    /// One-based column of the first byte.
    #[inline]
    pub const fn column(&self) -> usize {
        self.begin + 1
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for [`Span::DUMMY`].
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_number(), self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(1, 3, 8);
        assert_eq!(span.line, 1);
        assert_eq!(span.begin, 3);
        assert_eq!(span.end, 8);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(0, 4);
        assert!(span.is_empty());
        assert_eq!(span.column(), 5);
    }

    #[test]
    fn test_span_display_is_one_based() {
        assert_eq!(Span::new(0, 0, 1).to_string(), "1:1");
        assert_eq!(Span::new(9, 12, 13).to_string(), "10:13");
    }

    #[test]
    fn test_dummy() {
        assert!(Span::DUMMY.is_dummy());
        assert!(!Span::new(0, 0, 1).is_dummy());
    }
}
