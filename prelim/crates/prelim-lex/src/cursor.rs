//! Byte cursor over one physical source line.
//!
//! The scanner never looks past the end of the line it is working on, so the
//! cursor is bounded by a single line and tracks only a byte position.
//! Sub-scanners take a [`CursorSnapshot`] before speculative reads and
//! restore it when they do not match.

/// A cursor for traversing one line byte by byte.
///
/// # Example
///
/// ```
/// use prelim_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x >>= 1");
/// assert_eq!(cursor.current_byte(), Some(b'x'));
/// cursor.advance();
/// assert_eq!(cursor.peek_byte(1), Some(b'>'));
/// assert_eq!(cursor.position(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a [u8],
    position: usize,
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Creates a cursor at byte `position` of `source`, clamped to its end.
    pub fn at(source: &'a str, position: usize) -> Self {
        let source = source.as_bytes();
        Self {
            source,
            position: position.min(source.len()),
        }
    }

    /// The byte under the cursor, or `None` at end of line.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    /// The byte `offset` bytes past the cursor.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// The last byte of the line.
    #[inline]
    pub fn last_byte(&self) -> Option<u8> {
        self.source.last().copied()
    }

    /// Advances by one byte. Does nothing at end of line.
    #[inline]
    pub fn advance(&mut self) {
        if self.position < self.source.len() {
            self.position += 1;
        }
    }

    /// Advances by `count` bytes, stopping at end of line.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Moves to the end of the line.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.position = self.source.len();
    }

    /// Consumes the current byte if it equals `expected`.
    #[inline]
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current_byte() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `predicate` holds and returns how many were taken.
    pub fn eat_while(&mut self, predicate: impl Fn(u8) -> bool) -> usize {
        let start = self.position;
        while let Some(b) = self.current_byte() {
            if !predicate(b) {
                break;
            }
            self.position += 1;
        }
        self.position - start
    }

    /// Absolute offset of the first occurrence of `needle` at or after the
    /// cursor.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(self.position);
        }
        self.remaining()
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|offset| self.position + offset)
    }

    /// Returns true at end of line.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the line in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns true for an empty line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Bytes from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start.min(self.position)..self.position]
    }

    /// Bytes from the cursor to the end of the line.
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position..]
    }

    /// Saves the current position.
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
        }
    }

    /// Returns to a saved position.
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
    }
}
