//! Per-line lexer state.
//!
//! [`LineLexer`] wraps a [`Cursor`] over one physical line. Each
//! sub-scanner is a method in its own module; on a match it advances the
//! cursor past the match, otherwise it leaves the cursor where it was.

use crate::chars::is_whitespace;
use crate::cursor::Cursor;
use crate::token::Lexeme;

/// Sub-scanner host for a single line.
///
/// # Example
///
/// ```
/// use prelim_lex::lexer::LineLexer;
/// use prelim_lex::token::NumberKind;
///
/// let mut lexer = LineLexer::new("0x1F + y");
/// assert_eq!(lexer.scan_number(), Some(NumberKind::Hex));
/// assert_eq!(lexer.position(), 4);
/// assert_eq!(lexer.scan_whitespace(), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct LineLexer<'a> {
    /// Cursor over the line being scanned.
    pub cursor: Cursor<'a>,
}

impl<'a> LineLexer<'a> {
    /// Starts at the beginning of `text`.
    pub fn new(text: &'a str) -> Self {
        Self::at(text, 0)
    }

    /// Starts at byte `offset` of `text`.
    pub fn at(text: &'a str, offset: usize) -> Self {
        Self {
            cursor: Cursor::at(text, offset),
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once the whole line is consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Lexeme from `begin` to the current position.
    #[inline]
    pub fn lexeme_from(&self, begin: usize) -> Lexeme {
        Lexeme::new(begin, self.position())
    }

    /// Consumes a run of whitespace and returns its length.
    pub fn scan_whitespace(&mut self) -> Option<usize> {
        match self.cursor.eat_while(is_whitespace) {
            0 => None,
            n => Some(n),
        }
    }
}
