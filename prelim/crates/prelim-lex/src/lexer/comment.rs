//! Comments and the division operators.
//!
//! `/` starts five different things, so comments and division are
//! disambiguated here rather than in the operator tree.

use super::LineLexer;
use crate::chars::LINE_CONTINUATION;
use crate::token::Operator;

/// What a `/` turned out to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentScan {
    /// `/` or `/=`
    Operator(Operator),
    /// `//` running to the end of the line. `continued` is set when the
    /// line ends in a continuation mark.
    Line { continued: bool },
    /// `/* ... */` closed on the same line.
    Block,
    /// `/*` with no `*/` on this line. Runs to the end of the line.
    OpenBlock,
}

impl<'a> LineLexer<'a> {
    /// Scans a comment or division operator at a `/`.
    pub fn scan_comment(&mut self) -> Option<CommentScan> {
        if self.cursor.current_byte() != Some(b'/') {
            return None;
        }

        let scan = match self.cursor.peek_byte(1) {
            Some(b'/') => {
                self.cursor.advance_to_end();
                CommentScan::Line {
                    continued: self.cursor.last_byte() == Some(LINE_CONTINUATION),
                }
            },
            Some(b'*') => {
                self.cursor.advance_bytes(2);
                match self.cursor.find(b"*/") {
                    Some(close) => {
                        self.cursor.advance_bytes(close + 2 - self.cursor.position());
                        CommentScan::Block
                    },
                    None => {
                        self.cursor.advance_to_end();
                        CommentScan::OpenBlock
                    },
                }
            },
            Some(b'=') => {
                self.cursor.advance_bytes(2);
                CommentScan::Operator(Operator::DivideEquals)
            },
            _ => {
                self.cursor.advance();
                CommentScan::Operator(Operator::Divide)
            },
        };
        Some(scan)
    }

    /// Looks for `*/` from the start of a line inside a block comment.
    ///
    /// Returns true and stops after the terminator when found; otherwise
    /// consumes the whole line.
    pub fn scan_block_comment_end(&mut self) -> bool {
        match self.cursor.find(b"*/") {
            Some(close) => {
                self.cursor.advance_bytes(close + 2 - self.cursor.position());
                true
            },
            None => {
                self.cursor.advance_to_end();
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Option<(CommentScan, usize)> {
        let mut lexer = LineLexer::new(source);
        let scan = lexer.scan_comment()?;
        Some((scan, lexer.position()))
    }

    #[test]
    fn test_division() {
        assert_eq!(scan("/ 2"), Some((CommentScan::Operator(Operator::Divide), 1)));
        assert_eq!(scan("/"), Some((CommentScan::Operator(Operator::Divide), 1)));
        assert_eq!(
            scan("/=2"),
            Some((CommentScan::Operator(Operator::DivideEquals), 2))
        );
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(
            scan("// note"),
            Some((CommentScan::Line { continued: false }, 7))
        );
        assert_eq!(
            scan("// more \\"),
            Some((CommentScan::Line { continued: true }, 9))
        );
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(scan("/* a */ x"), Some((CommentScan::Block, 7)));
        assert_eq!(scan("/**/"), Some((CommentScan::Block, 4)));
        assert_eq!(scan("/* open"), Some((CommentScan::OpenBlock, 7)));
    }

    #[test]
    fn test_block_terminator_must_follow_opener() {
        assert_eq!(scan("/*/"), Some((CommentScan::OpenBlock, 3)));
    }

    #[test]
    fn test_not_a_slash() {
        assert_eq!(scan("*/"), None);
        assert_eq!(scan(""), None);
    }

    #[test]
    fn test_block_comment_end() {
        let mut lexer = LineLexer::new("still */ x");
        assert!(lexer.scan_block_comment_end());
        assert_eq!(lexer.position(), 8);

        let mut lexer = LineLexer::new("still open");
        assert!(!lexer.scan_block_comment_end());
        assert!(lexer.is_at_end());
    }
}
