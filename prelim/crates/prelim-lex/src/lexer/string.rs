//! String literal scanning.
//!
//! Literals never span lines on their own. A literal left open on a line
//! that ends in a continuation mark is continued by the line driver, which
//! scans each following line with [`LineLexer::scan_end_quote`].

use super::LineLexer;
use crate::chars::LINE_CONTINUATION;
use crate::token::QuoteKind;

/// Outcome of scanning one string fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringScan {
    /// The closing quote was found and consumed.
    Closed,
    /// The line ran out first. `continued` is set when the line ends in a
    /// continuation mark.
    Open { continued: bool },
}

impl StringScan {
    /// Returns true for an open fragment that carries on to the next line.
    pub fn is_continued(&self) -> bool {
        matches!(self, StringScan::Open { continued: true })
    }
}

impl<'a> LineLexer<'a> {
    /// Scans a literal opened by `quote` at the cursor.
    pub fn scan_string(&mut self, quote: QuoteKind) -> Option<StringScan> {
        if self.cursor.current_byte() != Some(quote.byte()) {
            return None;
        }
        self.cursor.advance();
        Some(self.scan_to_quote(quote))
    }

    /// Scans a continuation fragment from the start of a line up to and
    /// including the first unescaped `quote`.
    ///
    /// A quote at column 0 closes the literal, even when the previous line
    /// ended in `\`.
    pub fn scan_end_quote(&mut self, quote: QuoteKind) -> StringScan {
        self.scan_to_quote(quote)
    }

    // Called right after an opening quote or at the start of a line, so the
    // first byte is never escaped. A quote is escaped by the byte before it
    // alone: `"\\"` stays open.
    fn scan_to_quote(&mut self, quote: QuoteKind) -> StringScan {
        let mut escaped = false;
        while let Some(b) = self.cursor.current_byte() {
            self.cursor.advance();
            if b == quote.byte() && !escaped {
                return StringScan::Closed;
            }
            escaped = b == b'\\';
        }
        StringScan::Open {
            continued: self.cursor.last_byte() == Some(LINE_CONTINUATION),
        }
    }
}

/// Returns true if a string fragment ends in its closing quote.
///
/// `opening` marks the fragment that starts with the opening quote, which
/// cannot also serve as the closing one.
pub fn is_closed_string(fragment: &[u8], quote: QuoteKind, opening: bool) -> bool {
    let min_len = if opening { 2 } else { 1 };
    if fragment.len() < min_len || fragment.last() != Some(&quote.byte()) {
        return false;
    }
    let before = fragment.len() - 1;
    before < min_len || fragment[before - 1] != b'\\'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str, quote: QuoteKind) -> Option<(StringScan, &str)> {
        let mut lexer = LineLexer::new(source);
        let scan = lexer.scan_string(quote)?;
        Some((scan, &source[..lexer.position()]))
    }

    #[test]
    fn test_closed_strings() {
        assert_eq!(scan("\"abc\" x", QuoteKind::Double), Some((StringScan::Closed, "\"abc\"")));
        assert_eq!(scan("''", QuoteKind::Single), Some((StringScan::Closed, "''")));
        assert_eq!(scan("'a\"b'", QuoteKind::Single), Some((StringScan::Closed, "'a\"b'")));
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            scan(r#""a\"b" c"#, QuoteKind::Double),
            Some((StringScan::Closed, r#""a\"b""#))
        );
    }

    #[test]
    fn test_open_string() {
        assert_eq!(
            scan("\"abc", QuoteKind::Double),
            Some((StringScan::Open { continued: false }, "\"abc"))
        );
        assert_eq!(
            scan("\"abc\\", QuoteKind::Double),
            Some((StringScan::Open { continued: true }, "\"abc\\"))
        );
        assert_eq!(
            scan("\"", QuoteKind::Double),
            Some((StringScan::Open { continued: false }, "\""))
        );
    }

    #[test]
    fn test_wrong_quote() {
        assert_eq!(scan("'a'", QuoteKind::Double), None);
        assert_eq!(scan("x", QuoteKind::Single), None);
    }

    #[test]
    fn test_end_quote() {
        let mut lexer = LineLexer::new("def\" + x");
        assert_eq!(lexer.scan_end_quote(QuoteKind::Double), StringScan::Closed);
        assert_eq!(lexer.position(), 4);

        let mut lexer = LineLexer::new("x\\\" y\\");
        assert_eq!(
            lexer.scan_end_quote(QuoteKind::Double),
            StringScan::Open { continued: true }
        );
        assert!(lexer.is_at_end());
    }

    #[test]
    fn test_end_quote_at_column_zero() {
        let mut lexer = LineLexer::new("\"rest");
        assert_eq!(lexer.scan_end_quote(QuoteKind::Double), StringScan::Closed);
        assert_eq!(lexer.position(), 1);

        let mut lexer = LineLexer::new("''");
        assert_eq!(lexer.scan_end_quote(QuoteKind::Single), StringScan::Closed);
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn test_is_closed_string() {
        assert!(is_closed_string(b"\"ab\"", QuoteKind::Double, true));
        assert!(is_closed_string(b"\"\"", QuoteKind::Double, true));
        assert!(!is_closed_string(b"\"", QuoteKind::Double, true));
        assert!(!is_closed_string(b"\"ab\\\"", QuoteKind::Double, true));
        assert!(!is_closed_string(b"'ab", QuoteKind::Single, true));
        assert!(is_closed_string(b"'", QuoteKind::Single, false));
        assert!(is_closed_string(b"cd'", QuoteKind::Single, false));
        assert!(!is_closed_string(b"cd\\'", QuoteKind::Single, false));
        assert!(!is_closed_string(b"cd\\", QuoteKind::Single, false));
    }
}
