//! Words and keywords.

use super::LineLexer;
use crate::chars::is_word_byte;
use crate::token::{hash_word, lookup_keyword, TokenKind};

impl<'a> LineLexer<'a> {
    /// Scans a maximal run of word bytes and classifies it.
    ///
    /// Returns [`TokenKind::Keyword`] for reserved words and
    /// [`TokenKind::Word`] with the text hash otherwise.
    pub fn scan_word(&mut self) -> Option<TokenKind> {
        let start = self.cursor.position();
        if self.cursor.eat_while(is_word_byte) == 0 {
            return None;
        }
        let bytes = self.cursor.slice_from(start);
        let hash = hash_word(bytes);
        Some(lookup_keyword(hash, bytes).map_or(TokenKind::Word(hash), TokenKind::Keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Keyword;

    fn scan(source: &str) -> Option<(TokenKind, &str)> {
        let mut lexer = LineLexer::new(source);
        let kind = lexer.scan_word()?;
        Some((kind, &source[..lexer.position()]))
    }

    #[test]
    fn test_keywords() {
        assert_eq!(scan("fn main"), Some((TokenKind::Keyword(Keyword::Fn), "fn")));
        assert_eq!(scan("u64;"), Some((TokenKind::Keyword(Keyword::U64), "u64")));
        assert_eq!(
            scan("namespace"),
            Some((TokenKind::Keyword(Keyword::Namespace), "namespace"))
        );
    }

    #[test]
    fn test_keyword_prefix_is_word() {
        assert_eq!(scan("fnx"), Some((TokenKind::Word(hash_word(b"fnx")), "fnx")));
        assert_eq!(scan("lets"), Some((TokenKind::Word(hash_word(b"lets")), "lets")));
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(scan("a_b1+c").map(|(_, t)| t), Some("a_b1"));
        assert_eq!(scan("x$y").map(|(_, t)| t), Some("x"));
        assert_eq!(scan("caf\u{e9} x").map(|(_, t)| t), Some("caf\u{e9}"));
        assert_eq!(scan("e5").map(|(_, t)| t), Some("e5"));
    }

    #[test]
    fn test_not_a_word() {
        for source in ["", " x", "+", "$", "`"] {
            let mut lexer = LineLexer::new(source);
            assert_eq!(lexer.scan_word(), None, "{source:?}");
            assert_eq!(lexer.position(), 0);
        }
    }
}
