//! Numeric literal scanning.
//!
//! Literal shapes:
//!
//! - Binary: `0b1010`, `0b1111_0000`
//! - Hexadecimal: `0x1F`, `0xAB_CD` (lowercase prefix only)
//! - Integer: `42`, `1_000`
//! - Decimal: `3.14`, `1.`, `2.5e-3`, `6.02E23`
//!
//! A `_` separator is consumed only when a digit of the same radix follows
//! it. An exponent needs at least one digit after the marker and optional
//! sign; otherwise the literal ends before the marker.

use super::LineLexer;
use crate::chars::{is_decimal_digit, is_digit_in_radix, Radix};
use crate::token::NumberKind;

impl<'a> LineLexer<'a> {
    /// Scans a numeric literal starting at a decimal digit.
    pub fn scan_number(&mut self) -> Option<NumberKind> {
        let first = self.cursor.current_byte().filter(|b| is_decimal_digit(*b))?;

        if first == b'0' {
            if let Some(kind) = self.scan_prefixed_number() {
                return Some(kind);
            }
        }

        self.cursor.advance();
        self.eat_digits(Radix::Decimal);
        if !self.cursor.match_byte(b'.') {
            return Some(NumberKind::Integer);
        }

        self.eat_digits(Radix::Decimal);
        self.scan_exponent();
        Some(NumberKind::Decimal)
    }

    /// `0b` / `0x` literals. Requires a valid digit right after the prefix.
    fn scan_prefixed_number(&mut self) -> Option<NumberKind> {
        let (radix, kind) = match self.cursor.peek_byte(1)? {
            b'b' => (Radix::Binary, NumberKind::Binary),
            b'x' => (Radix::Hex, NumberKind::Hex),
            _ => return None,
        };
        if !is_digit_in_radix(self.cursor.peek_byte(2)?, radix) {
            return None;
        }
        self.cursor.advance_bytes(2);
        self.eat_digits(radix);
        Some(kind)
    }

    /// Consumes digits of `radix` with single `_` separators between them.
    fn eat_digits(&mut self, radix: Radix) -> usize {
        let start = self.cursor.position();
        while let Some(b) = self.cursor.current_byte() {
            if is_digit_in_radix(b, radix) {
                self.cursor.advance();
            } else if b == b'_'
                && self
                    .cursor
                    .peek_byte(1)
                    .is_some_and(|next| is_digit_in_radix(next, radix))
            {
                self.cursor.advance_bytes(2);
            } else {
                break;
            }
        }
        self.cursor.position() - start
    }

    fn scan_exponent(&mut self) {
        if !matches!(self.cursor.current_byte(), Some(b'e' | b'E')) {
            return;
        }
        let marker = self.cursor.snapshot();
        self.cursor.advance();
        if matches!(self.cursor.current_byte(), Some(b'+' | b'-')) {
            self.cursor.advance();
        }
        if self.cursor.current_byte().is_some_and(is_decimal_digit) {
            self.eat_digits(Radix::Decimal);
        } else {
            self.cursor.restore(marker);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Option<(NumberKind, &str)> {
        let mut lexer = LineLexer::new(source);
        let kind = lexer.scan_number()?;
        Some((kind, &source[..lexer.position()]))
    }

    #[test]
    fn test_integer() {
        assert_eq!(scan("42"), Some((NumberKind::Integer, "42")));
        assert_eq!(scan("0"), Some((NumberKind::Integer, "0")));
        assert_eq!(scan("7;"), Some((NumberKind::Integer, "7")));
    }

    #[test]
    fn test_separators() {
        assert_eq!(scan("1_000"), Some((NumberKind::Integer, "1_000")));
        assert_eq!(scan("1_"), Some((NumberKind::Integer, "1")));
        assert_eq!(scan("1__0"), Some((NumberKind::Integer, "1")));
        assert_eq!(scan("1_a"), Some((NumberKind::Integer, "1")));
    }

    #[test]
    fn test_hex() {
        assert_eq!(scan("0x1F"), Some((NumberKind::Hex, "0x1F")));
        assert_eq!(scan("0xab_CD+"), Some((NumberKind::Hex, "0xab_CD")));
        assert_eq!(scan("0xF_"), Some((NumberKind::Hex, "0xF")));
    }

    #[test]
    fn test_binary() {
        assert_eq!(scan("0b102"), Some((NumberKind::Binary, "0b10")));
        assert_eq!(scan("0b1_0"), Some((NumberKind::Binary, "0b1_0")));
    }

    #[test]
    fn test_prefix_without_digit_falls_back_to_integer() {
        assert_eq!(scan("0x"), Some((NumberKind::Integer, "0")));
        assert_eq!(scan("0xg"), Some((NumberKind::Integer, "0")));
        assert_eq!(scan("0b2"), Some((NumberKind::Integer, "0")));
        assert_eq!(scan("0X1F"), Some((NumberKind::Integer, "0")));
        assert_eq!(scan("0B1"), Some((NumberKind::Integer, "0")));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(scan("3.14"), Some((NumberKind::Decimal, "3.14")));
        assert_eq!(scan("1."), Some((NumberKind::Decimal, "1.")));
        assert_eq!(scan("1.x"), Some((NumberKind::Decimal, "1.")));
        assert_eq!(scan("1.2_5"), Some((NumberKind::Decimal, "1.2_5")));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(scan("2.5e-3"), Some((NumberKind::Decimal, "2.5e-3")));
        assert_eq!(scan("6.02E23"), Some((NumberKind::Decimal, "6.02E23")));
        assert_eq!(scan("1.0e+7"), Some((NumberKind::Decimal, "1.0e+7")));
    }

    #[test]
    fn test_incomplete_exponent_ends_at_marker() {
        assert_eq!(scan("1.5e"), Some((NumberKind::Decimal, "1.5")));
        assert_eq!(scan("1.5e+"), Some((NumberKind::Decimal, "1.5")));
        assert_eq!(scan("1.5e-x"), Some((NumberKind::Decimal, "1.5")));
        assert_eq!(scan("1.5ex"), Some((NumberKind::Decimal, "1.5")));
    }

    #[test]
    fn test_exponent_needs_dot() {
        assert_eq!(scan("1e5"), Some((NumberKind::Integer, "1")));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(scan("x1"), None);
        assert_eq!(scan(""), None);
        assert_eq!(scan(".5"), None);
    }

    #[test]
    fn test_no_match_leaves_cursor() {
        let mut lexer = LineLexer::new("abc");
        assert_eq!(lexer.scan_number(), None);
        assert_eq!(lexer.position(), 0);
    }
}
