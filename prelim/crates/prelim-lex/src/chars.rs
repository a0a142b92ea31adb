//! Byte classification for the scanner.
//!
//! Every predicate works on a single byte and never fails. Source lines are
//! scanned byte by byte; bytes of multi-byte UTF-8 sequences are all >= 128
//! and are treated as legal word bytes.

/// Marks the end of a physical line as continuing onto the next one.
pub const LINE_CONTINUATION: u8 = b'\\';

/// Digit bases accepted in numeric literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b` literals
    Binary,
    /// Plain integer and decimal literals
    Decimal,
    /// `0x` literals
    Hex,
}

/// Any byte at or below ASCII space, control characters included.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    b <= b' '
}

/// `0` or `1`.
#[inline]
pub const fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

/// `0` through `9`.
#[inline]
pub const fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Decimal digits plus `a`-`f` in either case.
#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Dispatch to the digit predicate for `radix`.
#[inline]
pub const fn is_digit_in_radix(b: u8, radix: Radix) -> bool {
    match radix {
        Radix::Binary => is_binary_digit(b),
        Radix::Decimal => is_decimal_digit(b),
        Radix::Hex => is_hex_digit(b),
    }
}

/// Bytes that may appear in a word.
///
/// Illegal: everything below `0`, `:` through `@`, `[` through `^`, the
/// backtick, and `{` through `~`. DEL and all bytes >= 128 are legal.
#[inline]
pub const fn is_word_byte(b: u8) -> bool {
    !matches!(b, 0..=47 | 58..=64 | 91..=94 | 96 | 123..=126)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_includes_control_bytes() {
        for b in 0..=32u8 {
            assert!(is_whitespace(b), "{b}");
        }
        assert!(!is_whitespace(b'!'));
        assert!(!is_whitespace(127));
        assert!(!is_whitespace(200));
    }

    #[test]
    fn test_digits() {
        assert!(is_binary_digit(b'0') && is_binary_digit(b'1'));
        assert!(!is_binary_digit(b'2'));
        assert!((b'0'..=b'9').all(is_decimal_digit));
        assert!(!is_decimal_digit(b'a'));
        assert!(is_hex_digit(b'f') && is_hex_digit(b'F') && is_hex_digit(b'9'));
        assert!(!is_hex_digit(b'g') && !is_hex_digit(b'x'));
    }

    #[test]
    fn test_digit_in_radix() {
        assert!(is_digit_in_radix(b'1', Radix::Binary));
        assert!(!is_digit_in_radix(b'7', Radix::Binary));
        assert!(is_digit_in_radix(b'7', Radix::Decimal));
        assert!(is_digit_in_radix(b'c', Radix::Hex));
        assert!(!is_digit_in_radix(b'c', Radix::Decimal));
    }

    #[test]
    fn test_word_byte_boundaries() {
        let illegal: Vec<u8> = (0..=255u8).filter(|b| !is_word_byte(*b)).collect();
        let expected: Vec<u8> = (0..=47)
            .chain(58..=64)
            .chain(91..=94)
            .chain(std::iter::once(96))
            .chain(123..=126)
            .collect();
        assert_eq!(illegal, expected);
    }

    #[test]
    fn test_word_byte_samples() {
        for b in b"azAZ09_".iter().copied() {
            assert!(is_word_byte(b), "{}", b as char);
        }
        for b in b"$@`{~\\ .".iter().copied() {
            assert!(!is_word_byte(b), "{}", b as char);
        }
        assert!(is_word_byte(127));
        assert!(is_word_byte(0xC3));
    }
}
