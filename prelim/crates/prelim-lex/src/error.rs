//! Scanner failures.

use prelim_util::Span;
use thiserror::Error;

/// The one condition that stops a scan.
///
/// Everything else the scanner meets (unsupported operators, unclosed
/// strings and comments) is recorded in the output instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// No sub-scanner accepts the byte at this position.
    #[error("unclassifiable byte {byte:#04x} at line {}, column {}", .line + 1, .offset + 1)]
    Unclassifiable {
        /// Zero-based line index.
        line: usize,
        /// Zero-based byte offset in the line.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
}

impl ScanError {
    /// Location of the failure.
    pub fn span(&self) -> Span {
        match *self {
            ScanError::Unclassifiable { line, offset, .. } => Span::new(line, offset, offset + 1),
        }
    }
}

/// Result alias for scanning.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        let err = ScanError::Unclassifiable {
            line: 2,
            offset: 4,
            byte: b'$',
        };
        assert_eq!(err.to_string(), "unclassifiable byte 0x24 at line 3, column 5");
        assert_eq!(err.span(), Span::new(2, 4, 5));
    }
}
