//! Diagnostic codes for categorizing scanner errors and warnings.
//!
//! # Examples
//!
//! ```
//! use prelim_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E0001;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.as_str(), "E0001");
//! assert_eq!("W0002".parse::<DiagnosticCode>(), Ok(DiagnosticCode::W0002));
//! ```

use crate::error::DiagnosticError;
use std::fmt;
use std::str::FromStr;

/// A unique code identifying a diagnostic message
///
/// Codes are written `{prefix}{number:04}`, where the prefix is `E` for
/// errors and `W` for warnings. Warning codes can be named on the command
/// line or in `prelim.toml` to silence them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001", "W0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Returns true for warning codes.
    #[inline]
    pub fn is_warning(&self) -> bool {
        self.prefix == "W"
    }

    /// One-line summary of what the code means.
    pub fn summary(&self) -> &'static str {
        match (self.prefix, self.number) {
            ("E", 1) => "byte cannot begin any lexeme",
            ("W", 1) => "unsupported operator",
            ("W", 2) => "string literal is never closed",
            ("W", 3) => "comment is never closed",
            _ => "unknown diagnostic",
        }
    }

    // =========================================================================
    // ERROR CODES
    // =========================================================================

    /// E0001: Byte that no scanner accepts
    pub const E0001: Self = Self::new("E", 1);

    // =========================================================================
    // WARNING CODES
    // =========================================================================

    /// W0001: Operator the language reserves but does not support
    pub const W0001: Self = Self::new("W", 1);
    /// W0002: String literal still open at end of input
    pub const W0002: Self = Self::new("W", 2);
    /// W0003: Block or continued comment still open at end of input
    pub const W0003: Self = Self::new("W", 3);

    /// Every code the compiler can emit.
    pub const ALL: [Self; 4] = [Self::E0001, Self::W0001, Self::W0002, Self::W0003];
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl FromStr for DiagnosticCode {
    type Err = DiagnosticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DiagnosticError::InvalidCode(s.to_string()))
    }
}

/// Convenience constant for E0001
pub const E0001: DiagnosticCode = DiagnosticCode::E0001;
/// Convenience constant for W0001
pub const W0001: DiagnosticCode = DiagnosticCode::W0001;
/// Convenience constant for W0002
pub const W0002: DiagnosticCode = DiagnosticCode::W0002;
/// Convenience constant for W0003
pub const W0003: DiagnosticCode = DiagnosticCode::W0003;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting() {
        assert_eq!(DiagnosticCode::E0001.to_string(), "E0001");
        assert_eq!(format!("{:?}", DiagnosticCode::W0003), "W0003");
        assert_eq!(DiagnosticCode::new("W", 42).as_str(), "W0042");
    }

    #[test]
    fn test_code_is_warning() {
        assert!(!E0001.is_warning());
        assert!(W0001.is_warning());
        assert!(W0002.is_warning());
    }

    #[test]
    fn test_code_from_str() {
        assert_eq!("W0001".parse(), Ok(W0001));
        assert_eq!(" w0003 ".parse(), Ok(W0003));
        assert_eq!(
            "W9999".parse::<DiagnosticCode>(),
            Err(DiagnosticError::InvalidCode("W9999".to_string()))
        );
        assert!("".parse::<DiagnosticCode>().is_err());
    }

    #[test]
    fn test_every_code_has_summary() {
        for code in DiagnosticCode::ALL {
            assert_ne!(code.summary(), "unknown diagnostic", "{code}");
        }
        assert_eq!(DiagnosticCode::new("E", 77).summary(), "unknown diagnostic");
    }
}
