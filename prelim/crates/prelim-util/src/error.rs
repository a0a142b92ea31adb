//! Core error types for prelim-util crate

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// A diagnostic code string could not be parsed.
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),

    /// A snippet referenced bytes outside its source line.
    #[error("Snippet out of bounds: line has {line_len} bytes, span is {begin}..{end}")]
    SnippetOutOfBounds {
        /// Length of the source line.
        line_len: usize,
        /// Requested start offset.
        begin: usize,
        /// Requested end offset.
        end: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
