//! prelim-util - Shared diagnostics and source locations
//!
//! Foundation types used by every phase of the prelim compiler:
//!
//! - [`span`] - Line-relative source locations
//! - [`diagnostic`] - Errors and warnings, their codes, and the collecting
//!   [`Handler`]
//! - [`error`] - Error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use prelim_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unsupported operator `@`")
//!     .code(DiagnosticCode::W0001)
//!     .span(Span::new(0, 4, 5))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
