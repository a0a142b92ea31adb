//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Compiler phases never print. They build [`Diagnostic`]s, usually through
//! [`DiagnosticBuilder`], and hand them to a [`Handler`] that the driver
//! owns and renders once the phase is done.
//!
//! # Examples
//!
//! ```
//! use prelim_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use prelim_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unclassifiable byte `$`")
//!     .code(DiagnosticCode::E0001)
//!     .span(Span::new(0, 2, 3))
//!     .snippet_from("a $ b", Span::new(0, 2, 3))
//!     .emit(&handler);
//!
//! let text = handler.diagnostics()[0].render("main.pre");
//! assert!(text.starts_with("error[E0001]: unclassifiable byte `$`"));
//! assert!(text.contains("--> main.pre:1:3"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{E0001, W0001, W0002, W0003};

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error that fails the compilation
    Error,
    /// A warning that does not fail the compilation on its own
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic as multi-line text
    ///
    /// `origin` names the source (usually a file path) in the `-->` line.
    /// The location line is omitted for [`Span::DUMMY`].
    pub fn render(&self, origin: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };

        let width = self
            .snippets
            .iter()
            .map(SourceSnippet::gutter_width)
            .max()
            .unwrap_or(3);

        if !self.span.is_dummy() {
            out.push_str(&format!("\n{:>width$}--> {}:{}", "", origin, self.span, width = width - 1));
        }
        for snippet in &self.snippets {
            out.push_str(&format!("\n{:>width$} |\n", "", width = width));
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n{:>width$} = note: {}", "", note, width = width));
        }
        for help in &self.helps {
            out.push_str(&format!("\n{:>width$} = help: {}", "", help, width = width));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// One handler belongs to one source file. Warning codes passed to
/// [`Handler::with_suppressed`] are dropped on emission; errors are never
/// suppressed.
///
/// # Examples
///
/// ```
/// use prelim_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
/// use prelim_util::Span;
///
/// let handler = Handler::with_suppressed(vec![DiagnosticCode::W0001]);
/// handler.emit_diagnostic(
///     Diagnostic::warning("unsupported operator", Span::DUMMY).with_code(DiagnosticCode::W0001),
/// );
/// assert_eq!(handler.warning_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    suppressed: Vec<DiagnosticCode>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that drops the given warning codes
    pub fn with_suppressed(suppressed: Vec<DiagnosticCode>) -> Self {
        Self {
            suppressed,
            ..Self::default()
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if diagnostic.level == Level::Warning {
            if let Some(code) = diagnostic.code {
                if self.suppressed.contains(&code) {
                    return;
                }
            }
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
