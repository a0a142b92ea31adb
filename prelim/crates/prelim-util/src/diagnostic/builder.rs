//! Fluent diagnostic construction and source snippets.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::error::{DiagnosticError, DiagnosticResult};
use crate::Span;

/// A single source line with a highlighted column range
///
/// Columns are one-based and the range is half-open, so a one-byte
/// highlight at the start of the line is `1..2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the highlight starts (1-based)
    pub start_column: usize,
    /// Column where the highlight ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label shown after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    ///
    /// # Examples
    ///
    /// ```
    /// use prelim_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::new("x = a @ b", 1, 7, 8, Some("reserved"));
    /// assert_eq!(snippet.format(), "  1 | x = a @ b\n    |       ^ reserved");
    /// ```
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Build a snippet from a line of text and a span on that line
    ///
    /// Fails if the span reaches past the end of `line`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prelim_util::{SourceSnippet, Span};
    ///
    /// let snippet = SourceSnippet::from_span("a $ b", Span::new(0, 2, 3)).unwrap();
    /// assert_eq!(snippet.line_number, 1);
    /// assert_eq!(snippet.start_column, 3);
    /// assert!(SourceSnippet::from_span("ab", Span::new(0, 1, 5)).is_err());
    /// ```
    pub fn from_span(line: &str, span: Span) -> DiagnosticResult<Self> {
        if span.begin > span.end || span.end > line.len() {
            return Err(DiagnosticError::SnippetOutOfBounds {
                line_len: line.len(),
                begin: span.begin,
                end: span.end,
            });
        }
        Ok(Self {
            line: line.to_string(),
            line_number: span.line_number(),
            start_column: span.begin + 1,
            end_column: span.end + 1,
            label: None,
        })
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Produces the numbered source line followed by a caret line under the
    /// highlighted range. At least one caret is always printed.
    pub fn format(&self) -> String {
        let width = self.gutter_width();
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }

    pub(crate) fn gutter_width(&self) -> usize {
        self.line_number.to_string().len().max(3)
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use prelim_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use prelim_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unclassifiable byte `$`")
///     .code(DiagnosticCode::E0001)
///     .span(Span::new(0, 2, 3))
///     .help("remove the byte or place it inside a string")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the primary source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Attach a snippet for `span` when it fits on `line`
    ///
    /// Out-of-range spans are dropped so that a bad location never loses
    /// the diagnostic itself.
    pub fn snippet_from(self, line: &str, span: Span) -> Self {
        match SourceSnippet::from_span(line, span) {
            Ok(snippet) => self.snippet(snippet),
            Err(_) => self,
        }
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}
