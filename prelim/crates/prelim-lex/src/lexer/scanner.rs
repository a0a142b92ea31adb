//! The line driver.
//!
//! [`Scanner`] feeds one physical line at a time through the sub-scanners
//! and carries a [`Mode`] from line to line for constructs that span lines:
//! block comments, `//` comments continued with a trailing `\`, and string
//! literals continued the same way.
//!
//! At each offset the sub-scanners are tried in a fixed order: whitespace,
//! number, comment or division, double-quoted string, single-quoted string,
//! operator, word. The first one that consumes input wins.
//!
//! A line that ends outside any cross-line construct closes the pending
//! statement with an end-of-line token, unless its last lexeme is a
//! backslash operator. That backslash is retracted and the statement
//! continues on the next line.

use std::mem;

use tracing::{debug, debug_span, trace};

use super::{CommentScan, LineLexer};
use crate::chars::LINE_CONTINUATION;
use crate::error::{ScanError, ScanResult};
use crate::token::{
    Lexeme, Line, OpenConstruct, Operator, QuoteKind, ScanResults, Statement, Token, TokenKind,
};

/// Cross-line state carried between physical lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Ordinary scanning.
    #[default]
    Normal,
    /// Inside `/* ... */`. `start` is the line of the opener.
    BlockComment { start: usize },
    /// Swallowing lines after a `//` comment that ended in `\`.
    ContinuedComment { start: usize },
    /// Inside a string literal that ended its line with `\`.
    ContinuedString { start: usize, quote: QuoteKind },
}

/// Incremental line driver.
///
/// # Example
///
/// ```
/// use prelim_lex::lexer::{Mode, Scanner};
///
/// let mut scanner = Scanner::new();
/// scanner.push_line("x = /* open").unwrap();
/// assert!(matches!(scanner.mode(), Mode::BlockComment { start: 0 }));
/// scanner.push_line("close */ 1").unwrap();
/// assert_eq!(scanner.mode(), Mode::Normal);
///
/// let results = scanner.finish();
/// assert_eq!(results.statements.len(), 1);
/// assert_eq!(results.statements[0].len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct Scanner {
    lines: Vec<Line>,
    statements: Vec<Statement>,
    pending: Statement,
    mode: Mode,
}

impl Scanner {
    /// Creates a scanner with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode carried into the next line.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Tokens of the statement still being built.
    pub fn pending(&self) -> &[Token] {
        &self.pending
    }

    /// Lines scanned so far.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Completed statements so far.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Scans every line and finishes.
    pub fn scan_lines<S: AsRef<str>>(mut self, lines: &[S]) -> ScanResult<ScanResults> {
        self.lines.reserve(lines.len());
        for line in lines {
            self.push_line(line.as_ref())?;
        }
        Ok(self.finish())
    }

    /// Scans the next physical line.
    pub fn push_line(&mut self, text: &str) -> ScanResult<()> {
        let index = self.lines.len();
        self.lines.push(Line::new(text));
        let mut lexer = LineLexer::new(text);

        match self.mode {
            Mode::Normal => {},
            Mode::BlockComment { .. } => {
                if text.is_empty() {
                    return Ok(());
                }
                let closed = lexer.scan_block_comment_end();
                self.push_lexeme(index, lexer.lexeme_from(0));
                if !closed {
                    return Ok(());
                }
                self.set_mode(index, Mode::Normal);
            },
            Mode::ContinuedComment { .. } => {
                if text.is_empty() {
                    return Ok(());
                }
                lexer.cursor.advance_to_end();
                self.push_lexeme(index, lexer.lexeme_from(0));
                if lexer.cursor.last_byte() == Some(LINE_CONTINUATION) {
                    return Ok(());
                }
                self.set_mode(index, Mode::Normal);
            },
            Mode::ContinuedString { quote, .. } => {
                if !text.is_empty() {
                    let scan = lexer.scan_end_quote(quote);
                    self.push_token(index, lexer.lexeme_from(0), TokenKind::String(quote));
                    if scan.is_continued() {
                        return Ok(());
                    }
                }
                self.set_mode(index, Mode::Normal);
            },
        }

        self.scan_rest(index, &mut lexer)?;
        if self.mode == Mode::Normal {
            self.end_line(index);
        }
        Ok(())
    }

    /// Flushes the pending statement and returns everything scanned.
    pub fn finish(mut self) -> ScanResults {
        let open_construct = match self.mode {
            Mode::Normal => None,
            Mode::BlockComment { start } => Some(OpenConstruct::BlockComment { line: start }),
            Mode::ContinuedComment { start } => {
                Some(OpenConstruct::ContinuedComment { line: start })
            },
            Mode::ContinuedString { start, quote } => Some(OpenConstruct::String {
                line: start,
                quote,
            }),
        };
        if !self.pending.is_empty() {
            let last = self.lines.len().saturating_sub(1);
            self.flush(last);
        }

        let results = ScanResults {
            lines: self.lines,
            statements: self.statements,
            open_construct,
        };
        debug!(
            lines = results.lines.len(),
            lexemes = results.lexeme_count(),
            statements = results.statements.len(),
            open = ?results.open_construct,
            "scan complete"
        );
        results
    }

    fn scan_rest(&mut self, index: usize, lexer: &mut LineLexer<'_>) -> ScanResult<()> {
        while let Some(byte) = lexer.cursor.current_byte() {
            let begin = lexer.position();

            if lexer.scan_whitespace().is_some() {
                self.push_lexeme(index, lexer.lexeme_from(begin));
                continue;
            }

            if let Some(kind) = lexer.scan_number() {
                self.push_token(index, lexer.lexeme_from(begin), TokenKind::Number(kind));
                continue;
            }

            if let Some(scan) = lexer.scan_comment() {
                let lexeme = lexer.lexeme_from(begin);
                match scan {
                    CommentScan::Operator(op) => {
                        self.push_token(index, lexeme, TokenKind::Operator(op))
                    },
                    CommentScan::Block => {
                        self.push_lexeme(index, lexeme);
                    },
                    CommentScan::Line { continued } => {
                        self.push_lexeme(index, lexeme);
                        if continued {
                            self.set_mode(index, Mode::ContinuedComment { start: index });
                        }
                    },
                    CommentScan::OpenBlock => {
                        self.push_lexeme(index, lexeme);
                        self.set_mode(index, Mode::BlockComment { start: index });
                    },
                }
                continue;
            }

            let string = [QuoteKind::Double, QuoteKind::Single]
                .into_iter()
                .find_map(|quote| lexer.scan_string(quote).map(|scan| (quote, scan)));
            if let Some((quote, scan)) = string {
                self.push_token(index, lexer.lexeme_from(begin), TokenKind::String(quote));
                if scan.is_continued() {
                    self.set_mode(index, Mode::ContinuedString { start: index, quote });
                }
                continue;
            }

            if let Some(op) = lexer.match_operator() {
                self.push_token(index, lexer.lexeme_from(begin), TokenKind::Operator(op));
                continue;
            }

            if let Some(kind) = lexer.scan_word() {
                self.push_token(index, lexer.lexeme_from(begin), kind);
                continue;
            }

            return Err(ScanError::Unclassifiable {
                line: index,
                offset: begin,
                byte,
            });
        }
        Ok(())
    }

    fn push_lexeme(&mut self, index: usize, lexeme: Lexeme) {
        self.lines[index].lexemes.push(lexeme);
    }

    fn push_token(&mut self, index: usize, lexeme: Lexeme, kind: TokenKind) {
        let position = self.lines[index].lexemes.len();
        self.push_lexeme(index, lexeme);
        self.pending.push(Token::new(index, position, kind));
    }

    fn end_line(&mut self, index: usize) {
        let Some(last) = self.pending.last() else {
            return;
        };
        let is_continuation = last.kind == TokenKind::Operator(Operator::BackSlash)
            && last.line == index
            && last.lexeme + 1 == self.lines[index].lexemes.len();
        if is_continuation {
            trace!(line = index, "line continuation");
            self.pending.pop();
        } else {
            self.flush(index);
        }
    }

    // The EOL lands on `line` when it has lexemes, otherwise on the line of
    // the statement's last token.
    fn flush(&mut self, line: usize) {
        let line = if self.lines[line].lexemes.is_empty() {
            self.pending.last().map_or(line, |token| token.line)
        } else {
            line
        };
        self.pending.push(Token::eol(line));
        self.statements.push(mem::take(&mut self.pending));
    }

    fn set_mode(&mut self, index: usize, mode: Mode) {
        trace!(line = index, from = ?self.mode, to = ?mode, "scanner mode");
        self.mode = mode;
    }
}

/// Scans a sequence of lines.
///
/// # Example
///
/// ```
/// use prelim_lex::scan;
///
/// let results = scan(&["x +\\", "y"]).unwrap();
/// assert_eq!(results.statements.len(), 1);
/// let text: Vec<&str> = results.tokens().map(|t| results.text_of(t)).collect();
/// assert_eq!(text, ["x", "+", "y", ""]);
/// ```
pub fn scan<S: AsRef<str>>(lines: &[S]) -> ScanResult<ScanResults> {
    let _span = debug_span!("scan", lines = lines.len()).entered();
    Scanner::new().scan_lines(lines)
}

/// Splits `source` into lines and scans them.
pub fn scan_source(source: &str) -> ScanResult<ScanResults> {
    scan(&split_lines(source))
}

/// Splits text into physical lines.
///
/// Splits on `\n` and drops one trailing `\r` from each line. Text ending in
/// a newline yields a final empty line, and empty text yields one empty
/// line.
pub fn split_lines(source: &str) -> Vec<&str> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
