//! Warnings over a finished scan.
//!
//! The scanner records unsupported operators, unclosed strings and
//! unclosed comments without complaint. These checks turn them into
//! diagnostics.

use prelim_lex::lexer::is_closed_string;
use prelim_lex::token::{Operator, QuoteKind};
use prelim_lex::{OpenConstruct, ScanResults, Token, TokenKind};
use prelim_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

/// Runs every check over `results`, emitting warnings to `handler`.
pub fn check_scan(results: &ScanResults, handler: &Handler) {
    check_operators(results, handler);
    check_strings(results, handler);
    check_comments(results, handler);
}

fn token_span(results: &ScanResults, token: &Token) -> Span {
    results
        .lexeme_of(token)
        .map(|lexeme| Span::new(token.line, lexeme.begin, lexeme.end))
        .unwrap_or(Span::DUMMY)
}

fn line_text(results: &ScanResults, line: usize) -> &str {
    results.lines.get(line).map_or("", |line| line.text.as_str())
}

fn check_operators(results: &ScanResults, handler: &Handler) {
    for token in results.tokens() {
        if token.kind != TokenKind::Operator(Operator::Unsupported) {
            continue;
        }
        let span = token_span(results, token);
        handler
            .build_warning(
                span,
                format!("unsupported operator `{}`", results.text_of(token)),
            )
            .code(DiagnosticCode::W0001)
            .snippet_from(line_text(results, token.line), span)
            .help("`@` and `` ` `` are reserved")
            .emit(handler);
    }
}

/// One string literal: its opening fragment and the fragment it ends on.
struct StringChain<'r> {
    first: &'r Token,
    last: &'r Token,
    quote: QuoteKind,
}

// A fragment continues the previous token when that token is an open
// string of the same quote ending in `\` on the line right above, and the
// fragment starts its line.
fn continues(results: &ScanResults, prev: &Token, token: &Token, quote: QuoteKind) -> bool {
    prev.kind == TokenKind::String(quote)
        && token.lexeme == 0
        && token.line == prev.line + 1
        && results.text_of(prev).ends_with('\\')
}

fn string_chains(results: &ScanResults) -> Vec<StringChain<'_>> {
    let mut chains: Vec<StringChain<'_>> = Vec::new();
    for statement in &results.statements {
        let mut prev: Option<&Token> = None;
        for token in statement {
            if let TokenKind::String(quote) = token.kind {
                let extends = prev.is_some_and(|p| continues(results, p, token, quote));
                match chains.last_mut() {
                    Some(chain) if extends => chain.last = token,
                    _ => chains.push(StringChain {
                        first: token,
                        last: token,
                        quote,
                    }),
                }
            }
            prev = Some(token);
        }
    }
    chains
}

fn check_strings(results: &ScanResults, handler: &Handler) {
    for chain in string_chains(results) {
        let opening = std::ptr::eq(chain.first, chain.last);
        let tail = results.text_of(chain.last).as_bytes();
        if is_closed_string(tail, chain.quote, opening) {
            continue;
        }

        let span = token_span(results, chain.first);
        let mut warning = handler
            .build_warning(span, "string literal is never closed")
            .code(DiagnosticCode::W0002)
            .snippet_from(line_text(results, chain.first.line), span);
        if !opening {
            warning = warning.note(format!(
                "the literal continues to line {}",
                chain.last.line + 1
            ));
        }
        warning.emit(handler);
    }
}

fn check_comments(results: &ScanResults, handler: &Handler) {
    let (line, message) = match results.open_construct {
        Some(OpenConstruct::BlockComment { line }) => (line, "block comment is never closed"),
        Some(OpenConstruct::ContinuedComment { line }) => {
            (line, "continued comment runs to the end of the file")
        },
        _ => return,
    };

    let span = results
        .lines
        .get(line)
        .and_then(|l| l.lexemes.last())
        .map(|lexeme| Span::new(line, lexeme.begin, lexeme.end))
        .unwrap_or_else(|| Span::point(line, 0));

    DiagnosticBuilder::warning(message)
        .code(DiagnosticCode::W0003)
        .span(span)
        .snippet_from(line_text(results, line), span)
        .note("everything after this point was skipped")
        .emit(handler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use prelim_lex::scan;
    use prelim_util::Level;

    fn codes(lines: &[&str]) -> Vec<DiagnosticCode> {
        let results = scan(lines).unwrap();
        let handler = Handler::new();
        check_scan(&results, &handler);
        handler
            .diagnostics()
            .into_iter()
            .filter_map(|d| d.code)
            .collect()
    }

    #[test]
    fn test_clean_source() {
        assert!(codes(&["let x = \"a\" + 'b' // done", "/* c */ y"]).is_empty());
    }

    #[test]
    fn test_unsupported_operator() {
        let results = scan(&["a @ b"]).unwrap();
        let handler = Handler::new();
        check_scan(&results, &handler);

        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        let warning = &diagnostics[0];
        assert_eq!(warning.level, Level::Warning);
        assert_eq!(warning.code, Some(DiagnosticCode::W0001));
        assert_eq!(warning.span, Span::new(0, 2, 3));
        assert_eq!(warning.message, "unsupported operator `@`");
        assert_eq!(warning.snippets.len(), 1);
    }

    #[test]
    fn test_open_string_on_one_line() {
        assert_eq!(codes(&["x = \"open"]), vec![DiagnosticCode::W0002]);
        assert_eq!(codes(&["x = 'a\\'"]), vec![DiagnosticCode::W0002]);
        assert_eq!(codes(&["x = \""]), vec![DiagnosticCode::W0002]);
    }

    #[test]
    fn test_continued_string_closed() {
        assert!(codes(&["s = \"one\\", "two\\", "three\""]).is_empty());
        assert!(codes(&["s = \"one\\", "\" + t"]).is_empty());
    }

    #[test]
    fn test_continued_string_never_closed() {
        let results = scan(&["s = \"one\\", "two"]).unwrap();
        let handler = Handler::new();
        check_scan(&results, &handler);

        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::W0002));
        assert_eq!(diagnostics[0].span, Span::new(0, 4, 9));
        assert_eq!(diagnostics[0].notes, vec!["the literal continues to line 2"]);
    }

    #[test]
    fn test_string_chain_broken_by_blank_line() {
        assert_eq!(
            codes(&["s = \"one\\", "", "\"two\""]),
            vec![DiagnosticCode::W0002]
        );
    }

    #[test]
    fn test_string_open_at_end_of_input() {
        assert_eq!(codes(&["s = \"one\\"]), vec![DiagnosticCode::W0002]);
    }

    #[test]
    fn test_unclosed_block_comment() {
        let results = scan(&["a /* never", "closed"]).unwrap();
        let handler = Handler::new();
        check_scan(&results, &handler);

        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::W0003));
        assert_eq!(diagnostics[0].span, Span::new(0, 2, 10));
    }

    #[test]
    fn test_continued_comment_at_end() {
        assert_eq!(codes(&["x // note \\"]), vec![DiagnosticCode::W0003]);
        assert!(codes(&["x // note \\", "still comment"]).is_empty());
    }

    #[test]
    fn test_suppressed_codes() {
        let results = scan(&["a @ \"b"]).unwrap();
        let handler = Handler::with_suppressed(vec![DiagnosticCode::W0001]);
        check_scan(&results, &handler);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics()[0].code, Some(DiagnosticCode::W0002));
    }
}
