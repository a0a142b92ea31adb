//! Text reports over a finished session.
//!
//! Each report opens with a banner line and ends with a blank line.

use std::io::{self, Write};

use prelim_lex::{ScanResults, Token, TokenKind, TokenType};

use crate::session::{millis, Timings};

/// Width of the line-number gutter plus its dash rule in the lexeme report.
const LEXEME_RULE_WIDTH: usize = 11;

/// Width of the token type column.
const TYPE_WIDTH: usize = 10;

fn banner(title: &str) -> String {
    format!("==================== {} ====================", title)
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Writes the program banner.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", banner("Preliminary Compiler"))
}

/// Writes the banner that separates files when several are scanned.
pub fn write_file_banner<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "{}", banner(&format!("File: {}", name)))
}

/// Writes the numbered source listing.
pub fn write_file<W: Write>(out: &mut W, results: &ScanResults) -> io::Result<()> {
    writeln!(out, "{}", banner("Source Code"))?;
    let pad = digits(results.lines.len());
    for (i, line) in results.lines.iter().enumerate() {
        writeln!(out, "{:<pad$}: {}", i + 1, line.text)?;
    }
    writeln!(out)
}

/// Writes phase timings in milliseconds.
pub fn write_timing<W: Write>(out: &mut W, timings: &Timings) -> io::Result<()> {
    writeln!(out, "{}", banner("Compiler Timing"))?;
    writeln!(out, "Load file (ms): {:.3}", millis(timings.load))?;
    writeln!(out, "Scan file (ms): {:.3}", millis(timings.scan))?;
    writeln!(out, "Check file (ms): {:.3}", millis(timings.check))?;
    writeln!(out)
}

/// Writes line, lexeme and token counts.
pub fn write_stats<W: Write>(out: &mut W, results: &ScanResults) -> io::Result<()> {
    writeln!(out, "{}", banner("Compiler Stats"))?;
    writeln!(out, "Lines scanned: {}", results.lines.len())?;
    writeln!(out, "Lexemes: {}", results.lexeme_count())?;
    writeln!(out, "Tokens: {}", results.token_count())?;
    writeln!(out)
}

/// Writes every line followed by its lexemes as `[ begin, end) text`.
pub fn write_lexemes<W: Write>(out: &mut W, results: &ScanResults) -> io::Result<()> {
    writeln!(out, "{}", banner("Scanner Lexemes"))?;
    let pad = digits(results.lines.len());
    let rule = "-".repeat(LEXEME_RULE_WIDTH.saturating_sub(pad));
    for (i, line) in results.lines.iter().enumerate() {
        writeln!(out, "{:<pad$}:{} {}", i + 1, rule, line.text)?;
        for &lexeme in &line.lexemes {
            writeln!(
                out,
                " [ {:<3}, {:<3}) {}",
                lexeme.begin,
                lexeme.end,
                line.slice(lexeme)
            )?;
        }
    }
    writeln!(out)
}

/// Formats the subtype column of one token.
pub fn token_detail(results: &ScanResults, token: &Token) -> String {
    let text = results.text_of(token);
    match token.kind {
        TokenKind::Eol => String::new(),
        TokenKind::Keyword(keyword) => keyword.to_string(),
        TokenKind::Number(kind) => format!("{} {}", kind, text),
        TokenKind::Operator(op) => op.to_string(),
        TokenKind::String(quote) => format!("{} {}", quote, text),
        TokenKind::Word(_) => text.to_string(),
    }
}

/// Writes every token with a running index.
pub fn write_tokens<W: Write>(out: &mut W, results: &ScanResults) -> io::Result<()> {
    writeln!(out, "{}", banner("Scanner Tokens"))?;
    let pad = digits(results.token_count());
    for (i, token) in results.tokens().enumerate() {
        let ty = token.kind.token_type();
        if ty == TokenType::Eol {
            writeln!(out, "{:<pad$}: {}", i, ty)?;
        } else {
            writeln!(
                out,
                "{:<pad$}: {:<width$}{}",
                i,
                ty.to_string(),
                token_detail(results, token),
                width = TYPE_WIDTH
            )?;
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prelim_lex::scan;
    use std::time::Duration;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_file() {
        let results = scan(&["let x", "", "x"]).unwrap();
        let text = render(|out| write_file(out, &results));
        assert_eq!(
            text,
            "==================== Source Code ====================\n\
             1: let x\n\
             2: \n\
             3: x\n\
             \n"
        );
    }

    #[test]
    fn test_write_file_pads_numbers() {
        let lines: Vec<String> = (0..10).map(|i| format!("v{i}")).collect();
        let results = scan(&lines).unwrap();
        let text = render(|out| write_file(out, &results));
        assert!(text.contains("\n1 : v0\n"));
        assert!(text.contains("\n10: v9\n"));
    }

    #[test]
    fn test_write_timing() {
        let timings = Timings {
            load: Duration::from_micros(1500),
            scan: Duration::from_millis(2),
            check: Duration::ZERO,
        };
        let text = render(|out| write_timing(out, &timings));
        assert_eq!(
            text,
            "==================== Compiler Timing ====================\n\
             Load file (ms): 1.500\n\
             Scan file (ms): 2.000\n\
             Check file (ms): 0.000\n\
             \n"
        );
    }

    #[test]
    fn test_write_stats() {
        let results = scan(&["a = 1 // c"]).unwrap();
        let text = render(|out| write_stats(out, &results));
        assert_eq!(
            text,
            "==================== Compiler Stats ====================\n\
             Lines scanned: 1\n\
             Lexemes: 7\n\
             Tokens: 4\n\
             \n"
        );
    }

    #[test]
    fn test_write_lexemes() {
        let results = scan(&["x = 10"]).unwrap();
        let text = render(|out| write_lexemes(out, &results));
        assert_eq!(
            text,
            "==================== Scanner Lexemes ====================\n\
             1:---------- x = 10\n \
             [ 0  , 1  ) x\n \
             [ 1  , 2  )  \n \
             [ 2  , 3  ) =\n \
             [ 3  , 4  )  \n \
             [ 4  , 6  ) 10\n\
             \n"
        );
    }

    #[test]
    fn test_write_tokens() {
        let results = scan(&["fn f >>= 0x1F 'a' @"]).unwrap();
        let text = render(|out| write_tokens(out, &results));
        assert_eq!(
            text,
            "==================== Scanner Tokens ====================\n\
             0: KEYWORD   FN\n\
             1: WORD      f\n\
             2: OPERATOR  >>=\n\
             3: NUMBER    HEX 0x1F\n\
             4: STRING    SINGLE 'a'\n\
             5: OPERATOR  UNSUPPORTED_OPERATOR\n\
             6: EOL\n\
             \n"
        );
    }

    #[test]
    fn test_token_index_padding() {
        let results = scan(&["a b c d e f g h i j"]).unwrap();
        let text = render(|out| write_tokens(out, &results));
        assert!(text.contains("\n0 : WORD      a\n"));
        assert!(text.contains("\n10: EOL\n"));
    }

    #[test]
    fn test_banners() {
        assert_eq!(
            render(write_banner),
            "==================== Preliminary Compiler ====================\n"
        );
        assert_eq!(
            render(|out| write_file_banner(out, "a.pc")),
            "==================== File: a.pc ====================\n"
        );
    }
}
