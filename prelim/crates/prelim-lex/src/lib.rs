//! prelim-lex - Line-oriented scanner for the prelim compiler
//!
//! Turns a sequence of physical source lines into positioned lexemes and
//! classified tokens grouped into statements.
//!
//! # Example Usage
//!
//! ```
//! use prelim_lex::{scan, TokenKind, TokenType};
//! use prelim_lex::token::Keyword;
//!
//! let results = scan(&["fn f(x) -> i32 \\", "    x >>= 1;"]).unwrap();
//!
//! // Two physical lines, one statement.
//! assert_eq!(results.lines.len(), 2);
//! assert_eq!(results.statements.len(), 1);
//!
//! let first = &results.statements[0][0];
//! assert_eq!(first.kind, TokenKind::Keyword(Keyword::Fn));
//! assert_eq!(results.text_of(first), "fn");
//!
//! let last = results.statements[0].last().unwrap();
//! assert_eq!(last.kind.token_type(), TokenType::Eol);
//! ```
//!
//! # Module Structure
//!
//! - [`chars`] - Byte classifiers
//! - [`cursor`] - Byte cursor over one line
//! - [`token`] - Lexemes, tokens, keywords and the scan result model
//! - [`lexer`] - Sub-scanners and the line driver
//! - [`error`] - The fatal scan error
//!
//! # Token Categories
//!
//! - **Keywords**: `i8` `i16` `i32` `i64` `u8` `u16` `u32` `u64` `f16` `f32`
//!   `f64` `class` `let` `self` `struct` `var` `cref` `fn` `move` `ref`
//!   `return` `namespace`
//! - **Numbers**: binary `0b1010`, hex `0x1F`, integer `1_000`, decimal
//!   `2.5e-3`
//! - **Strings**: `"double"` and `'single'`, continued across lines with a
//!   trailing `\`
//! - **Operators**: longest match over a fixed symbol set, `` ` `` and `@`
//!   reserved as unsupported
//! - **Words**: any other run of word bytes
//! - **EOL**: closes every statement
//!
//! Whitespace and comments produce lexemes but no tokens.

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use lexer::{scan, scan_source, split_lines, LineLexer, Mode, Scanner};
pub use token::{
    keyword_from_word, Lexeme, Line, OpenConstruct, ScanResults, Statement, Token, TokenKind,
    TokenType,
};
