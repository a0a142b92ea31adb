//! Lexer module.
//!
//! - `core` - [`LineLexer`], the per-line cursor host, and whitespace
//! - `number` - Numeric literals
//! - `comment` - Comments and division
//! - `string` - String literals and continuation fragments
//! - `operator` - The operator prefix tree
//! - `word` - Words and keywords
//! - `scanner` - [`Scanner`], the line driver that carries state across lines

mod comment;
mod core;
mod number;
mod operator;
mod scanner;
mod string;
mod word;

pub use comment::CommentScan;
pub use core::LineLexer;
pub use operator::{operator_tree, OperatorNode};
pub use scanner::{scan, scan_source, split_lines, Mode, Scanner};
pub use string::{is_closed_string, StringScan};
