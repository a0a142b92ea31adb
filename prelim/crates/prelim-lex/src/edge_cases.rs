//! Edge case tests for prelim-lex
