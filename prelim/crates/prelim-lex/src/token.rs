//! Lexemes, tokens and the scan result model.
//!
//! A [`Lexeme`] is a byte span on one [`Line`]. A [`Token`] classifies one
//! lexeme and refers back to it by line and lexeme index, so token text is
//! always recovered from the line rather than stored twice.

use rustc_hash::{FxHashMap, FxHasher};
use std::fmt;
use std::hash::Hasher;
use std::sync::LazyLock;

/// Half-open byte span `[begin, end)` on one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Lexeme {
    /// First byte (inclusive).
    pub begin: usize,
    /// One past the last byte.
    pub end: usize,
}

impl Lexeme {
    /// Create a new lexeme.
    #[inline]
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Returns true if the lexeme covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// One physical source line and the lexemes carved from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    /// The line text, without its terminator.
    pub text: String,
    /// Lexemes in source order, whitespace and comments included.
    pub lexemes: Vec<Lexeme>,
}

impl Line {
    /// Create a line with no lexemes yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lexemes: Vec::new(),
        }
    }

    /// Text covered by `lexeme`, or `""` if the span is not valid here.
    pub fn slice(&self, lexeme: Lexeme) -> &str {
        self.text.get(lexeme.begin..lexeme.end).unwrap_or("")
    }
}

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F16,
    F32,
    F64,
    Class,
    Let,
    SelfValue,
    Struct,
    Var,
    Cref,
    Fn,
    Move,
    Ref,
    Return,
    Namespace,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 22] = [
        Keyword::I8,
        Keyword::I16,
        Keyword::I32,
        Keyword::I64,
        Keyword::U8,
        Keyword::U16,
        Keyword::U32,
        Keyword::U64,
        Keyword::F16,
        Keyword::F32,
        Keyword::F64,
        Keyword::Class,
        Keyword::Let,
        Keyword::SelfValue,
        Keyword::Struct,
        Keyword::Var,
        Keyword::Cref,
        Keyword::Fn,
        Keyword::Move,
        Keyword::Ref,
        Keyword::Return,
        Keyword::Namespace,
    ];

    /// Source spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Keyword::I8 => "i8",
            Keyword::I16 => "i16",
            Keyword::I32 => "i32",
            Keyword::I64 => "i64",
            Keyword::U8 => "u8",
            Keyword::U16 => "u16",
            Keyword::U32 => "u32",
            Keyword::U64 => "u64",
            Keyword::F16 => "f16",
            Keyword::F32 => "f32",
            Keyword::F64 => "f64",
            Keyword::Class => "class",
            Keyword::Let => "let",
            Keyword::SelfValue => "self",
            Keyword::Struct => "struct",
            Keyword::Var => "var",
            Keyword::Cref => "cref",
            Keyword::Fn => "fn",
            Keyword::Move => "move",
            Keyword::Ref => "ref",
            Keyword::Return => "return",
            Keyword::Namespace => "namespace",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

/// Numeric literal classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// `0b101`
    Binary,
    /// `1.5`, `2.0e-3`
    Decimal,
    /// `0x1F`
    Hex,
    /// `42`, `1_000`
    Integer,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumberKind::Binary => "BINARY",
            NumberKind::Decimal => "DECIMAL",
            NumberKind::Hex => "HEX",
            NumberKind::Integer => "INTEGER",
        })
    }
}

/// Which quote delimits a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    /// `"`
    Double,
    /// `'`
    Single,
}

impl QuoteKind {
    /// The delimiter byte.
    #[inline]
    pub const fn byte(&self) -> u8 {
        match self {
            QuoteKind::Double => b'"',
            QuoteKind::Single => b'\'',
        }
    }
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuoteKind::Double => "DOUBLE",
            QuoteKind::Single => "SINGLE",
        })
    }
}

/// Operators and punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Accessor,
    Arrow,
    Asterisk,
    BackSlash,
    BitwiseAnd,
    BitwiseAndEqual,
    BitwiseNot,
    BitwiseOr,
    BitwiseOrEqual,
    BitwiseXor,
    BitwiseXorEqual,
    ClosedAttribute,
    ClosedCurly,
    ClosedParen,
    ClosedSquare,
    Colon,
    Comma,
    Decrement,
    Divide,
    DivideEquals,
    Equals,
    EqualsTo,
    Greater,
    GreaterEqual,
    Increment,
    LeftShift,
    LeftShiftEqual,
    Less,
    LessEqual,
    LogicalAnd,
    LogicalNot,
    LogicalOr,
    LogicalXor,
    Macro,
    MatchCase,
    Minus,
    MinusEqual,
    Modulo,
    ModuloEqual,
    MultiplyEqual,
    NotEqual,
    OpenAttribute,
    OpenCurly,
    OpenParen,
    OpenSquare,
    Plus,
    PlusEqual,
    RightShift,
    RightShiftEqual,
    Scope,
    Semicolon,
    Ternary,
    ThreeWayComp,
    /// A reserved symbol with no meaning yet (`` ` ``, `@`).
    Unsupported,
}

impl Operator {
    /// Source spelling. [`Operator::Unsupported`] has none.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Accessor => ".",
            Operator::Arrow => "->",
            Operator::Asterisk => "*",
            Operator::BackSlash => "\\",
            Operator::BitwiseAnd => "&",
            Operator::BitwiseAndEqual => "&=",
            Operator::BitwiseNot => "~",
            Operator::BitwiseOr => "|",
            Operator::BitwiseOrEqual => "|=",
            Operator::BitwiseXor => "^",
            Operator::BitwiseXorEqual => "^=",
            Operator::ClosedAttribute => "]]",
            Operator::ClosedCurly => "}",
            Operator::ClosedParen => ")",
            Operator::ClosedSquare => "]",
            Operator::Colon => ":",
            Operator::Comma => ",",
            Operator::Decrement => "--",
            Operator::Divide => "/",
            Operator::DivideEquals => "/=",
            Operator::Equals => "=",
            Operator::EqualsTo => "==",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::Increment => "++",
            Operator::LeftShift => "<<",
            Operator::LeftShiftEqual => "<<=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::LogicalAnd => "&&",
            Operator::LogicalNot => "!",
            Operator::LogicalOr => "||",
            Operator::LogicalXor => "^^",
            Operator::Macro => "#",
            Operator::MatchCase => "=>",
            Operator::Minus => "-",
            Operator::MinusEqual => "-=",
            Operator::Modulo => "%",
            Operator::ModuloEqual => "%=",
            Operator::MultiplyEqual => "*=",
            Operator::NotEqual => "!=",
            Operator::OpenAttribute => "[[",
            Operator::OpenCurly => "{",
            Operator::OpenParen => "(",
            Operator::OpenSquare => "[",
            Operator::Plus => "+",
            Operator::PlusEqual => "+=",
            Operator::RightShift => ">>",
            Operator::RightShiftEqual => ">>=",
            Operator::Scope => "::",
            Operator::Semicolon => ";",
            Operator::Ternary => "?",
            Operator::ThreeWayComp => "<=>",
            Operator::Unsupported => "",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Unsupported => f.write_str("UNSUPPORTED_OPERATOR"),
            op => f.write_str(op.symbol()),
        }
    }
}

/// Token classification with its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Statement terminator. Has no text.
    Eol,
    Keyword(Keyword),
    Number(NumberKind),
    Operator(Operator),
    String(QuoteKind),
    /// A word that is not a keyword, with the hash of its text.
    Word(u64),
}

impl TokenKind {
    /// The payload-free classification.
    pub const fn token_type(&self) -> TokenType {
        match self {
            TokenKind::Eol => TokenType::Eol,
            TokenKind::Keyword(_) => TokenType::Keyword,
            TokenKind::Number(_) => TokenType::Number,
            TokenKind::Operator(_) => TokenType::Operator,
            TokenKind::String(_) => TokenType::String,
            TokenKind::Word(_) => TokenType::Word,
        }
    }
}

/// Token classification without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    Eol,
    Keyword,
    Number,
    Operator,
    String,
    Word,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenType::Eol => "EOL",
            TokenType::Keyword => "KEYWORD",
            TokenType::Number => "NUMBER",
            TokenType::Operator => "OPERATOR",
            TokenType::String => "STRING",
            TokenType::Word => "WORD",
        })
    }
}

/// A classified lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Index into [`ScanResults::lines`].
    pub line: usize,
    /// Index into that line's lexemes.
    pub lexeme: usize,
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub const fn new(line: usize, lexeme: usize, kind: TokenKind) -> Self {
        Self { line, lexeme, kind }
    }

    /// Statement terminator for `line`.
    #[inline]
    pub const fn eol(line: usize) -> Self {
        Self::new(line, 0, TokenKind::Eol)
    }

    /// Returns true for [`TokenKind::Eol`].
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.kind == TokenKind::Eol
    }
}

/// A run of tokens ending in exactly one [`TokenKind::Eol`].
pub type Statement = Vec<Token>;

/// A multi-line construct still open when input ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenConstruct {
    /// `/*` with no matching `*/`. Holds the line the comment started on.
    BlockComment { line: usize },
    /// `//` comment whose last line ends in a continuation mark.
    ContinuedComment { line: usize },
    /// String literal whose last line ends in a continuation mark.
    String { line: usize, quote: QuoteKind },
}

/// Everything a scan produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResults {
    /// One entry per physical input line.
    pub lines: Vec<Line>,
    /// Statements in source order.
    pub statements: Vec<Statement>,
    /// Set when input ended inside a comment or string.
    pub open_construct: Option<OpenConstruct>,
}

impl ScanResults {
    /// Source text of `token`. Empty for end-of-line tokens.
    pub fn text_of(&self, token: &Token) -> &str {
        if token.is_eol() {
            return "";
        }
        self.lexeme_of(token)
            .and_then(|lexeme| self.lines.get(token.line).map(|line| line.slice(lexeme)))
            .unwrap_or("")
    }

    /// The lexeme a token refers to.
    pub fn lexeme_of(&self, token: &Token) -> Option<Lexeme> {
        self.lines
            .get(token.line)
            .and_then(|line| line.lexemes.get(token.lexeme))
            .copied()
    }

    /// Total lexemes over all lines.
    pub fn lexeme_count(&self) -> usize {
        self.lines.iter().map(|line| line.lexemes.len()).sum()
    }

    /// Total tokens over all statements, terminators included.
    pub fn token_count(&self) -> usize {
        self.statements.iter().map(Vec::len).sum()
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.statements.iter().flatten()
    }
}

/// Entry in the keyword table.
#[derive(Clone, Copy, Debug)]
struct KeywordEntry {
    text: &'static str,
    keyword: Keyword,
}

static KEYWORDS: LazyLock<FxHashMap<u64, KeywordEntry>> = LazyLock::new(|| {
    Keyword::ALL
        .iter()
        .map(|&keyword| {
            let text = keyword.as_str();
            (hash_word(text.as_bytes()), KeywordEntry { text, keyword })
        })
        .collect()
});

/// Order-sensitive hash of a word's bytes.
#[inline]
pub fn hash_word(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

/// Resolve a word against the keyword table given its precomputed hash.
///
/// A hash hit is confirmed by comparing length and then bytes, so a
/// colliding word is never taken for a keyword.
pub fn lookup_keyword(hash: u64, bytes: &[u8]) -> Option<Keyword> {
    KEYWORDS.get(&hash).and_then(|entry| {
        let text = entry.text.as_bytes();
        (text.len() == bytes.len() && text == bytes).then_some(entry.keyword)
    })
}

/// Resolve a word against the keyword table.
///
/// # Examples
///
/// ```
/// use prelim_lex::token::{keyword_from_word, Keyword};
///
/// assert_eq!(keyword_from_word(b"fn"), Some(Keyword::Fn));
/// assert_eq!(keyword_from_word(b"fnx"), None);
/// ```
pub fn keyword_from_word(bytes: &[u8]) -> Option<Keyword> {
    lookup_keyword(hash_word(bytes), bytes)
}
