//! SQL tokenizer built on Logos.
//!
//! The lexer only needs to be precise enough to find statement boundaries,
//! comments and top-level keywords. It does not validate SQL.

use logos::{Lexer, Logos};
use std::fmt;
use std::ops::Range;

/// A span in the source code (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Get the source text for this span.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Token types produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    // ===== Comments =====
    /// A `--` comment running to the end of the line.
    #[regex(r"--[^\n]*", |lex| lex.slice())]
    LineComment(&'src str),

    /// A `/* ... */` comment, possibly spanning lines.
    ///
    /// An unclosed comment lexes as [`Token::Error`] running to the end of
    /// the input.
    #[token("/*", block_comment)]
    BlockComment(&'src str),

    // ===== Literals =====
    /// A single-quoted string literal. `''` is an escaped quote.
    #[regex(r"'([^']|'')*'", |lex| lex.slice())]
    String(&'src str),

    /// A double-quoted identifier.
    #[regex(r#""([^"]|"")*""#, |lex| lex.slice())]
    QuotedIdent(&'src str),

    /// A PostgreSQL dollar-quoted literal, `$$...$$` or `$tag$...$tag$`.
    ///
    /// An unclosed literal lexes as [`Token::Error`] running to the end of
    /// the input.
    #[regex(r"\$([A-Za-z_][A-Za-z0-9_]*)?\$", dollar_string)]
    DollarString(&'src str),

    /// A backtick-quoted identifier (MySQL, BigQuery, Databricks).
    #[regex(r"`[^`]*`", |lex| lex.slice())]
    BacktickIdent(&'src str),

    /// An unsigned numeric literal.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?", |lex| lex.slice())]
    Number(&'src str),

    /// A bare word: keyword or identifier.
    #[regex(r"[A-Za-z_][A-Za-z0-9_$]*", |lex| lex.slice())]
    Word(&'src str),

    // ===== Punctuation =====
    /// Left parenthesis `(`.
    #[token("(")]
    LParen,
    /// Right parenthesis `)`.
    #[token(")")]
    RParen,
    /// Statement terminator `;`.
    #[token(";")]
    Semicolon,
    /// Comma `,`.
    #[token(",")]
    Comma,
    /// Dot `.` in qualified names.
    #[token(".")]
    Dot,

    /// Any other single operator character.
    #[regex(r"[-+*/%<>=!|&^~:@#?\[\]{}$\\]", |lex| lex.slice())]
    Operator(&'src str),

    /// Error token for unrecognized input (e.g. an unterminated quote).
    Error,
}

impl Token<'_> {
    /// Returns true for line and block comments.
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::LineComment(_) | Self::BlockComment(_))
    }

    /// Returns the upper-cased keyword if this token is a reserved word.
    pub fn keyword(&self) -> Option<String> {
        match self {
            Self::Word(word) => {
                let upper = word.to_ascii_uppercase();
                is_keyword(&upper).then_some(upper)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineComment(s)
            | Self::BlockComment(s)
            | Self::String(s)
            | Self::QuotedIdent(s)
            | Self::DollarString(s)
            | Self::BacktickIdent(s)
            | Self::Number(s)
            | Self::Word(s)
            | Self::Operator(s) => write!(f, "{s}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Error => write!(f, "<error>"),
        }
    }
}

/// Scan from an opening `/*` to the first `*/`.
fn block_comment<'src>(lex: &mut Lexer<'src, Token<'src>>) -> Option<&'src str> {
    scan_to(lex, "*/")
}

/// Scan from an opening `$tag$` to the same tag.
fn dollar_string<'src>(lex: &mut Lexer<'src, Token<'src>>) -> Option<&'src str> {
    let tag = lex.slice();
    scan_to(lex, tag)
}

/// Extend the current token through `terminator`. Without one the rest of
/// the input is consumed and the token becomes an error.
fn scan_to<'src>(lex: &mut Lexer<'src, Token<'src>>, terminator: &str) -> Option<&'src str> {
    if let Some(offset) = lex.remainder().find(terminator) {
        lex.bump(offset + terminator.len());
        Some(lex.slice())
    } else {
        lex.bump(lex.remainder().len());
        None
    }
}

/// Reserved words that count as keywords when looking for the last
/// top-level keyword of a statement. Sorted for binary search.
const KEYWORDS: &[&str] = &[
    "ALL",
    "ALTER",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "BETWEEN",
    "BY",
    "CASE",
    "CREATE",
    "CROSS",
    "DELETE",
    "DESC",
    "DISTINCT",
    "DROP",
    "ELSE",
    "END",
    "EXCEPT",
    "EXISTS",
    "FALSE",
    "FETCH",
    "FIRST",
    "FOR",
    "FROM",
    "FULL",
    "GROUP",
    "HAVING",
    "ILIKE",
    "IN",
    "INNER",
    "INSERT",
    "INTERSECT",
    "INTO",
    "IS",
    "JOIN",
    "LEFT",
    "LIKE",
    "LIMIT",
    "MERGE",
    "NATURAL",
    "NEXT",
    "NOT",
    "NULL",
    "OFFSET",
    "ON",
    "ONLY",
    "OR",
    "ORDER",
    "OUTER",
    "OVER",
    "PARTITION",
    "QUALIFY",
    "REPLACE",
    "RIGHT",
    "ROW",
    "ROWS",
    "SELECT",
    "SET",
    "TABLE",
    "THEN",
    "TOP",
    "TRUE",
    "TRUNCATE",
    "UNION",
    "UPDATE",
    "USING",
    "VALUES",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
];

/// Returns true if `upper` (already upper-cased) is a reserved word.
pub fn is_keyword(upper: &str) -> bool {
    KEYWORDS.binary_search(&upper).is_ok()
}

/// Tokenize SQL into a vector of (Token, Span) pairs.
///
/// Whitespace is skipped; lexer errors become [`Token::Error`] so callers
/// always see the whole input.
pub fn tokenize(source: &str) -> Vec<(Token<'_>, Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span: Span = lexer.span().into();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => tokens.push((Token::Error, span)),
        }
    }

    tokens
}
