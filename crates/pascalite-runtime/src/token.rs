//! Token types for lexical analysis
//!
//! Defines all token types recognized by the Pascalite lexer, along with the
//! tables the lexer scans against.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The literal value carried by the token
    pub value: TokenValue,
    /// Source location
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// End-of-input sentinel
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, TokenValue::Text(String::new()), span)
    }

    /// Source text that scans back to this token
    pub fn lexeme(&self) -> String {
        match &self.value {
            TokenValue::Integer(n) => n.to_string(),
            TokenValue::Real(r) => format_real(*r),
            TokenValue::Str(s) => format!("'{}'", s),
            TokenValue::Text(t) => t.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme())
    }
}

/// Render a real so that it always carries a fractional part
pub(crate) fn format_real(r: f64) -> String {
    let text = r.to_string();
    if text.contains('.') || !r.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Literal payload of a token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenValue {
    Integer(i64),
    Real(f64),
    /// String literal contents, without delimiters
    Str(String),
    /// Raw source text (identifiers, keywords, operators)
    Text(String),
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Integer literal (42)
    Integer,
    /// Real literal (3.14)
    Real,
    /// String literal ('hello')
    String,
    /// Identifier
    Id,

    // Keywords
    /// `program`
    Program,
    /// `var`
    Var,
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `integer` type name
    IntegerType,
    /// `real` type name
    RealType,
    /// `div` (floor division)
    Div,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/` (real division)
    Slash,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `:=`
    Assign,

    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,

    /// End of input
    Eof,
}

/// Reserved words, matched against the case-folded identifier
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("program", TokenKind::Program),
    ("var", TokenKind::Var),
    ("begin", TokenKind::Begin),
    ("end", TokenKind::End),
    ("integer", TokenKind::IntegerType),
    ("real", TokenKind::RealType),
    ("div", TokenKind::Div),
];

/// Two-character operators, tried before single characters
pub const DOUBLE_CHAR_TOKENS: &[(char, char, TokenKind)] = &[
    (':', '=', TokenKind::Assign),
    ('=', '=', TokenKind::EqualEqual),
    ('!', '=', TokenKind::BangEqual),
];

/// Single-character operators and punctuation
pub const SINGLE_CHAR_TOKENS: &[(char, TokenKind)] = &[
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Star),
    ('/', TokenKind::Slash),
    ('(', TokenKind::LeftParen),
    (')', TokenKind::RightParen),
    (';', TokenKind::Semicolon),
    ('.', TokenKind::Dot),
    (',', TokenKind::Comma),
    (':', TokenKind::Colon),
];

impl TokenKind {
    /// Look up a reserved word. `word` is folded to lowercase first.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let folded = word.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(text, _)| *text == folded)
            .map(|(_, kind)| *kind)
    }

    /// Get the string representation of this token kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Integer => "integer literal",
            TokenKind::Real => "real literal",
            TokenKind::String => "string literal",
            TokenKind::Id => "identifier",
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::IntegerType => "INTEGER",
            TokenKind::RealType => "REAL",
            TokenKind::Div => "DIV",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::EqualEqual => "'=='",
            TokenKind::BangEqual => "'!='",
            TokenKind::Assign => "':='",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Semicolon => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
