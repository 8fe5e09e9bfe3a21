//! Lexical analysis (tokenization)
//!
//! The lexer converts Pascalite source code into tokens on demand. The parser
//! pulls one token at a time through [`Lexer::next_token`]; callers that want
//! the whole stream can use [`Lexer::tokenize`] or iterate.

use crate::error::LexError;
use crate::span::Span;
use crate::token::{Token, TokenKind, TokenValue, DOUBLE_CHAR_TOKENS, SINGLE_CHAR_TOKENS};
use tracing::trace;

mod literals;

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Characters of source code
    pub(super) chars: Vec<char>,
    /// Current position in chars
    pub(super) current: usize,
    /// Current line number (1-indexed)
    pub(super) line: u32,
    /// Current column number (1-indexed)
    pub(super) column: u32,
    /// Start position of current token
    pub(super) start_pos: usize,
    /// Start line of current token
    pub(super) start_line: u32,
    /// Start column of current token
    pub(super) start_column: u32,
    /// Set once the iterator has yielded `Eof` or an error
    finished: bool,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: impl AsRef<str>) -> Self {
        Self {
            chars: source.as_ref().chars().collect(),
            current: 0,
            line: 1,
            column: 1,
            start_pos: 0,
            start_line: 1,
            start_column: 1,
            finished: false,
        }
    }

    /// Tokenize the whole input, including the final `Eof` token
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        self.by_ref().collect()
    }

    /// Scan the next token
    ///
    /// Once the input is exhausted every call returns an `Eof` token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;
        self.mark_start();

        let Some(c) = self.peek() else {
            return Ok(Token::eof(self.span()));
        };
        self.advance();

        let token = match c {
            '\'' => self.string()?,
            c if c.is_ascii_digit() => self.number()?,
            c if c.is_alphabetic() || c == '_' => self.identifier(),
            c => self.operator(c)?,
        };

        trace!(kind = ?token.kind, at = %token.span, "scanned token");
        Ok(token)
    }

    /// Skip whitespace and `{ ... }` comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ' | '\n' | '\t' | '\r') => {
                    self.advance();
                }
                Some('{') => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skip a comment. Comments do not nest: the first `}` closes it.
    fn skip_comment(&mut self) -> Result<(), LexError> {
        self.mark_start();
        self.advance(); // {

        while let Some(c) = self.peek() {
            self.advance();
            if c == '}' {
                return Ok(());
            }
        }

        Err(LexError::UnterminatedComment { span: self.span() })
    }

    /// Scan an operator or punctuation token, preferring two-character forms
    fn operator(&mut self, c: char) -> Result<Token, LexError> {
        let next = self.peek();

        if let Some(&(_, _, kind)) = DOUBLE_CHAR_TOKENS
            .iter()
            .find(|(first, second, _)| *first == c && next == Some(*second))
        {
            self.advance();
            return Ok(self.make_text_token(kind));
        }

        match SINGLE_CHAR_TOKENS.iter().find(|(ch, _)| *ch == c) {
            Some(&(_, kind)) => Ok(self.make_text_token(kind)),
            None => Err(LexError::UnexpectedCharacter {
                ch: c,
                span: self.span(),
            }),
        }
    }

    // === Character navigation ===

    /// Advance to next character and return it
    pub(super) fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Peek at current character without advancing
    pub(super) fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    /// Peek at next character (current + 1)
    pub(super) fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    fn mark_start(&mut self) {
        self.start_pos = self.current;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    // === Token creation ===

    /// Span from the start of the current token to the current position
    pub(super) fn span(&self) -> Span {
        Span::new(
            self.start_pos,
            self.current,
            self.start_line,
            self.start_column,
        )
    }

    /// Source text of the current token
    pub(super) fn lexeme(&self) -> String {
        self.chars[self.start_pos..self.current].iter().collect()
    }

    pub(super) fn make_token(&self, kind: TokenKind, value: TokenValue) -> Token {
        Token::new(kind, value, self.span())
    }

    /// Create a token whose value is its own source text
    pub(super) fn make_text_token(&self, kind: TokenKind) -> Token {
        self.make_token(kind, TokenValue::Text(self.lexeme()))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including `Eof`, or up to the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if !matches!(&result, Ok(token) if token.kind != TokenKind::Eof) {
            self.finished = true;
        }
        Some(result)
    }
}
