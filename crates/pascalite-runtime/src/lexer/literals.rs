//! Literal scanning for the lexer

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind, TokenValue};

impl Lexer {
    /// Scan a string literal. The opening `'` has been consumed.
    ///
    /// There are no escape sequences; the literal ends at the next `'`.
    pub(super) fn string(&mut self) -> Result<Token, LexError> {
        let mut text = String::new();

        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString { span: self.span() }),
                Some('\'') => {
                    self.advance(); // Closing '
                    break;
                }
                Some(_) => text.push(self.advance()),
            }
        }

        Ok(self.make_token(TokenKind::String, TokenValue::Str(text)))
    }

    /// Scan a number literal (integer or real). The first digit has been consumed.
    pub(super) fn number(&mut self) -> Result<Token, LexError> {
        self.consume_digits();

        // A real needs at least one digit after the dot; "5." is 5 followed by '.'
        let is_real =
            self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit());

        if is_real {
            self.advance(); // consume .
            self.consume_digits();
        }

        let lexeme = self.lexeme();
        let out_of_range = || LexError::NumberOutOfRange {
            lexeme: lexeme.clone(),
            span: self.span(),
        };

        if is_real {
            match lexeme.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    Ok(self.make_token(TokenKind::Real, TokenValue::Real(value)))
                }
                _ => Err(out_of_range()),
            }
        } else {
            match lexeme.parse::<i64>() {
                Ok(value) => Ok(self.make_token(TokenKind::Integer, TokenValue::Integer(value))),
                Err(_) => Err(out_of_range()),
            }
        }
    }

    /// Scan an identifier or keyword. The first character has been consumed.
    pub(super) fn identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = self.lexeme();
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Id);
        self.make_token(kind, TokenValue::Text(lexeme))
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}
