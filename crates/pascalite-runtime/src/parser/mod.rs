//! Parsing (tokens to AST)
//!
//! Recursive descent with a single token of lookahead. The parser pulls
//! tokens from the lexer on demand and stops at the first error; there is
//! no recovery and no partial tree.

mod expr;
mod stmt;

use crate::ast::*;
use crate::error::{ParseError, SyntaxError};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use tracing::debug;

/// Parser state for building an AST from a lexer
pub struct Parser {
    lexer: Lexer,
    /// Lookahead token
    pub(super) current: Token,
    /// Current nesting of compounds, groups and unary operators
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Nesting limit used unless [`Parser::with_max_depth`] says otherwise
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Create a parser, scanning the first token
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        })
    }

    /// Create a parser directly from source text
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::new(Lexer::new(source))
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a complete program. Nothing may follow the final `.`.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let program = self.program()?;
        self.expect_end()?;
        debug!(
            name = %program.name,
            declarations = program.block.declarations.len(),
            statements = program.block.body.statements.len(),
            "parsed program"
        );
        Ok(program)
    }

    /// Parse a standalone expression followed by end of input
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let expr = self.expr()?;
        self.expect_end()?;
        Ok(expr)
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.check(TokenKind::Eof) {
            Ok(())
        } else {
            Err(SyntaxError::TrailingInput {
                found: self.current.kind,
                span: self.current.span,
            }
            .into())
        }
    }

    // === Token navigation ===

    /// Consume the current token and scan the next one
    pub(super) fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it has the given kind, otherwise fail
    pub(super) fn eat(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind))
        }
    }

    /// Check if current token matches kind
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(super) fn unexpected(&self, expected: TokenKind) -> ParseError {
        SyntaxError::UnexpectedToken {
            expected,
            found: self.current.kind,
            span: self.current.span,
        }
        .into()
    }

    /// Run `f` one nesting level deeper, failing once the limit is reached
    pub(super) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
                span: self.current.span,
            }
            .into());
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;

    fn parse(source: &str) -> Result<Program, ParseError> {
        Parser::from_source(source)?.parse()
    }

    #[test]
    fn test_minimal_program() {
        let program = parse("PROGRAM p; BEGIN END.").unwrap();
        assert_eq!(program.name, "p");
        assert!(program.block.declarations.is_empty());
        assert_eq!(program.block.body.statements, vec![Stmt::NoOp]);
    }

    #[test]
    fn test_missing_dot() {
        let err = parse("PROGRAM p; BEGIN END").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax(SyntaxError::UnexpectedToken {
                expected: TokenKind::Dot,
                found: TokenKind::Eof,
                ..
            })
        ));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("PROGRAM p; BEGIN END. x").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax(SyntaxError::TrailingInput {
                found: TokenKind::Id,
                ..
            })
        ));
    }

    #[test]
    fn test_lex_error_surfaces_unchanged() {
        let err = parse("PROGRAM p; BEGIN x := # END.").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Lex(LexError::UnexpectedCharacter { ch: '#', .. })
        ));
    }

    #[test]
    fn test_lex_error_in_first_token() {
        assert!(matches!(
            Parser::from_source("#"),
            Err(ParseError::Lex(LexError::UnexpectedCharacter { .. }))
        ));
    }

    #[test]
    fn test_nesting_limit_is_configurable() {
        let source = "((((1))))";
        let mut shallow = Parser::from_source(source).unwrap().with_max_depth(3);
        assert!(matches!(
            shallow.parse_expression(),
            Err(ParseError::Syntax(SyntaxError::NestingTooDeep { limit: 3, .. }))
        ));

        let mut deep_enough = Parser::from_source(source).unwrap().with_max_depth(4);
        assert!(deep_enough.parse_expression().is_ok());
    }

    #[test]
    fn test_parse_expression_rejects_trailing_tokens() {
        let err = Parser::from_source("1 + 2 3")
            .unwrap()
            .parse_expression()
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax(SyntaxError::TrailingInput {
                found: TokenKind::Integer,
                ..
            })
        ));
    }
}
