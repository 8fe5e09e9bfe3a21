//! Error types for every stage of the pipeline
//!
//! All errors are fatal: the stage that raises one stops immediately and
//! nothing partial is returned to the caller.

use crate::span::Span;
use crate::token::TokenKind;
use std::path::PathBuf;
use thiserror::Error;

/// Error raised while scanning source text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {span}")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("unterminated string literal starting at {span}")]
    UnterminatedString { span: Span },

    #[error("unterminated comment starting at {span}")]
    UnterminatedComment { span: Span },

    #[error("numeric literal {lexeme} is out of range at {span}")]
    NumberOutOfRange { lexeme: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::UnterminatedComment { span }
            | LexError::NumberOutOfRange { span, .. } => *span,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => error_codes::UNEXPECTED_CHARACTER,
            LexError::UnterminatedString { .. } => error_codes::UNTERMINATED_STRING,
            LexError::UnterminatedComment { .. } => error_codes::UNTERMINATED_COMMENT,
            LexError::NumberOutOfRange { .. } => error_codes::NUMBER_OUT_OF_RANGE,
        }
    }
}

/// Error raised when the token stream does not match the grammar
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    #[error("expected end of input, found {found} at {span}")]
    TrailingInput { found: TokenKind, span: Span },

    #[error("nesting deeper than {limit} levels at {span}")]
    NestingTooDeep { limit: usize, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::TrailingInput { span, .. }
            | SyntaxError::NestingTooDeep { span, .. } => *span,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SyntaxError::UnexpectedToken { .. } => error_codes::UNEXPECTED_TOKEN,
            SyntaxError::TrailingInput { .. } => error_codes::TRAILING_INPUT,
            SyntaxError::NestingTooDeep { .. } => error_codes::NESTING_TOO_DEEP,
        }
    }
}

/// Anything that can stop the parser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span(),
            ParseError::Syntax(e) => e.span(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Lex(e) => e.code(),
            ParseError::Syntax(e) => e.code(),
        }
    }
}

/// Error raised while evaluating a program
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("undefined variable '{name}' at {span}")]
    UndefinedVariable { name: String, span: Span },

    #[error("unsupported operand types for {op}: {left} and {right} at {span}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
        span: Span,
    },

    #[error("division by zero at {span}")]
    DivisionByZero { span: Span },

    #[error("integer overflow in {op} at {span}")]
    IntegerOverflow { op: &'static str, span: Span },
}

impl RuntimeError {
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::UndefinedVariable { span, .. }
            | RuntimeError::TypeMismatch { span, .. }
            | RuntimeError::DivisionByZero { span }
            | RuntimeError::IntegerOverflow { span, .. } => *span,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::UndefinedVariable { .. } => error_codes::UNDEFINED_VARIABLE,
            RuntimeError::TypeMismatch { .. } => error_codes::TYPE_MISMATCH,
            RuntimeError::DivisionByZero { .. } => error_codes::DIVISION_BY_ZERO,
            RuntimeError::IntegerOverflow { .. } => error_codes::INTEGER_OVERFLOW,
        }
    }
}

/// Top-level error returned by the [`crate::Pascalite`] facade
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Parse(ParseError::Lex(err))
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Parse(ParseError::Syntax(err))
    }
}

impl Error {
    /// Location of the failure, if it came from the source text
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Parse(e) => Some(e.span()),
            Error::Runtime(e) => Some(e.span()),
            Error::Io { .. } => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::Parse(e) => e.code(),
            Error::Runtime(e) => e.code(),
            Error::Io { .. } => error_codes::IO_ERROR,
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, Error::Parse(ParseError::Lex(_)))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Parse(ParseError::Syntax(_)))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Error::Runtime(_))
    }
}

/// Error code registry
pub mod error_codes {
    // PL1xxx - Lexical errors
    pub const UNEXPECTED_CHARACTER: &str = "PL1001";
    pub const UNTERMINATED_STRING: &str = "PL1002";
    pub const UNTERMINATED_COMMENT: &str = "PL1003";
    pub const NUMBER_OUT_OF_RANGE: &str = "PL1004";

    // PL2xxx - Syntax errors
    pub const UNEXPECTED_TOKEN: &str = "PL2001";
    pub const TRAILING_INPUT: &str = "PL2002";
    pub const NESTING_TOO_DEEP: &str = "PL2003";

    // PL3xxx - Runtime errors
    pub const UNDEFINED_VARIABLE: &str = "PL3001";
    pub const TYPE_MISMATCH: &str = "PL3002";
    pub const DIVISION_BY_ZERO: &str = "PL3003";
    pub const INTEGER_OVERFLOW: &str = "PL3004";

    // PL9xxx - Host errors
    pub const IO_ERROR: &str = "PL9001";
}
