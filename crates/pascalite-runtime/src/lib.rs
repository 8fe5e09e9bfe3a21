//! Pascalite Runtime - Core language implementation
//!
//! This library provides the complete Pascalite pipeline:
//! - Lexical analysis and parsing
//! - Declaration binding
//! - Tree-walking interpretation
//! - Error diagnostics

/// Pascalite runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod binder;
pub mod diagnostic;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod span;
pub mod symbol;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use ast::{Program, VersionedProgram, AST_VERSION};
pub use binder::Binder;
pub use diagnostic::{Diagnostic, DIAG_VERSION};
pub use environment::Environment;
pub use error::{error_codes, Error, LexError, ParseError, RuntimeError, SyntaxError};
pub use interpreter::{Interpreter, InterpreterOptions};
pub use lexer::Lexer;
pub use parser::Parser;
pub use runtime::{read_source, Pascalite, RuntimeOptions, RuntimeResult};
pub use span::Span;
pub use symbol::{Symbol, SymbolKind, SymbolTable};
pub use token::{Token, TokenKind, TokenValue};
pub use value::Value;
