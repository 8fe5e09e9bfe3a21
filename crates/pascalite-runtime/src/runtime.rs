//! Pascalite runtime API for embedding

use crate::ast::{Expr, Program};
use crate::binder::Binder;
use crate::environment::Environment;
use crate::error::{Error, ParseError};
use crate::interpreter::{Interpreter, InterpreterOptions};
use crate::parser::Parser;
use crate::symbol::SymbolTable;
use crate::value::Value;
use std::path::Path;
use tracing::debug;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, Error>;

/// Knobs that change how source is parsed and evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// See [`InterpreterOptions::falsy_is_undefined`]
    pub falsy_is_undefined: bool,
    /// Parser nesting limit
    pub max_nesting_depth: usize,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            falsy_is_undefined: true,
            max_nesting_depth: Parser::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Pascalite runtime instance
///
/// Runs the whole pipeline (scan, parse, bind, interpret) over source text.
///
/// # Examples
///
/// ```
/// use pascalite_runtime::{Pascalite, Value};
///
/// let runtime = Pascalite::new();
/// let env = runtime
///     .run("PROGRAM demo; BEGIN x := 5; y := x + 1 END.")
///     .unwrap();
/// assert_eq!(env.get("y"), Some(&Value::Integer(6)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pascalite {
    options: RuntimeOptions,
}

impl Pascalite {
    /// Create a new runtime with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RuntimeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RuntimeOptions {
        self.options
    }

    /// Parse a program without running it
    pub fn parse(&self, source: &str) -> RuntimeResult<Program> {
        let program = self.parser(source)?.parse()?;
        Ok(program)
    }

    /// Parse and bind a program, returning its declared symbols
    pub fn check(&self, source: &str) -> RuntimeResult<SymbolTable> {
        let program = self.parse(source)?;
        Ok(Binder::new().bind(&program))
    }

    /// Run a program and return its final bindings
    pub fn run(&self, source: &str) -> RuntimeResult<Environment> {
        let program = self.parse(source)?;

        let symbols = Binder::new().bind(&program);
        debug!(
            variables = symbols.variables().count(),
            "bound declarations"
        );

        let env = self.interpreter().interpret(&program)?;
        Ok(env)
    }

    /// Read and run a program file
    ///
    /// ```no_run
    /// use pascalite_runtime::Pascalite;
    ///
    /// let env = Pascalite::new().run_file("program.pas");
    /// ```
    pub fn run_file(&self, path: impl AsRef<Path>) -> RuntimeResult<Environment> {
        let source = read_source(path)?;
        self.run(&source)
    }

    /// Evaluate a standalone expression against an empty environment
    ///
    /// ```
    /// use pascalite_runtime::{Pascalite, Value};
    ///
    /// let value = Pascalite::new().eval_expr("(2 + 3) * 4").unwrap();
    /// assert_eq!(value, Value::Integer(20));
    /// ```
    pub fn eval_expr(&self, source: &str) -> RuntimeResult<Value> {
        let expr: Expr = self.parser(source)?.parse_expression()?;
        let value = self.interpreter().evaluate(&expr, &Environment::new())?;
        Ok(value)
    }

    fn parser(&self, source: &str) -> Result<Parser, ParseError> {
        Ok(Parser::from_source(source)?.with_max_depth(self.options.max_nesting_depth))
    }

    fn interpreter(&self) -> Interpreter {
        Interpreter::with_options(InterpreterOptions {
            falsy_is_undefined: self.options.falsy_is_undefined,
        })
    }
}

/// Read a source file, attaching the path to any I/O failure
pub fn read_source(path: impl AsRef<Path>) -> RuntimeResult<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading source");
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_bindings() {
        let env = Pascalite::new()
            .run("PROGRAM p; BEGIN a := 2; b := a * 3 END.")
            .unwrap();
        assert_eq!(env.get("b"), Some(&Value::Integer(6)));
    }

    #[test]
    fn test_nesting_limit_comes_from_options() {
        let runtime = Pascalite::with_options(RuntimeOptions {
            max_nesting_depth: 2,
            ..RuntimeOptions::default()
        });
        let err = runtime.eval_expr("((1))").unwrap_err();
        assert!(err.is_syntax());
        assert!(runtime.eval_expr("(1)").is_ok());
    }

    #[test]
    fn test_run_file_missing() {
        let err = Pascalite::new()
            .run_file("definitely/not/here.pas")
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_check_returns_symbols() {
        let symbols = Pascalite::new()
            .check("PROGRAM p; VAR n : INTEGER; BEGIN END.")
            .unwrap();
        assert!(symbols.lookup("N").is_some());
    }
}
