//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation against a single global [`Environment`].
//! Declarations are not enforced; a variable exists once it is assigned.

mod expr;
mod stmt;

use crate::ast::{Expr, Program};
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::value::Value;
use tracing::debug;

/// Behavior switches for the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Treat a variable bound to `0`, `0.0`, `''` or `false` as undefined
    /// when it is read
    pub falsy_is_undefined: bool,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            falsy_is_undefined: true,
        }
    }
}

/// Interpreter state
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    options: InterpreterOptions,
}

impl Interpreter {
    /// Create an interpreter with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: InterpreterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> InterpreterOptions {
        self.options
    }

    /// Run a program in a fresh environment and return its final bindings
    #[tracing::instrument(level = "debug", skip_all, fields(program = %program.name))]
    pub fn interpret(&self, program: &Program) -> Result<Environment, RuntimeError> {
        let mut env = Environment::new();
        self.interpret_in(program, &mut env)?;
        debug!(bindings = env.len(), "program finished");
        Ok(env)
    }

    /// Run a program against a caller-owned environment
    ///
    /// Bindings made before a runtime error stay in `env`.
    pub fn interpret_in(&self, program: &Program, env: &mut Environment) -> Result<(), RuntimeError> {
        self.exec_block(&program.block, env)
    }

    /// Evaluate a single expression without modifying `env`
    pub fn evaluate(&self, expr: &Expr, env: &Environment) -> Result<Value, RuntimeError> {
        self.eval_expr(expr, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn run(source: &str) -> Result<Environment, RuntimeError> {
        let program = Parser::from_source(source).unwrap().parse().unwrap();
        Interpreter::new().interpret(&program)
    }

    #[test]
    fn test_each_run_gets_a_fresh_environment() {
        let program = Parser::from_source("PROGRAM p; BEGIN x := 1 END.")
            .unwrap()
            .parse()
            .unwrap();
        let interpreter = Interpreter::new();
        let first = interpreter.interpret(&program).unwrap();
        let second = interpreter.interpret(&program).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_interpret_in_keeps_existing_bindings() {
        let program = Parser::from_source("PROGRAM p; BEGIN y := x + 1 END.")
            .unwrap()
            .parse()
            .unwrap();
        let mut env = Environment::new();
        env.set("x", Value::Integer(41));
        Interpreter::new().interpret_in(&program, &mut env).unwrap();
        assert_eq!(env.get("y"), Some(&Value::Integer(42)));
    }

    #[test]
    fn test_partial_bindings_survive_an_error() {
        let program = Parser::from_source("PROGRAM p; BEGIN a := 1; b := missing END.")
            .unwrap()
            .parse()
            .unwrap();
        let mut env = Environment::new();
        let err = Interpreter::new().interpret_in(&program, &mut env).unwrap_err();
        assert!(matches!(err, RuntimeError::UndefinedVariable { .. }));
        assert_eq!(env.get("a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_declarations_do_not_bind() {
        let env = run("PROGRAM p; VAR a : INTEGER; BEGIN END.").unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn test_falsy_quirk_can_be_disabled() {
        let program = Parser::from_source("PROGRAM p; BEGIN z := 0; y := z + 1 END.")
            .unwrap()
            .parse()
            .unwrap();

        let err = Interpreter::new().interpret(&program).unwrap_err();
        assert!(matches!(err, RuntimeError::UndefinedVariable { ref name, .. } if name == "z"));

        let lenient = Interpreter::with_options(InterpreterOptions {
            falsy_is_undefined: false,
        });
        let env = lenient.interpret(&program).unwrap();
        assert_eq!(env.get("y"), Some(&Value::Integer(1)));
    }
}
