//! Shared test utilities
//!
//! Helpers for running Pascalite source in integration tests.

#![allow(dead_code)]

use pascalite_runtime::{Environment, Error, Pascalite, Value};

// Re-export testing utilities
pub use pretty_assertions::assert_eq;

/// Wrap statements in a minimal program
pub fn program(body: &str) -> String {
    format!("PROGRAM test;\nBEGIN\n{}\nEND.", body)
}

/// Run a full program, panicking on any error
pub fn run(source: &str) -> Environment {
    Pascalite::new()
        .run(source)
        .unwrap_or_else(|e| panic!("program failed: {}\n{}", e, source))
}

/// Run a full program that is expected to fail
pub fn run_err(source: &str) -> Error {
    match Pascalite::new().run(source) {
        Ok(env) => panic!("expected an error, got {:?}", env),
        Err(e) => e,
    }
}

/// Evaluate a standalone expression, panicking on any error
pub fn eval(expr: &str) -> Value {
    Pascalite::new()
        .eval_expr(expr)
        .unwrap_or_else(|e| panic!("expression failed: {}\n{}", e, expr))
}

/// Assert that `name` is bound to `expected` in `env`
pub fn assert_binding(env: &Environment, name: &str, expected: Value) {
    assert_eq!(
        env.get(name),
        Some(&expected),
        "binding for '{}' in {:?}",
        name,
        env
    );
}
