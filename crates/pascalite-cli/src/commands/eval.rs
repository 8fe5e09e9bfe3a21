//! Eval command - evaluate a single expression

use super::report;
use anyhow::{anyhow, Result};
use pascalite_runtime::{Pascalite, RuntimeOptions};

/// Evaluate `expr` against an empty environment and print the value
pub fn run(expr: &str, options: RuntimeOptions) -> Result<()> {
    match Pascalite::with_options(options).eval_expr(expr) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(err) => {
            report(&err, "<expr>", expr, false);
            Err(anyhow!("Failed to evaluate expression"))
        }
    }
}
