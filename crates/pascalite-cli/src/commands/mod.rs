//! Subcommand implementations

pub mod ast;
pub mod check;
pub mod eval;
pub mod run;
pub mod tokens;

use anyhow::{Context, Result};
use pascalite_runtime::{Diagnostic, Error};
use std::fs;
use std::path::Path;

/// Read a source file for a command
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))
}

/// Print the diagnostic for `err` to stderr
fn report(err: &Error, file: &str, source: &str, json: bool) {
    let diag = Diagnostic::from_error(err, file, source);
    if json {
        match diag.to_json_compact() {
            Ok(text) => eprintln!("{}", text),
            Err(_) => eprint!("{}", diag.to_human_string()),
        }
    } else {
        eprint!("{}", diag.to_human_string());
    }
}
