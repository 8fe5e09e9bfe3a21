//! Tokens command - list the scanner's output

use super::{read_source, report};
use anyhow::{anyhow, Result};
use pascalite_runtime::{Error, Lexer, Token};
use std::path::Path;

/// Print one token per line as `line:column kind value`
pub fn run(file_path: &Path) -> Result<()> {
    let source = read_source(file_path)?;
    let file = file_path.display().to_string();

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            report(&Error::from(err), &file, &source, false);
            return Err(anyhow!("Failed to scan {}", file));
        }
    };

    for token in &tokens {
        println!("{}", format_token(token));
    }
    Ok(())
}

fn format_token(token: &Token) -> String {
    let line = format!(
        "{}:{} {:?} {}",
        token.span.line,
        token.span.column,
        token.kind,
        token.lexeme()
    );
    line.trim_end().to_string()
}
