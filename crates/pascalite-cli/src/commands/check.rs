//! Check command - parse and bind without executing

use super::{read_source, report};
use anyhow::{anyhow, Result};
use pascalite_runtime::{Pascalite, RuntimeOptions, SymbolTable};
use std::path::Path;

/// Parse and bind a source file, printing the declared variables
pub fn run(file_path: &Path, options: RuntimeOptions) -> Result<()> {
    let source = read_source(file_path)?;
    let file = file_path.display().to_string();

    match Pascalite::with_options(options).check(&source) {
        Ok(symbols) => {
            print!("{}", render(&symbols));
            println!("{}: No errors found", file);
            Ok(())
        }
        Err(err) => {
            report(&err, &file, &source, false);
            Err(anyhow!("Check failed for {}", file))
        }
    }
}

fn render(symbols: &SymbolTable) -> String {
    symbols
        .variables()
        .map(|symbol| format!("{}\n", symbol))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_variables_only() {
        let symbols = Pascalite::new()
            .check("PROGRAM p; VAR a, b : INTEGER; y : REAL; BEGIN END.")
            .unwrap();
        assert_eq!(render(&symbols), "a: INTEGER\nb: INTEGER\ny: REAL\n");
    }
}
