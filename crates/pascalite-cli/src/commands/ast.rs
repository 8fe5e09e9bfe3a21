//! AST dump command - output AST as JSON

use super::{read_source, report};
use anyhow::{anyhow, Result};
use pascalite_runtime::{Pascalite, RuntimeOptions, VersionedProgram};
use std::path::Path;

/// Dump AST to JSON
///
/// Parses the source file and outputs the versioned AST as JSON to stdout.
pub fn run(file_path: &Path, options: RuntimeOptions) -> Result<()> {
    let source = read_source(file_path)?;
    let file = file_path.display().to_string();

    let program = match Pascalite::with_options(options).parse(&source) {
        Ok(program) => program,
        Err(err) => {
            report(&err, &file, &source, true);
            return Err(anyhow!("Failed to parse {}", file));
        }
    };

    let json = VersionedProgram::new(program).to_json()?;
    println!("{}", json);
    Ok(())
}
