//! Run command - execute Pascalite source files

use super::{read_source, report};
use anyhow::{anyhow, Result};
use pascalite_runtime::{Environment, Pascalite, RuntimeOptions};
use std::path::Path;

/// Run a source file and print its final variables
///
/// Prints `name = value` lines sorted by name, or one JSON object when
/// `json` is set. On failure the diagnostic goes to stderr.
pub fn run(file_path: &Path, options: RuntimeOptions, json: bool) -> Result<()> {
    let source = read_source(file_path)?;
    let file = file_path.display().to_string();

    match Pascalite::with_options(options).run(&source) {
        Ok(env) => {
            println!("{}", render(&env, json)?);
            Ok(())
        }
        Err(err) => {
            report(&err, &file, &source, json);
            Err(anyhow!("Failed to run {}", file))
        }
    }
}

/// Format the final environment
pub fn render(env: &Environment, json: bool) -> Result<String> {
    if json {
        return Ok(env.to_json()?);
    }
    let lines: Vec<String> = env
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_file(text: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", text).unwrap();
        temp_file
    }

    #[test]
    fn test_run_simple_program() {
        let file = source_file("PROGRAM p; BEGIN x := 1 END.");
        assert!(run(file.path(), RuntimeOptions::default(), false).is_ok());
    }

    #[test]
    fn test_run_missing_file() {
        let err = run(
            Path::new("nonexistent.pas"),
            RuntimeOptions::default(),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read source file"));
    }

    #[test]
    fn test_run_failure_is_an_error() {
        let file = source_file("PROGRAM p; BEGIN x := y END.");
        assert!(run(file.path(), RuntimeOptions::default(), false).is_err());
    }

    #[test]
    fn test_render_sorted_lines() {
        let env = Pascalite::new()
            .run("PROGRAM p; BEGIN b := 'two'; a := 1; c := 1 / 2 END.")
            .unwrap();
        assert_eq!(render(&env, false).unwrap(), "a = 1\nb = two\nc = 0.5");
    }

    #[test]
    fn test_render_json() {
        let env = Pascalite::new().run("PROGRAM p; BEGIN a := 1 END.").unwrap();
        let value: serde_json::Value = serde_json::from_str(&render(&env, true).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"a": 1}));
    }
}
