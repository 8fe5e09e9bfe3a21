//! Configuration loading and precedence tests

use pascalite_config::{ConfigError, ConfigLoader, ProjectConfig, CONFIG_FILE_NAME};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_config_file(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join(CONFIG_FILE_NAME);
    fs::write(&config_path, content).unwrap();
    config_path
}

// ============================================================================
// Config Loading Tests
// ============================================================================

#[test]
#[serial]
fn test_load_when_no_config_exists() {
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap();

    assert!(!config.is_project());
    assert!(config.falsy_is_undefined());
    assert_eq!(config.max_nesting_depth(), 256);
    assert!(!config.json());
}

#[test]
#[serial]
fn test_load_project_config() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(
        temp_dir.path(),
        r#"
[interpreter]
falsy_is_undefined = false
max_nesting_depth = 100

[output]
json = true
"#,
    );

    let config = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap();

    assert!(config.is_project());
    assert!(!config.falsy_is_undefined());
    assert_eq!(config.max_nesting_depth(), 100);
    assert!(config.json());
}

#[test]
#[serial]
fn test_load_from_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[output]\njson = true\n").unwrap();

    let config = ConfigLoader::new().load_from_file(&path).unwrap();
    assert!(config.json());
    assert_eq!(config.project_root(), Some(temp_dir.path()));
}

#[test]
#[serial]
fn test_missing_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let err = ConfigLoader::new().load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(ref p) if p == &path));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
#[serial]
fn test_invalid_toml_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_config_file(temp_dir.path(), "[interpreter\n");

    let err = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap_err();
    match err {
        ConfigError::TomlParse { file, .. } => assert_eq!(file, path),
        other => panic!("expected TomlParse, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_unknown_key_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[interpreter]\nfast = true\n");

    let err = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap_err();
    assert!(matches!(err, ConfigError::TomlParse { .. }));
    assert!(err.to_string().contains("fast"));
}

#[test]
#[serial]
fn test_zero_depth_in_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[interpreter]\nmax_nesting_depth = 0\n");

    let err = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

// ============================================================================
// Precedence Tests
// ============================================================================

#[rstest]
#[case("PASCALITE_FALSY_IS_UNDEFINED", "false")]
#[case("PASCALITE_MAX_NESTING_DEPTH", "12")]
#[case("PASCALITE_JSON", "1")]
#[serial]
fn test_env_overrides_file(#[case] var: &str, #[case] value: &str) {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(
        temp_dir.path(),
        r#"
[interpreter]
falsy_is_undefined = true
max_nesting_depth = 50

[output]
json = false
"#,
    );

    env::set_var(var, value);
    let result = ConfigLoader::new().load_from_directory(temp_dir.path());
    env::remove_var(var);
    let config = result.unwrap();

    match var {
        "PASCALITE_FALSY_IS_UNDEFINED" => assert!(!config.falsy_is_undefined()),
        "PASCALITE_MAX_NESTING_DEPTH" => assert_eq!(config.max_nesting_depth(), 12),
        _ => assert!(config.json()),
    }
}

#[test]
#[serial]
fn test_env_zero_depth_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    env::set_var("PASCALITE_MAX_NESTING_DEPTH", "0");
    let result = ConfigLoader::new().load_from_directory(temp_dir.path());
    env::remove_var("PASCALITE_MAX_NESTING_DEPTH");

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_project_config_default_roundtrip() {
    let text = toml::to_string(&ProjectConfig::default()).unwrap();
    let parsed: ProjectConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, ProjectConfig::default());
}
