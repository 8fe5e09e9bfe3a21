//! Configuration Loader
//!
//! Handles loading configuration from multiple sources with proper precedence.

use crate::project::ProjectConfig;
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "pascalite.toml";

const ENV_FALSY_IS_UNDEFINED: &str = "PASCALITE_FALSY_IS_UNDEFINED";
const ENV_MAX_NESTING_DEPTH: &str = "PASCALITE_MAX_NESTING_DEPTH";
const ENV_JSON: &str = "PASCALITE_JSON";

/// Configuration loader
///
/// Loads configuration and applies overrides with proper precedence:
/// 1. Project config (pascalite.toml) - lowest priority
/// 2. Environment variables (PASCALITE_*) - overrides project
/// 3. CLI flags - highest priority (handled by caller)
#[derive(Debug, Default)]
pub struct ConfigLoader;

/// Loaded configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Project configuration with environment overrides applied
    pub project: ProjectConfig,

    /// Project root directory (where pascalite.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find pascalite.toml. Defaults are used
    /// when none exists.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        let project = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let project = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project,
            project_root: config_path.parent().map(|p| p.to_path_buf()),
        })
    }

    /// Find project configuration by walking up directory tree
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Apply environment variable overrides to project config
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if let Ok(value) = env::var(ENV_FALSY_IS_UNDEFINED) {
            config.interpreter.falsy_is_undefined = Some(parse_bool(ENV_FALSY_IS_UNDEFINED, &value)?);
        }

        if let Ok(value) = env::var(ENV_MAX_NESTING_DEPTH) {
            let depth = value
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: ENV_MAX_NESTING_DEPTH.to_string(),
                    reason: format!("'{}' is not a number: {}", value, e),
                })?;
            config.interpreter.max_nesting_depth = Some(depth);
        }

        if let Ok(value) = env::var(ENV_JSON) {
            config.output.json = Some(parse_bool(ENV_JSON, &value)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(field: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("'{}' is not a boolean", value),
        }),
    }
}

impl Config {
    pub fn falsy_is_undefined(&self) -> bool {
        self.project.falsy_is_undefined()
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.project.max_nesting_depth()
    }

    pub fn json(&self) -> bool {
        self.project.json()
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if this is a project (has pascalite.toml)
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn create_config_file(dir: &Path, content: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    #[serial]
    fn test_find_config_in_parent() {
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "[interpreter]\nmax_nesting_depth = 32\n");

        let sub_dir = temp_dir.path().join("src").join("nested");
        fs::create_dir_all(&sub_dir).unwrap();

        let config = ConfigLoader::new().load_from_directory(&sub_dir).unwrap();
        assert_eq!(config.max_nesting_depth(), 32);
        assert_eq!(config.project_root(), Some(temp_dir.path()));
    }

    #[test]
    #[serial]
    fn test_env_override_beats_file() {
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "[output]\njson = false\n");

        env::set_var(ENV_JSON, "yes");
        let result = ConfigLoader::new().load_from_directory(temp_dir.path());
        env::remove_var(ENV_JSON);

        assert!(result.unwrap().json());
    }

    #[test]
    #[serial]
    fn test_bad_env_value() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(ENV_MAX_NESTING_DEPTH, "deep");
        let result = ConfigLoader::new().load_from_directory(temp_dir.path());
        env::remove_var(ENV_MAX_NESTING_DEPTH);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == ENV_MAX_NESTING_DEPTH
        ));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(!parse_bool("X", " 0 ").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }
}
