//! Project Configuration (pascalite.toml)
//!
//! Handles project-level configuration stored in `pascalite.toml`.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parser nesting limit when nothing else is configured
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Project configuration from pascalite.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Interpreter behavior
    #[serde(default)]
    pub interpreter: InterpreterConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[interpreter]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Read variables holding falsy values as undefined (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub falsy_is_undefined: Option<bool>,

    /// Parser nesting limit (default: 256)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nesting_depth: Option<usize>,
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Print results and diagnostics as JSON (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.interpreter.max_nesting_depth == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "interpreter.max_nesting_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn falsy_is_undefined(&self) -> bool {
        self.interpreter.falsy_is_undefined.unwrap_or(true)
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.interpreter
            .max_nesting_depth
            .unwrap_or(DEFAULT_MAX_NESTING_DEPTH)
    }

    pub fn json(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ProjectConfig = toml::from_str("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert!(config.falsy_is_undefined());
        assert_eq!(config.max_nesting_depth(), DEFAULT_MAX_NESTING_DEPTH);
        assert!(!config.json());
    }

    #[test]
    fn test_full_config() {
        let config: ProjectConfig = toml::from_str(
            r#"
[interpreter]
falsy_is_undefined = false
max_nesting_depth = 64

[output]
json = true
"#,
        )
        .unwrap();

        assert!(!config.falsy_is_undefined());
        assert_eq!(config.max_nesting_depth(), 64);
        assert!(config.json());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<ProjectConfig>("[interpreter]\nstrict = true\n").is_err());
        assert!(toml::from_str::<ProjectConfig>("[colors]\n").is_err());
    }

    #[test]
    fn test_zero_nesting_depth_is_invalid() {
        let config: ProjectConfig =
            toml::from_str("[interpreter]\nmax_nesting_depth = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "interpreter.max_nesting_depth"
        ));
    }

    #[test]
    fn test_serialization_skips_unset_values() {
        let config = ProjectConfig {
            output: OutputConfig { json: Some(true) },
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("json = true"));
        assert!(!text.contains("falsy_is_undefined"));
    }
}
