//! Pascalite Configuration System
//!
//! Provides configuration management for Pascalite projects:
//! - Project configuration (pascalite.toml)
//! - Environment variable overrides
//! - Configuration precedence
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (./pascalite.toml, searched upwards)
//! 3. Environment variables (PASCALITE_*)
//! 4. CLI flags
//!
//! # Example
//!
//! ```no_run
//! use pascalite_config::ConfigLoader;
//! use std::path::Path;
//!
//! let loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("nesting limit: {}", config.max_nesting_depth());
//! ```

pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParse {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use loader::{Config, ConfigLoader, CONFIG_FILE_NAME};
pub use project::{InterpreterConfig, OutputConfig, ProjectConfig, DEFAULT_MAX_NESTING_DEPTH};
