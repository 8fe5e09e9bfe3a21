//! Configuration resolution for CLI commands
//!
//! An explicit `--config` file wins; otherwise `pascalite.toml` is searched
//! for from the current directory upward. Environment overrides are applied
//! by the loader in both cases.

use anyhow::{Context, Result};
use pascalite_config::{Config, ConfigLoader};
use pascalite_runtime::RuntimeOptions;
use std::path::Path;
use tracing::debug;

/// Load configuration from `explicit` or by searching from the current directory
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let loader = ConfigLoader::new();
    let config = match explicit {
        Some(path) => loader
            .load_from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            loader
                .load_from_directory(&cwd)
                .context("Failed to load project configuration")?
        }
    };

    debug!(
        project_root = ?config.project_root(),
        falsy_is_undefined = config.falsy_is_undefined(),
        max_nesting_depth = config.max_nesting_depth(),
        "loaded configuration"
    );
    Ok(config)
}

/// Runtime options selected by the configuration
pub fn runtime_options(config: &Config) -> RuntimeOptions {
    RuntimeOptions {
        falsy_is_undefined: config.falsy_is_undefined(),
        max_nesting_depth: config.max_nesting_depth(),
    }
}
