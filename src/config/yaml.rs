//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::PrettyError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Load and parse YAML configuration from file
pub fn load_config(system: &dyn System, path: &str) -> Result<Config> {
    let path_obj = Path::new(path);

    if !system.exists(path_obj) {
        return Err(PrettyError::configuration(format!(
            "Configuration file not found: {path}\n\
            Unset {} or point it at an existing file",
            crate::config::CONFIG_ENV_VAR
        ))
        .into());
    }

    let content = system.read_to_string(path_obj).with_context(|| {
        PrettyError::configuration(format!("Failed to read configuration file: {path}"))
    })?;

    // An empty file means "all defaults"
    let config: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&content).with_context(|| {
            PrettyError::configuration(format!(
                "Failed to parse YAML configuration in file: {path}"
            ))
        })?
    };

    config.validate()?;

    Ok(config)
}
