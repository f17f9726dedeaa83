//! Configuration management module
//!
//! Holds the placeholder strings used when arguments are missing and the
//! column/colour settings of the formatter. Everything has a built-in value;
//! an optional YAML file named by [`CONFIG_ENV_VAR`] can override any field.

pub mod validation;
pub mod yaml;

use crate::system::System;
use serde::Deserialize;
use tracing::debug;

/// Placeholder used when no command is given
pub const DEFAULT_COMMAND: &str = "??";

/// Placeholder used when no module is given
pub const DEFAULT_MODULE: &str = "Unknown";

/// Placeholder used when no description is given
pub const DEFAULT_DESCRIPTION: &str = "Please fix this somebody!";

/// Environment variable naming an optional YAML style file
pub const CONFIG_ENV_VAR: &str = "VEBUILD_PRETTY_CONFIG";

/// Environment variable that disables colour in `auto` mode
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Values substituted for missing positional arguments
    pub defaults: Defaults,

    /// Column and colour settings
    pub style: StyleConfig,
}

/// Values substituted for missing positional arguments
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub command: String,
    pub module: String,
    pub description: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_owned(),
            module: DEFAULT_MODULE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
        }
    }
}

/// Column and colour settings of the formatter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Width the command is right-aligned into
    pub command_width: usize,

    /// Width the `[module]` tag is padded to (0 = no padding)
    pub module_width: usize,

    /// When to emit ANSI colour codes
    pub color: ColorMode,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            command_width: 8,
            module_width: 0,
            color: ColorMode::Auto,
        }
    }
}

/// When to emit ANSI colour codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ColorMode {
    /// Colour only when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

impl ColorMode {
    /// Decide whether colour is enabled for this process
    #[must_use]
    pub fn enabled(self, system: &dyn System) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                let no_color = system
                    .env_var(NO_COLOR_ENV_VAR)
                    .is_ok_and(|value| !value.is_empty());
                !no_color && system.stdout_is_terminal()
            }
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or fall back to built-in values
    pub fn from_environment(system: &dyn System) -> anyhow::Result<Self> {
        match system.env_var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => {
                debug!("Loading style configuration from {path}");
                Self::load_from_file(system, &path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validate field values
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }
}
