//! Configuration value checks

use crate::config::Config;
use crate::error::PrettyError;
use anyhow::Result;

/// Widest column the formatter will pad to
pub const MAX_COLUMN_WIDTH: usize = 256;

/// Validate configuration values that serde cannot express
pub fn validate_config(config: &Config) -> Result<()> {
    let style = &config.style;

    if style.command_width > MAX_COLUMN_WIDTH {
        return Err(PrettyError::configuration(format!(
            "style.command_width must be at most {MAX_COLUMN_WIDTH}, got {}",
            style.command_width
        ))
        .into());
    }

    if style.module_width > MAX_COLUMN_WIDTH {
        return Err(PrettyError::configuration(format!(
            "style.module_width must be at most {MAX_COLUMN_WIDTH}, got {}",
            style.module_width
        ))
        .into());
    }

    Ok(())
}
