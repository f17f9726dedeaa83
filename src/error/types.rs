//! Custom error types with exit codes

use std::io;
use thiserror::Error;

/// Main error type for the pretty filters
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PrettyError {
    /// Configuration Error - style file missing or invalid
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input Error - reading standard input failed
    #[error("Input error: {message}")]
    Input { message: String },

    /// Output Error - writing the formatted line failed
    #[error("Output error: {message}")]
    Output { message: String },
}

impl PrettyError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Input { .. } => 2,
            Self::Output { .. } => 3,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an input error
    #[inline]
    pub fn input(err: &io::Error) -> Self {
        Self::Input {
            message: err.to_string(),
        }
    }

    /// Create an output error
    #[inline]
    pub fn output(err: &io::Error) -> Self {
        Self::Output {
            message: err.to_string(),
        }
    }
}
