//! Turning raw positional values into named options
//!
//! Missing values fall back to [`Defaults`]; nothing here can fail.

use crate::config::Defaults;
use crate::format::FormatRequest;

/// Leading flag that selects the build-system style in `prettyfier`
pub const VEBUILD_FLAG: &str = "--vebuild";

/// Outcome of inspecting the first argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelection<'a, S> {
    pub is_custom: bool,
    /// Positional values with the sentinel (if any) removed
    pub positional: &'a [S],
}

/// Detect the leading [`VEBUILD_FLAG`]
///
/// Only the first argument is inspected; the flag anywhere else is an
/// ordinary value.
#[must_use]
pub fn select_mode<S: AsRef<str>>(args: &[S]) -> ModeSelection<'_, S> {
    match args.split_first() {
        Some((first, rest)) if first.as_ref() == VEBUILD_FLAG => ModeSelection {
            is_custom: false,
            positional: rest,
        },
        _ => ModeSelection {
            is_custom: true,
            positional: args,
        },
    }
}

fn nth_or<S: AsRef<str>>(args: &[S], index: usize, default: &str) -> String {
    args.get(index)
        .map_or_else(|| default.to_owned(), |value| value.as_ref().to_owned())
}

/// Build the request for `pretty`: `COMMAND MODULE DESCRIPTION`
///
/// Values past the third are ignored.
#[must_use]
pub fn resolve_request<S: AsRef<str>>(args: &[S], defaults: &Defaults) -> FormatRequest {
    FormatRequest {
        command: nth_or(args, 0, &defaults.command),
        module: nth_or(args, 1, &defaults.module),
        description: nth_or(args, 2, &defaults.description),
        is_custom: true,
    }
}

/// Options for `prettyfier`, resolved once before reading input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOptions {
    pub command: String,
    pub module: String,
    pub is_custom: bool,
}

impl StreamOptions {
    /// Parse `[--vebuild] COMMAND MODULE`
    #[must_use]
    pub fn parse<S: AsRef<str>>(args: &[S], defaults: &Defaults) -> Self {
        let mode = select_mode(args);
        Self {
            command: nth_or(mode.positional, 0, &defaults.command),
            module: nth_or(mode.positional, 1, &defaults.module),
            is_custom: mode.is_custom,
        }
    }

    /// Request for one line of input
    #[must_use]
    #[inline]
    pub fn request_for(&self, description: String) -> FormatRequest {
        FormatRequest {
            command: self.command.clone(),
            module: self.module.clone(),
            description,
            is_custom: self.is_custom,
        }
    }
}
