//! `vebuild-pretty` - decorated status lines for build-tool output
//!
//! This library backs two filters:
//! - `pretty COMMAND MODULE DESCRIPTION` prints one status line.
//! - `prettyfier [--vebuild] COMMAND MODULE` prints one status line per line
//!   of standard input, using each input line as the description.
//!
//! Missing arguments fall back to placeholder defaults, so neither filter
//! fails on its arguments.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::{PrettyArgs, PrettyfierArgs, StreamOptions};
use config::Config;
use format::PrettyFormatter;
use operations::{format_once, format_stream};
use std::io::{self, BufRead, Write};
use system::{RealSystem, System};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// Log level used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the tracing subscriber; logs go to stderr so stdout stays clean
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Load configuration and build the formatter for this process
pub fn build_formatter(system: &dyn System) -> Result<(Config, PrettyFormatter)> {
    let config = Config::from_environment(system)?;
    let color = config.style.color.enabled(system);
    debug!("Style {:?}, colour {color}", config.style);
    let formatter = PrettyFormatter::new(&config.style, color);
    Ok((config, formatter))
}

/// Entry point for `pretty`
pub fn run_pretty(args: &PrettyArgs) -> Result<()> {
    let system = RealSystem::new();
    let mut stdout = io::stdout().lock();
    run_pretty_with(&system, &args.values, &mut stdout)
}

/// `pretty` against an explicit system and output stream
pub fn run_pretty_with<W: Write + ?Sized>(
    system: &dyn System,
    values: &[String],
    out: &mut W,
) -> Result<()> {
    let (config, formatter) = build_formatter(system)?;
    format_once(values, &config.defaults, out, &formatter)?;
    Ok(())
}

/// Entry point for `prettyfier`
pub fn run_prettyfier(args: &PrettyfierArgs) -> Result<()> {
    let system = RealSystem::new();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_prettyfier_with(&system, &args.values, stdin, &mut stdout)
}

/// `prettyfier` against an explicit system, input and output stream
pub fn run_prettyfier_with<R: BufRead, W: Write + ?Sized>(
    system: &dyn System,
    values: &[String],
    input: R,
    out: &mut W,
) -> Result<()> {
    let (config, formatter) = build_formatter(system)?;
    let options = StreamOptions::parse(values, &config.defaults);
    format_stream(input, out, &formatter, &options)?;
    Ok(())
}
