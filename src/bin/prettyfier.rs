//! # `prettyfier`
//!
//! Reads build-tool output from stdin and prints one decorated status line
//! per input line.
//!
//! ```sh
//! make 2>&1 | prettyfier --vebuild make ff_fat
//! ```
//!
//! A leading `--vebuild` selects the build-system style; without it the
//! custom style is used.

use anyhow::Result;
use tracing::error;
use vebuild_pretty::cli::{PrettyfierArgs, VerbatimParser as _};
use vebuild_pretty::error::PrettyError;

fn main() -> Result<()> {
    let args = PrettyfierArgs::parse_verbatim();
    vebuild_pretty::init_logging();

    match vebuild_pretty::run_prettyfier(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<PrettyError>()
                    .map_or(1, PrettyError::exit_code),
            );
        }
    }
}
