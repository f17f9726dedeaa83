//! # `pretty`
//!
//! Prints a single decorated build status line.
//!
//! ```sh
//! pretty CC ff_fat "ff_fat.c"
//! ```
//!
//! Every argument is optional; missing ones are replaced by placeholders.
//! Set `VEBUILD_PRETTY_CONFIG` to a YAML file to change the placeholders,
//! column widths or colour mode.

use anyhow::Result;
use tracing::error;
use vebuild_pretty::cli::{PrettyArgs, VerbatimParser as _};
use vebuild_pretty::error::PrettyError;

fn main() -> Result<()> {
    let args = PrettyArgs::parse_verbatim();
    vebuild_pretty::init_logging();

    match vebuild_pretty::run_pretty(&args) {
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
