//! Command-line interface module
//!
//! Handles argument parsing and positional resolution

pub mod args;
pub mod resolve;

pub use args::*;
pub use resolve::*;
