//! System abstraction for environment, filesystem and terminal queries
//!
//! The formatter only needs a handful of facts from the outside world: a few
//! environment variables, the optional style file and whether stdout is a
//! terminal. Routing them through one trait keeps the config and colour logic
//! testable with an in-memory implementation.

use std::env::VarError;
use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env`, `std::fs` and `std::io`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Get an environment variable
    fn env_var(&self, key: &str) -> Result<String, VarError>;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Whether standard output is attached to a terminal
    fn stdout_is_terminal(&self) -> bool;
}
