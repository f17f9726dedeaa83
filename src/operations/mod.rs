//! Operations module
//!
//! The two ways of producing output: once from arguments, or once per input line

pub mod single;
pub mod stream;

pub use single::*;
pub use stream::*;
