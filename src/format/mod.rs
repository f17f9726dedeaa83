//! Line formatting
//!
//! A [`LineFormatter`] turns a [`FormatRequest`] into one line of text.
//! [`emit_line`] writes that line to an output stream.

pub mod pretty;
pub mod request;
pub mod style;

pub use pretty::PrettyFormatter;
pub use request::FormatRequest;

use std::io::{self, Write};

/// Renders a request into a single line (without the trailing newline)
pub trait LineFormatter {
    fn format_line(&self, request: &FormatRequest) -> String;
}

/// Format one request and write it, newline-terminated, to `out`
///
/// # Errors
///
/// Returns the underlying I/O error if writing or flushing fails
#[inline]
pub fn emit_line<F, W>(formatter: &F, request: &FormatRequest, out: &mut W) -> io::Result<()>
where
    F: LineFormatter + ?Sized,
    W: Write + ?Sized,
{
    let line = formatter.format_line(request);
    writeln!(out, "{line}")?;
    out.flush()
}
