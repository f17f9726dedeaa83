//! Per-line formatting of standard input

use crate::cli::StreamOptions;
use crate::error::PrettyError;
use crate::format::{LineFormatter, emit_line};
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// Lazy iterator over input lines with the terminator removed
///
/// Splits on `\n` only. Invalid UTF-8 is replaced with U+FFFD rather than
/// aborting the stream. A last line without a terminator is still yielded.
pub struct InputLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> InputLines<R> {
    #[inline]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for InputLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = strip_line_terminator(&self.buf);
                Some(Ok(String::from_utf8_lossy(line).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Remove one trailing `\n` or `\r\n`; everything else is kept
#[must_use]
pub fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let Some(line) = line.strip_suffix(b"\n") else {
        return line;
    };
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Format every line of `input` and write the results to `out`
///
/// Returns the number of lines written. A closed downstream pipe ends the
/// stream early without an error.
///
/// # Errors
///
/// Returns `PrettyError::Input` if reading fails and `PrettyError::Output`
/// for any write failure other than a broken pipe.
pub fn format_stream<R, W, F>(
    input: R,
    out: &mut W,
    formatter: &F,
    options: &StreamOptions,
) -> Result<usize, PrettyError>
where
    R: BufRead,
    W: Write + ?Sized,
    F: LineFormatter + ?Sized,
{
    debug!(
        "Streaming lines for {} [{}] (custom: {})",
        options.command, options.module, options.is_custom
    );

    let mut count = 0;
    for line in InputLines::new(input) {
        let line = line.map_err(|e| PrettyError::input(&e))?;
        trace!("line {}: {line:?}", count + 1);

        let request = options.request_for(line);
        match emit_line(formatter, &request, &mut *out) {
            Ok(()) => count += 1,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("Output closed after {count} lines");
                return Ok(count);
            }
            Err(e) => return Err(PrettyError::output(&e)),
        }
    }

    debug!("End of input after {count} lines");
    Ok(count)
}
