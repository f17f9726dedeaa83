//! One-shot formatting of a request built from arguments

use crate::cli::resolve_request;
use crate::config::Defaults;
use crate::error::PrettyError;
use crate::format::{LineFormatter, emit_line};
use std::io::{self, Write};
use tracing::debug;

/// Resolve `COMMAND MODULE DESCRIPTION` and write the formatted line
///
/// # Errors
///
/// Returns `PrettyError::Output` if writing fails for a reason other than a
/// closed pipe.
pub fn format_once<S, W, F>(
    args: &[S],
    defaults: &Defaults,
    out: &mut W,
    formatter: &F,
) -> Result<(), PrettyError>
where
    S: AsRef<str>,
    W: Write + ?Sized,
    F: LineFormatter + ?Sized,
{
    let request = resolve_request(args, defaults);
    debug!("Formatting {request:?}");

    match emit_line(formatter, &request, out) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed before the line was written");
            Ok(())
        }
        Err(e) => Err(PrettyError::output(&e)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::config::StyleConfig;
    use crate::format::PrettyFormatter;

    #[test]
    fn writes_a_single_line() {
        let formatter = PrettyFormatter::new(&StyleConfig::default(), false);
        let mut out = Vec::new();

        format_once(&["build", "core"], &Defaults::default(), &mut out, &formatter).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "   build [core] Please fix this somebody!\n"
        );
    }

    #[test]
    fn no_arguments_print_placeholders() {
        let formatter = PrettyFormatter::new(&StyleConfig::default(), false);
        let mut out = Vec::new();
        let none: [&str; 0] = [];

        format_once(&none, &Defaults::default(), &mut out, &formatter).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "      ?? [Unknown] Please fix this somebody!\n"
        );
    }
}
