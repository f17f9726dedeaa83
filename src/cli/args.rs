use clap::Parser;
use std::ffi::OsString;

/// Parsing that keeps positional values exactly as typed
///
/// clap still answers `--help` and `--version` in first position, but it
/// drops a leading `--` from the values it collects. The values are
/// therefore taken from the raw argument list once clap has accepted it.
pub trait VerbatimParser: Parser {
    /// Replace the collected positional values
    fn set_values(&mut self, values: Vec<String>);

    /// Parse `argv` (program name first), keeping every later value verbatim
    ///
    /// # Errors
    ///
    /// Returns the clap error for help, version or malformed input
    fn try_parse_verbatim_from<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut args = Self::try_parse_from(argv.iter().cloned())?;
        args.set_values(
            argv.iter()
                .skip(1)
                .map(|value| value.to_string_lossy().into_owned())
                .collect(),
        );
        Ok(args)
    }

    /// Parse the process arguments, exiting on help, version or error
    #[must_use]
    fn parse_verbatim() -> Self {
        Self::try_parse_verbatim_from(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }
}

/// Command-line arguments for `pretty`
///
/// Values are collected verbatim, so a description such as `-Wall failed`
/// or a lone `--` is taken as text rather than as an option.
#[derive(Parser, Debug, Clone)]
#[command(name = "pretty")]
#[command(about = "Print one decorated build status line")]
#[command(long_about = None)]
#[command(version)]
pub struct PrettyArgs {
    /// COMMAND MODULE DESCRIPTION, each optional
    #[arg(
        value_name = "ARGS",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub values: Vec<String>,
}

/// Command-line arguments for `prettyfier`
#[derive(Parser, Debug, Clone)]
#[command(name = "prettyfier")]
#[command(about = "Decorate every line read from standard input as a build status line")]
#[command(
    long_about = "Decorate every line read from standard input as a build status line.\n\n\
    Pass --vebuild as the first argument to use the build-system style instead of the custom style."
)]
#[command(version)]
pub struct PrettyfierArgs {
    /// [--vebuild] COMMAND MODULE, each optional
    #[arg(
        value_name = "ARGS",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub values: Vec<String>,
}

impl VerbatimParser for PrettyArgs {
    fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
    }
}

impl VerbatimParser for PrettyfierArgs {
    fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
    }
}
