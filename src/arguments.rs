use std::{
    io::{self, Write as _},
    process,
};

use crate::{
    errors::ParseError,
    help::{Usage, print_usage},
    parse::{Options, Parsed, parse},
    set::SwitchSet,
};

/// Helper type for loading arguments from the environment.
///
/// This type exists for roughly two purposes: to provide a convenient
/// owned container for args retrieved from [`std::env`], and to be an object
/// that the positional arguments of a [`Parsed`] can borrow from.
#[derive(Debug, Clone)]
pub struct LoadedArguments {
    arguments: Vec<String>,
}

impl LoadedArguments {
    /// Load the process arguments. Arguments that aren't valid UTF-8 are
    /// converted lossily.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        )
    }

    /// Wrap an argument list, including the invocation token at index 0.
    #[inline]
    #[must_use]
    pub fn new(arguments: Vec<String>) -> Self {
        Self { arguments }
    }

    /// The invocation token, or an empty string if there are no arguments
    #[must_use]
    pub fn argv0(&self) -> &str {
        self.arguments.first().map_or("", String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.arguments
    }

    pub fn parse(&self, switches: &SwitchSet) -> Result<Parsed<'_, String>, ParseError> {
        parse(self.as_slice(), switches)
    }

    /**
    Parse the arguments, exiting the process if they can't be used.

    - If an action switch requests an early exit, the process exits with the
      requested code.
    - If the arguments are invalid, the error and a usage message are written
      to stderr and the process exits with status 1.
    */
    pub fn parse_or_exit(&self, switches: &SwitchSet, usage: &Usage<'_>) -> (&[String], Options) {
        let error = match self.parse(switches) {
            Ok(Parsed::Success {
                positionals,
                options,
            }) => return (positionals, options),
            Ok(Parsed::EarlyExit { code }) => {
                tracing::debug!(code, "exiting early at the request of a switch");
                process::exit(code)
            }
            Err(error) => error,
        };

        let mut stderr = io::stderr().lock();

        // If stderr is gone there's nowhere left to report the problem, so
        // exit with the failure status regardless.
        let _ = writeln!(stderr, "{}: {error}", self.command(usage))
            .and_then(|()| writeln!(stderr))
            .and_then(|()| print_usage(&mut stderr, usage, switches));

        process::exit(1)
    }

    fn command<'a>(&'a self, usage: &Usage<'a>) -> &'a str {
        match usage.command {
            "" => self.argv0(),
            command => command,
        }
    }
}
