//! Error types for the fixture CLI.

use std::io;

use thiserror::Error;

use fixture_core::ErrorKind;

/// A structured CLI error that keeps the program name next to the failure.
///
/// It travels inside an [`io::Error`] so `main` can honour `-qq` while still
/// printing the full context.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output (e.g. "gen-ppm").
    pub program: String,
    /// Underlying error produced by the run.
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Main error type for fixture CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Fixture generation failed
    #[error(transparent)]
    Generate(#[from] fixture_core::Error),

    /// The success message could not be written to stdout
    #[error("cannot write to standard output: {source}")]
    Report {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Failure class of a generation error, `None` for reporting failures.
    pub fn generation_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Generate(err) => Some(err.kind()),
            Error::Report { .. } => None,
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Error::Generate(source) => source.io_error().kind(),
            Error::Report { source } => source.kind(),
        }
    }
}

/// Specialized `Result` type for fixture CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        // Keep the underlying error kind
        io::Error::new(err.io_kind(), err)
    }
}

/// Formats an error message for stderr, respecting `-qq`.
///
/// Returns `None` when the message should be suppressed, otherwise a single
/// line suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet >= 2 {
        return None;
    }

    let run_err = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>());

    if let Some(run_err) = run_err {
        return Some(run_err.to_string());
    }

    Some(format!("{program}: {err}"))
}
