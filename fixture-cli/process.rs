//! High-level CLI orchestration.

use std::io::{self, Write};

use fixture_core::FixtureSummary;

use crate::config::CliConfig;
use crate::error::{InvocationError, Result};
use crate::operations::{generate, report_success};

/// Runs one generation and reports it to `out`.
///
/// 1. Generates the fixture at `config.output`
/// 2. Prints the confirmation line (unless quiet)
///
/// # Errors
///
/// Returns an error if generation fails or the confirmation cannot be
/// written. Nothing is printed to `out` on generation failure.
pub fn process(config: &CliConfig, out: &mut impl Write) -> Result<FixtureSummary> {
    let summary = generate(config)?;
    report_success(out, &summary, config)?;
    Ok(summary)
}

/// Runs the generator with stdout as the report sink.
///
/// The returned [`io::Error`] keeps the kind of the underlying failure and
/// wraps an [`InvocationError`] carrying `program`, which
/// [`crate::format_error_for_stderr`] uses to build the stderr line.
///
/// # Errors
///
/// Returns an error if any step of [`process`] fails.
pub fn run_cli(config: &CliConfig, program: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    process(config, &mut out).map(drop).map_err(|source| {
        io::Error::new(
            source.io_kind(),
            InvocationError {
                program: program.to_string(),
                source,
            },
        )
    })
}
