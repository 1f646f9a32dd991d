//! Generation and reporting steps of a CLI run.

use std::io::Write;

use fixture_core::{generate_fixture, seeded_rng, FixtureSummary};
use log::info;

use crate::config::{CliConfig, COLOR_BLUE, COLOR_RESET};
use crate::error::{Error, Result};

/// Generates the fixture described by `config`.
///
/// # Errors
///
/// Returns [`Error::Generate`] if the file cannot be created, written or
/// synced.
pub fn generate(config: &CliConfig) -> Result<FixtureSummary> {
    let seed = config.seed.resolve();
    info!("generating {} (seed {seed})", config.output.display());

    let mut rng = seeded_rng(seed);
    let summary = generate_fixture(&config.output, &mut rng)?;

    info!(
        "wrote {} bytes ({} header) to {}",
        summary.bytes_written,
        summary.header_len,
        summary.path.display()
    );
    Ok(summary)
}

/// The one-line confirmation printed after a successful run.
pub fn success_message(summary: &FixtureSummary, color: bool) -> String {
    let text = format!("Written random Data to {}!", summary.file_name());
    if color {
        format!("{COLOR_BLUE}{text}{COLOR_RESET}")
    } else {
        text
    }
}

/// Writes the confirmation line to `out`, unless `-q` was given.
///
/// # Errors
///
/// Returns [`Error::Report`] if `out` cannot be written.
pub fn report_success(
    out: &mut impl Write,
    summary: &FixtureSummary,
    config: &CliConfig,
) -> Result<()> {
    if config.quiet > 0 {
        return Ok(());
    }
    writeln!(out, "{}", success_message(summary, config.color))
        .and_then(|()| out.flush())
        .map_err(|source| Error::Report { source })
}
