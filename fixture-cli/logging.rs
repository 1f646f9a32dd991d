//! Diagnostic logging setup for the CLI binaries.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::CliConfig;

/// Maps `-v`/`-q` counts to a log level.
///
/// Quiet wins over verbose: `-q` keeps only errors and `-qq` silences logging.
pub fn level_filter(verbose: u8, quiet: u8) -> LevelFilter {
    match (quiet, verbose) {
        (2.., _) => LevelFilter::Off,
        (1, _) => LevelFilter::Error,
        (0, 0) => LevelFilter::Warn,
        (0, 1) => LevelFilter::Info,
        (0, 2) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. `RUST_LOG` takes precedence over the flags.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(config: &CliConfig) {
    let level = level_filter(config.verbose, config.quiet);
    let _ = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
