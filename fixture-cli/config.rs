//! Configuration types and constants for the fixture CLI.

use std::path::PathBuf;

use fixture_core::{Seed, DEFAULT_OUTPUT_PATH};

/// ANSI sequence that switches the foreground to blue.
pub const COLOR_BLUE: &str = "\x1b[34m";

/// ANSI sequence that resets all attributes.
pub const COLOR_RESET: &str = "\x1b[m";

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Destination of the fixture
    pub output: PathBuf,
    /// Generator seed source
    pub seed: Seed,
    /// Log verbosity (number of `-v` flags)
    pub verbose: u8,
    /// Quiet level (number of `-q` flags)
    pub quiet: u8,
    /// Colorize the success line
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: Seed::Clock,
            verbose: 0,
            quiet: 0,
            color: true,
        }
    }
}
