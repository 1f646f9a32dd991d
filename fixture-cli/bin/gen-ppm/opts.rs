//! Command line argument parsing for the gen-ppm utility.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use fixture_cli::CliConfig;
use fixture_core::{Seed, DEFAULT_OUTPUT_PATH};

/// Random PPM fixture generator
///
/// Writes a 100x100 P6 header followed by random body bytes, 40000 bytes in
/// total, for use as test input by image readers.
#[derive(Debug, Parser)]
#[command(
    name = "gen-ppm",
    version,
    about = "Write a random 100x100 PPM test fixture",
    long_about = "gen-ppm writes a fixed-size PPM (P6) file whose header declares \
                 100x100 pixels with maximum value 255, followed by pseudo-random \
                 body bytes in the range 0..=254. The file is created or truncated."
)]
pub struct GenPpmOpts {
    /// Output file
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Seed for reproducible output (defaults to the current time)
    #[arg(short = 's', long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the success line; twice also suppresses errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Print the success line without color escapes
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl GenPpmOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            output: self.output.clone(),
            seed: Seed::from(self.seed),
            verbose: self.verbose,
            quiet: self.quiet,
            color: !self.no_color,
        }
    }
}
