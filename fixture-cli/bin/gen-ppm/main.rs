//! Random PPM fixture generator
//!
//! Writes a fixed 40000-byte P6 file with random body bytes and prints a
//! confirmation line.

use std::process;

mod opts;

use opts::GenPpmOpts;

use fixture_cli::{format_error_for_stderr, init_logging, run_cli};

const PROGRAM_NAME: &str = "gen-ppm";

fn main() {
    let opts = GenPpmOpts::parse();
    let config = opts.config();

    init_logging(&config);

    if let Err(err) = run_cli(&config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
            eprintln!("{msg}");
        }
        process::exit(1);
    }
}
