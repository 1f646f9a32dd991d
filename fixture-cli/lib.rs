//! Shared CLI plumbing for the fixture generator binaries.
//!
//! This crate turns parsed command-line options into a [`CliConfig`], runs
//! [`fixture_core`] generation and reports the outcome on stdout/stderr.

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod process;


pub use config::CliConfig;
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use logging::init_logging;
pub use operations::{generate, report_success, success_message};
pub use process::{process, run_cli};
