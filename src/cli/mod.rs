//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load config and run the HTTP API
//! - validate: One-shot validation of a submission file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, validate, validate_files, Config, ValidationReport};
pub use errors::{CliError, CliErrorCode, CliResult};
