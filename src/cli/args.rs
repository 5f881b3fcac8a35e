//! CLI argument definitions using clap
//!
//! Commands:
//! - shopfloor serve --config <path>
//! - shopfloor validate --schema <path> --data <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shopfloor - article schemas and validated shop floor entries
#[derive(Parser, Debug)]
#[command(name = "shopfloor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./shopfloor.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a JSON submission against a JSON field list and exit
    Validate {
        /// File holding an array of field definitions
        #[arg(long)]
        schema: PathBuf,

        /// File holding the submitted values as a JSON object
        #[arg(long)]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
