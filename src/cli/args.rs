//! CLI argument definitions using clap
//!
//! Commands:
//! - provenlog serve [--host <host>] [--port <port>]
//! - provenlog digest [--file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// provenlog - content-addressed log storage with verifiable proof-of-storage
#[derive(Parser, Debug)]
#[command(name = "provenlog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the log storage API server
    Serve {
        /// Host to bind to (overrides PROVENLOG_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PROVENLOG_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a record and print its canonical digest
    Digest {
        /// Path to a JSON record file; reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
