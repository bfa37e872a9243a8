//! CLI module for provenlog
//!
//! Provides command-line interface for:
//! - serve: boot the HTTP API and enter the serving loop
//! - digest: one-shot canonical digest of a record file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
