//! CLI command implementations
//!
//! `serve` boots the HTTP API: tracing first, then configuration, then
//! the server, whose startup performs the backend session handshake.
//! A handshake failure is fatal here; main exits non-zero.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::gateway::{
    BackendConfig, LoggingObserver, MemoryBackend, ProofBackend, RemoteBackend, StorageGateway,
};
use crate::http_server::{HttpServer, HttpServerConfig, LogState};
use crate::record::{record_digest, validate};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { host, port } => serve(host, port),
        Command::Digest { file } => digest(file),
    }
}

fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = HttpServerConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let backend: Arc<dyn ProofBackend> = match BackendConfig::from_env() {
        Some(backend_config) => Arc::new(RemoteBackend::new(backend_config)),
        None => {
            warn!("PROVENLOG_BACKEND_URL not set; using in-memory backend");
            Arc::new(MemoryBackend::new())
        }
    };

    let gateway = StorageGateway::new(backend).with_observer(Arc::new(LoggingObserver));
    let server = HttpServer::new(config, Arc::new(LogState::new(gateway)));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("failed to create tokio runtime: {}", e)))?;
    rt.block_on(server.start())?;
    Ok(())
}

fn digest(file: Option<PathBuf>) -> CliResult<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let value = serde_json::from_str(&input)?;
    let record = validate(value)?;
    println!("{}", record_digest(&record));
    Ok(())
}
