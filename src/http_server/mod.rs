//! # HTTP Server Module
//!
//! The HTTP surface over the storage gateway:
//!
//! - `POST /upload-log` - validate, seal, and store a log record
//! - `POST /verify-event` - proof-of-storage status by content identifier
//! - `GET /download-log/:content_id` - raw stored record bytes
//! - `GET /health` - liveness check

pub mod config;
pub mod log_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use log_routes::LogState;
pub use server::HttpServer;
