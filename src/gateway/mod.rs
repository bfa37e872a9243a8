//! # Storage Gateway Module
//!
//! Abstracts "store bytes, get back a content identifier", "fetch bytes
//! by identifier", and "query proof status by identifier" against a
//! pluggable proof-of-storage backend.
//!
//! The gateway owns the backend session lifecycle: a single session is
//! created lazily on first use with single-flight semantics and reused
//! for the gateway's lifetime.

pub mod backend;
pub mod errors;
pub mod memory;
pub mod observer;
pub mod remote;
pub mod service;

pub use backend::{BackendConfig, BackendSession, PieceStatus, ProofBackend};
pub use errors::{GatewayError, GatewayResult};
pub use memory::MemoryBackend;
pub use observer::{LoggingObserver, UploadObserver};
pub use remote::RemoteBackend;
pub use service::StorageGateway;
