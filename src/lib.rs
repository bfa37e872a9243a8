//! provenlog - content-addressed log storage with verifiable
//! proof-of-storage
//!
//! Log records are validated, canonicalized, and sealed with a SHA-256
//! integrity digest, then handed to a pluggable proof-of-storage
//! backend that issues a content identifier. The identifier is the sole
//! handle for later verification and retrieval.

pub mod cli;
pub mod client;
pub mod gateway;
pub mod http_server;
pub mod record;
pub mod verify;
