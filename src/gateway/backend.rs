//! # Proof Backend Traits
//!
//! The storage network is an external collaborator behind these traits:
//! a [`ProofBackend`] performs the handshake that yields a
//! [`BackendSession`], and the session stores, retrieves, and reports
//! proof status for individual pieces.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::GatewayResult;

/// Opaque configuration bundle handed to session creation.
///
/// The core does not interpret these values; they are forwarded to the
/// backend as-is.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend endpoint URL
    pub endpoint: String,
    /// Backend credential (e.g. a signing key)
    pub credential: String,
    /// Optional bearer token for higher rate limits
    pub auth_token: Option<String>,
}

impl BackendConfig {
    /// Read the bundle from the environment.
    ///
    /// Returns `None` when no endpoint is configured.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("PROVENLOG_BACKEND_URL").ok()?;
        Some(Self {
            endpoint,
            credential: std::env::var("PROVENLOG_BACKEND_KEY").unwrap_or_default(),
            auth_token: std::env::var("PROVENLOG_BACKEND_TOKEN").ok(),
        })
    }
}

/// Proof-of-storage status for one stored piece, in the backend's own
/// field vocabulary. Projected into the client-facing shape by the
/// verification reporter; never exposed past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceStatus {
    pub exists: bool,
    #[serde(rename = "proofSetLastProven")]
    pub proof_set_last_proven: Option<DateTime<Utc>>,
    #[serde(rename = "proofSetNextProofDue")]
    pub proof_set_next_proof_due: Option<DateTime<Utc>>,
}

impl PieceStatus {
    /// Status for a piece the backend has no record of.
    pub fn absent() -> Self {
        Self {
            exists: false,
            proof_set_last_proven: None,
            proof_set_next_proof_due: None,
        }
    }
}

/// A backend capable of opening sessions.
#[async_trait]
pub trait ProofBackend: Send + Sync + fmt::Debug {
    /// Perform the backend handshake and return a ready session.
    async fn connect(&self) -> GatewayResult<Arc<dyn BackendSession>>;
}

/// An established backend session.
///
/// All three operations are independent and may run concurrently; the
/// session itself is the only shared resource.
#[async_trait]
pub trait BackendSession: Send + Sync + fmt::Debug {
    /// Durably store bytes; returns the backend-issued content identifier.
    async fn store(&self, data: &[u8]) -> GatewayResult<String>;

    /// Retrieve the bytes stored under the identifier.
    async fn retrieve(&self, content_id: &str) -> GatewayResult<Vec<u8>>;

    /// Query proof-of-storage status for the identifier.
    async fn piece_status(&self, content_id: &str) -> GatewayResult<PieceStatus>;
}
