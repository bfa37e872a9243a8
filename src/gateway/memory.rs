//! # In-Memory Backend
//!
//! A deterministic in-process backend. Used by the test suites and by
//! `serve` when no remote endpoint is configured, so the full pipeline
//! can run without a storage network.
//!
//! Content identifiers are derived from the stored bytes, which makes
//! the backend genuinely content-addressed: storing identical bytes
//! twice yields the same identifier.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::record::sha256_hex;

use super::backend::{BackendSession, PieceStatus, ProofBackend};
use super::errors::{GatewayError, GatewayResult};

/// Proving window reported for stored pieces.
const PROOF_PERIOD_HOURS: i64 = 24;

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend;

impl MemoryBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProofBackend for MemoryBackend {
    async fn connect(&self) -> GatewayResult<Arc<dyn BackendSession>> {
        Ok(Arc::new(MemorySession::default()))
    }
}

#[derive(Debug)]
struct StoredPiece {
    data: Vec<u8>,
    stored_at: DateTime<Utc>,
}

/// Session over an in-process piece table.
#[derive(Debug, Default)]
pub struct MemorySession {
    pieces: RwLock<HashMap<String, StoredPiece>>,
}

#[async_trait]
impl BackendSession for MemorySession {
    async fn store(&self, data: &[u8]) -> GatewayResult<String> {
        let content_id = format!("piece-{}", sha256_hex(data));
        let mut pieces = self
            .pieces
            .write()
            .map_err(|_| GatewayError::Backend("piece table lock poisoned".into()))?;
        pieces.insert(
            content_id.clone(),
            StoredPiece {
                data: data.to_vec(),
                stored_at: Utc::now(),
            },
        );
        Ok(content_id)
    }

    async fn retrieve(&self, content_id: &str) -> GatewayResult<Vec<u8>> {
        let pieces = self
            .pieces
            .read()
            .map_err(|_| GatewayError::Backend("piece table lock poisoned".into()))?;
        pieces
            .get(content_id)
            .map(|piece| piece.data.clone())
            .ok_or_else(|| GatewayError::NotFound(content_id.to_string()))
    }

    async fn piece_status(&self, content_id: &str) -> GatewayResult<PieceStatus> {
        let pieces = self
            .pieces
            .read()
            .map_err(|_| GatewayError::Backend("piece table lock poisoned".into()))?;
        Ok(match pieces.get(content_id) {
            Some(piece) => PieceStatus {
                exists: true,
                proof_set_last_proven: Some(piece.stored_at),
                proof_set_next_proof_due: Some(
                    piece.stored_at + Duration::hours(PROOF_PERIOD_HOURS),
                ),
            },
            None => PieceStatus::absent(),
        })
    }
}
