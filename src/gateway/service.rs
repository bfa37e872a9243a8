//! # Storage Gateway Service
//!
//! The gateway fronts a [`ProofBackend`] with upload, status, and
//! fetch, and owns the session lifecycle.
//!
//! Session creation is single-flight: `tokio::sync::OnceCell` memoizes
//! the in-flight handshake, so N concurrent first calls perform exactly
//! one backend handshake and all observe the same session. A failed
//! handshake leaves the cell empty and the next call retries.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::debug;

use crate::verify::{self, VerificationStatus};

use super::backend::{BackendSession, ProofBackend};
use super::errors::{GatewayError, GatewayResult};
use super::observer::UploadObserver;

pub struct StorageGateway {
    backend: Arc<dyn ProofBackend>,
    session: OnceCell<Arc<dyn BackendSession>>,
    observers: Vec<Arc<dyn UploadObserver>>,
}

impl StorageGateway {
    pub fn new(backend: Arc<dyn ProofBackend>) -> Self {
        Self {
            backend,
            session: OnceCell::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer for session and upload events.
    pub fn with_observer(mut self, observer: Arc<dyn UploadObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Idempotent session access.
    ///
    /// Returns the existing session when present; otherwise performs
    /// the backend handshake and caches the result for the gateway's
    /// lifetime.
    pub async fn ensure_session(&self) -> GatewayResult<Arc<dyn BackendSession>> {
        let session = self
            .session
            .get_or_try_init(|| async {
                debug!("establishing backend session");
                let session = self.backend.connect().await?;
                for observer in &self.observers {
                    observer.on_session_ready();
                }
                Ok::<_, GatewayError>(session)
            })
            .await?;
        Ok(Arc::clone(session))
    }

    /// Durably store bytes in the backend.
    ///
    /// Observers are notified with the content identifier once the
    /// backend acknowledges the write.
    pub async fn upload(&self, data: &[u8]) -> GatewayResult<String> {
        let session = self.ensure_session().await?;
        let content_id = session.store(data).await?;
        for observer in &self.observers {
            observer.on_upload_complete(&content_id);
        }
        Ok(content_id)
    }

    /// Query proof-of-storage status for an identifier.
    ///
    /// A fresh status is produced on every call; proof state changes
    /// over time and is never cached here.
    pub async fn status(&self, content_id: &str) -> GatewayResult<VerificationStatus> {
        Self::check_identifier(content_id)?;
        let session = self.ensure_session().await?;
        let piece = session.piece_status(content_id).await?;
        Ok(verify::report(piece))
    }

    /// Fetch the raw stored bytes for an identifier.
    pub async fn fetch(&self, content_id: &str) -> GatewayResult<Vec<u8>> {
        Self::check_identifier(content_id)?;
        let session = self.ensure_session().await?;
        session.retrieve(content_id).await
    }

    /// Surface shape check for identifiers, applied before any backend
    /// contact. Identifiers are opaque, so only obviously-broken input
    /// is rejected here.
    fn check_identifier(content_id: &str) -> GatewayResult<()> {
        if content_id.trim().is_empty() {
            return Err(GatewayError::InvalidIdentifier(
                "identifier must not be empty".to_string(),
            ));
        }
        if !content_id.chars().all(|c| c.is_ascii_graphic()) {
            return Err(GatewayError::InvalidIdentifier(content_id.to_string()));
        }
        Ok(())
    }
}
