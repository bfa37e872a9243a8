//! # Upload Observers
//!
//! The backend session lifecycle and uploads announce progress through
//! this hook. Observers are invoked synchronously at defined points;
//! they are an observability seam, not required for correctness, so
//! every method has a no-op default.

use tracing::info;

/// Hooks into session creation and the upload sequence.
pub trait UploadObserver: Send + Sync {
    /// A backend session finished its handshake and is ready.
    fn on_session_ready(&self) {}

    /// An upload completed; `content_id` is the backend commitment.
    fn on_upload_complete(&self, content_id: &str) {
        let _ = content_id;
    }
}

/// Observer that emits structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl UploadObserver for LoggingObserver {
    fn on_session_ready(&self) {
        info!("backend session established");
    }

    fn on_upload_complete(&self, content_id: &str) {
        info!(content_id, "log upload complete");
    }
}
