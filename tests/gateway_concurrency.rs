//! Gateway Session Invariant Tests
//!
//! The backend session is the only shared mutable resource, and its
//! creation must be single-flight: concurrent first calls perform
//! exactly one backend handshake, and all callers observe the same
//! session. Identifier shape failures must never reach the backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use provenlog::gateway::{
    BackendSession, GatewayError, GatewayResult, MemoryBackend, ProofBackend, StorageGateway,
};

/// Backend wrapper that counts handshakes.
#[derive(Debug)]
struct CountingBackend {
    inner: MemoryBackend,
    connects: Arc<AtomicUsize>,
}

impl CountingBackend {
    fn new() -> (Self, Arc<AtomicUsize>) {
        let connects = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner: MemoryBackend::new(),
                connects: connects.clone(),
            },
            connects,
        )
    }
}

#[async_trait]
impl ProofBackend for CountingBackend {
    async fn connect(&self) -> GatewayResult<Arc<dyn BackendSession>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        // Yield so concurrent first-callers pile up inside the
        // handshake window instead of racing past it.
        tokio::task::yield_now().await;
        self.inner.connect().await
    }
}

/// Backend whose handshake always fails.
#[derive(Debug)]
struct FailingBackend {
    connects: Arc<AtomicUsize>,
}

#[async_trait]
impl ProofBackend for FailingBackend {
    async fn connect(&self) -> GatewayResult<Arc<dyn BackendSession>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Err(GatewayError::Init("handshake refused".into()))
    }
}

#[tokio::test]
async fn test_fifty_concurrent_uploads_create_one_session() {
    let (backend, connects) = CountingBackend::new();
    let gateway = Arc::new(StorageGateway::new(Arc::new(backend)));

    let mut handles = Vec::new();
    for i in 0..50 {
        let gateway = gateway.clone();
        handles.push(tokio::spawn(async move {
            gateway.upload(format!("record {}", i).as_bytes()).await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(
        connects.load(Ordering::SeqCst),
        1,
        "concurrent first-use must perform exactly one backend handshake"
    );
}

#[tokio::test]
async fn test_mixed_operations_share_one_session() {
    let (backend, connects) = CountingBackend::new();
    let gateway = Arc::new(StorageGateway::new(Arc::new(backend)));

    let content_id = gateway.upload(b"seed record").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let gateway_status = gateway.clone();
        let id = content_id.clone();
        handles.push(tokio::spawn(async move {
            gateway_status.status(&id).await.map(|_| ())
        }));
        let gateway_fetch = gateway.clone();
        let id = content_id.clone();
        handles.push(tokio::spawn(async move {
            gateway_fetch.fetch(&id).await.map(|_| ())
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_malformed_identifier_never_contacts_backend() {
    let (backend, connects) = CountingBackend::new();
    let gateway = StorageGateway::new(Arc::new(backend));

    let err = gateway.status("").await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidIdentifier(_)));

    let err = gateway.fetch("   ").await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidIdentifier(_)));

    assert_eq!(
        connects.load(Ordering::SeqCst),
        0,
        "shape failures must be detected without backend contact"
    );
}

#[tokio::test]
async fn test_failed_handshake_is_retried_on_next_use() {
    let connects = Arc::new(AtomicUsize::new(0));
    let gateway = StorageGateway::new(Arc::new(FailingBackend {
        connects: connects.clone(),
    }));

    for _ in 0..3 {
        let err = gateway.upload(b"record").await.unwrap_err();
        assert!(matches!(err, GatewayError::Init(_)));
    }

    // The once-cell stays empty after a failed handshake, so each use
    // attempts a fresh one.
    assert_eq!(connects.load(Ordering::SeqCst), 3);
}
