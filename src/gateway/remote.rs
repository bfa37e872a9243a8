//! # Remote Provider Backend
//!
//! HTTP client for a storage-provider gateway. The provider owns the
//! proof-of-data-possession mechanics; this client only speaks its
//! piece API: store bytes, retrieve bytes, query piece status.
//!
//! Failures are re-mapped at this boundary per the gateway error
//! policy, so provider error text reaches callers only as a summary.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use super::backend::{BackendConfig, BackendSession, PieceStatus, ProofBackend};
use super::errors::{GatewayError, GatewayResult};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Backend speaking the provider gateway's HTTP piece API.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    config: BackendConfig,
}

impl RemoteBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProofBackend for RemoteBackend {
    async fn connect(&self) -> GatewayResult<Arc<dyn BackendSession>> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GatewayError::Init(format!("failed to build HTTP client: {}", e)))?;

        let session = RemoteSession {
            client,
            config: self.config.clone(),
        };

        // Handshake: the provider must accept our credential before the
        // session is considered established.
        let response = session
            .authorized(session.client.get(session.url("/status")))
            .send()
            .await
            .map_err(|e| GatewayError::Init(format!("provider unreachable: {}", e)))?;
        if !response.status().is_success() {
            return Err(GatewayError::Init(format!(
                "provider rejected session handshake: {}",
                response.status()
            )));
        }

        Ok(Arc::new(session))
    }
}

/// Established session against one provider endpoint.
#[derive(Debug)]
pub struct RemoteSession {
    client: Client,
    config: BackendConfig,
}

impl RemoteSession {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint.trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("x-provider-key", &self.config.credential);
        match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-success provider response onto the gateway taxonomy.
    async fn failure(content_id: &str, response: Response) -> GatewayError {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        match status {
            StatusCode::NOT_FOUND => GatewayError::NotFound(content_id.to_string()),
            StatusCode::BAD_REQUEST => GatewayError::InvalidIdentifier(content_id.to_string()),
            _ => GatewayError::from_backend_failure(content_id, message),
        }
    }
}

#[async_trait]
impl BackendSession for RemoteSession {
    async fn store(&self, data: &[u8]) -> GatewayResult<String> {
        let response = self
            .authorized(self.client.post(self.url("/pieces")))
            .header("content-type", "application/octet-stream")
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| GatewayError::Backend(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::failure("", response).await);
        }

        #[derive(serde::Deserialize)]
        struct StoreResponse {
            #[serde(rename = "pieceCid")]
            piece_cid: String,
        }
        let body: StoreResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Backend(format!("malformed store response: {}", e)))?;
        Ok(body.piece_cid)
    }

    async fn retrieve(&self, content_id: &str) -> GatewayResult<Vec<u8>> {
        let response = self
            .authorized(self.client.get(self.url(&format!("/pieces/{}", content_id))))
            .send()
            .await
            .map_err(|e| GatewayError::Backend(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::failure(content_id, response).await);
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Backend(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn piece_status(&self, content_id: &str) -> GatewayResult<PieceStatus> {
        let response = self
            .authorized(
                self.client
                    .get(self.url(&format!("/pieces/{}/status", content_id))),
            )
            .send()
            .await
            .map_err(|e| GatewayError::Backend(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::failure(content_id, response).await);
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::Backend(format!("malformed status response: {}", e)))
    }
}
