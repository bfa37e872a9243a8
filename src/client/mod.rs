//! # Client Facade Module
//!
//! Thin HTTP client for the log storage API. Request construction and
//! response decoding only; all business logic lives server-side.

pub mod errors;

pub use errors::{ClientError, ClientResult};

use serde::Deserialize;

use crate::record::{LogRecord, StoredRecord};
use crate::verify::VerificationStatus;

/// Receipt returned for a submitted record.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReceipt {
    pub message: String,
    #[serde(rename = "contentIdentifier")]
    pub content_identifier: String,
    #[serde(rename = "logHash")]
    pub log_hash: String,
}

/// Client for the log storage API.
#[derive(Debug, Clone)]
pub struct LogClient {
    client: reqwest::Client,
    base_url: String,
}

impl LogClient {
    /// Create a client for the given API endpoint.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ClientError::MissingEndpoint);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit a log record for storage.
    pub async fn submit(&self, record: &LogRecord) -> ClientResult<SubmitReceipt> {
        let response = self
            .client
            .post(format!("{}/upload-log", self.base_url))
            .json(record)
            .send()
            .await?;
        Self::decode_json(response).await
    }

    /// Query proof-of-storage status for a content identifier.
    pub async fn verify(&self, content_id: &str) -> ClientResult<VerificationStatus> {
        Self::check_identifier(content_id)?;
        let response = self
            .client
            .post(format!("{}/verify-event", self.base_url))
            .json(&serde_json::json!({ "contentIdentifier": content_id }))
            .send()
            .await?;
        Self::decode_json(response).await
    }

    /// Fetch the original stored record by content identifier.
    pub async fn fetch(&self, content_id: &str) -> ClientResult<StoredRecord> {
        Self::check_identifier(content_id)?;
        let response = self
            .client
            .get(format!("{}/download-log/{}", self.base_url, content_id))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        StoredRecord::from_bytes(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Reject obviously-broken identifiers before any network call.
    fn check_identifier(content_id: &str) -> ClientResult<()> {
        if content_id.trim().is_empty() {
            return Err(ClientError::InvalidIdentifier);
        }
        Ok(())
    }

    /// Surface a non-success status as an API error carrying the
    /// server-provided message.
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
