//! Log HTTP Routes
//!
//! Endpoints for submitting, verifying, and downloading log records.
//! Handlers hold no business logic beyond wiring the validator, the
//! record pipeline, and the storage gateway together.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::gateway::{GatewayError, StorageGateway};
use crate::record::{validate, StoredRecord, ValidationError};
use crate::verify::VerificationStatus;

// ==================
// Shared State
// ==================

/// Log state shared across handlers
pub struct LogState {
    pub gateway: StorageGateway,
}

impl LogState {
    pub fn new(gateway: StorageGateway) -> Self {
        Self { gateway }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(rename = "contentIdentifier")]
    pub content_identifier: String,
    #[serde(rename = "logHash")]
    pub log_hash: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(rename = "contentIdentifier", default)]
    pub content_identifier: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ==================
// Routes
// ==================

/// Create log routes
pub fn log_routes(state: Arc<LogState>) -> Router {
    Router::new()
        .route("/upload-log", post(upload_log_handler))
        .route("/verify-event", post(verify_event_handler))
        .route("/download-log/:content_id", get(download_log_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn upload_log_handler(
    State(state): State<Arc<LogState>>,
    Json(body): Json<Value>,
) -> Result<Json<UploadResponse>, (StatusCode, Json<ErrorResponse>)> {
    let record = validate(body).map_err(validation_error)?;
    let stored = StoredRecord::seal(record);

    let content_identifier = state
        .gateway
        .upload(&stored.to_bytes())
        .await
        .map_err(gateway_error)?;

    Ok(Json(UploadResponse {
        message: "Log record stored successfully.".to_string(),
        content_identifier,
        log_hash: stored.log_hash().to_string(),
    }))
}

async fn verify_event_handler(
    State(state): State<Arc<LogState>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerificationStatus>, (StatusCode, Json<ErrorResponse>)> {
    let content_id = request.content_identifier.unwrap_or_default();
    let status = state
        .gateway
        .status(&content_id)
        .await
        .map_err(gateway_error)?;
    Ok(Json(status))
}

async fn download_log_handler(
    State(state): State<Arc<LogState>>,
    Path(content_id): Path<String>,
) -> Result<(HeaderMap, Vec<u8>), (StatusCode, Json<ErrorResponse>)> {
    let data = state
        .gateway
        .fetch(&content_id)
        .await
        .map_err(gateway_error)?;

    let mut headers = HeaderMap::new();
    headers.insert("content-type", "application/json".parse().unwrap());
    // The identifier passed the gateway's ASCII shape check, so the
    // disposition value is always a valid header.
    headers.insert(
        "content-disposition",
        format!("attachment; filename=\"log-{}.json\"", content_id)
            .parse()
            .unwrap(),
    );
    Ok((headers, data))
}

// ==================
// Error Mapping
// ==================

fn validation_error(err: ValidationError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn gateway_error(err: GatewayError) -> (StatusCode, Json<ErrorResponse>) {
    if matches!(err, GatewayError::Backend(_) | GatewayError::Init(_)) {
        error!(error = %err, "gateway operation failed");
    }
    (
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
