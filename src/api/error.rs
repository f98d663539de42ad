//! HTTP error responses.
//!
//! Failures are answered with one of two fixed shapes:
//!
//! - not found: `404 {"error": "<Entity> not found"}`
//! - anything else: `400 {"errors": ["Validation errors"]}`
//!
//! The cause of a 400 is logged server-side but never returned to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::StoreError;

pub const HERO_NOT_FOUND: &str = "Hero not found";
pub const POWER_NOT_FOUND: &str = "Power not found";

const VALIDATION_ERRORS: &str = "Validation errors";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("{0}")]
    NotFound(&'static str),

    /// The request could not be applied as sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The store failed for a reason unrelated to the request.
    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(msg) => Self::NotFound(msg),
            StoreError::Validation(e) => Self::Validation(e.to_string()),
            other => Self::Storage(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            Self::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                validation_errors()
            }
            // Storage failures are reported like validation failures
            Self::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                validation_errors()
            }
        }
    }
}

fn validation_errors() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "errors": [VALIDATION_ERRORS] })),
    )
        .into_response()
}
