use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use sbom_store::StoreError;
use sbom_types::{ComponentId, ValidationError};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// A request that could not be served, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad `id` parameter or undecodable body.
    #[error("{0}")]
    MalformedRequest(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("component {0} not found")]
    NotFound(ComponentId),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_id() -> Self {
        Self::MalformedRequest("invalid id")
    }

    pub fn invalid_json() -> Self {
        Self::MalformedRequest("invalid JSON")
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Validation(e) => Self::Validation(e),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
