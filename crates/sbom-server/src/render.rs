//! JSON response rendering and the optional pretty-printed export file.

use std::path::{Path, PathBuf};

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::config::ServerConfig;
use crate::error::ApiError;

#[derive(Clone, Debug, Default)]
pub struct Renderer {
    pretty: bool,
    export_path: Option<PathBuf>,
}

impl Renderer {
    pub fn new(pretty: bool, export_path: Option<PathBuf>) -> Self {
        Self { pretty, export_path }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.pretty_json, config.export_path.clone())
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ApiError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        encoded.map_err(|e| ApiError::Internal(e.to_string()))
    }

    pub fn json<T: Serialize>(&self, status: StatusCode, value: &T) -> Result<Response, ApiError> {
        let body = self.encode(value)?;
        Ok((status, [(CONTENT_TYPE, "application/json")], body).into_response())
    }

    /// Like [`Renderer::json`], but also writes the export file if configured.
    ///
    /// Only create, read and list responses are exported.
    pub async fn exported_json<T: Serialize>(&self, status: StatusCode, value: &T) -> Result<Response, ApiError> {
        let response = self.json(status, value)?;
        if let Some(path) = &self.export_path {
            export(path, value).await;
        }
        Ok(response)
    }
}

/// Export failures never fail the request.
async fn export<T: Serialize>(path: &Path, value: &T) {
    let bytes = match serde_json::to_vec_pretty(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "failed to encode export artifact");
            return;
        }
    };
    if let Err(e) = tokio::fs::write(path, bytes).await {
        tracing::warn!(path = %path.display(), error = %e, "failed to write export artifact");
    }
}
