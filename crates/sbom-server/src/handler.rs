//! Request handlers for `/components`.
//!
//! Each handler parses the `id` query parameter and the body before touching
//! the store, then makes exactly one store call.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use sbom_types::{ComponentDraft, ComponentId, ComponentPatch};

use crate::error::ApiError;
use crate::router::AppState;

type ApiResult = Result<Response, ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// The `id` parameter, if present and non-empty.
    fn raw(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }

    fn require(&self) -> Result<ComponentId, ApiError> {
        self.raw()
            .and_then(|s| s.parse().ok())
            .ok_or_else(ApiError::invalid_id)
    }
}

fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting request body");
        ApiError::invalid_json()
    })
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /components` lists; `GET /components?id=N` reads one record.
pub async fn get_components(State(state): State<AppState>, Query(query): Query<IdQuery>) -> ApiResult {
    if query.raw().is_none() {
        let all = state.store.list()?;
        return state.renderer.exported_json(StatusCode::OK, &all).await;
    }
    let id = query.require()?;
    let component = state.store.get(id)?;
    state.renderer.exported_json(StatusCode::OK, &component).await
}

/// `POST /components`
pub async fn create_component(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let draft: ComponentDraft = decode(&body)?;
    let component = state.store.create(draft)?;
    tracing::info!(id = %component.id, name = %component.name, "component registered");
    state.renderer.exported_json(StatusCode::CREATED, &component).await
}

/// `PUT /components?id=N`
pub async fn replace_component(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> ApiResult {
    let id = query.require()?;
    let draft: ComponentDraft = decode(&body)?;
    let component = state.store.replace(id, draft)?;
    state.renderer.json(StatusCode::OK, &component)
}

/// `PATCH /components?id=N`
pub async fn patch_component(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> ApiResult {
    let id = query.require()?;
    let patch: ComponentPatch = decode(&body)?;
    let component = state.store.patch(id, &patch)?;
    state.renderer.json(StatusCode::OK, &component)
}

/// `HEAD /components` is not part of the API; without this route axum would
/// answer it with the GET handler.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// `DELETE /components?id=N`
pub async fn delete_component(State(state): State<AppState>, Query(query): Query<IdQuery>) -> ApiResult {
    let id = query.require()?;
    state.store.delete(id)?;
    tracing::info!(%id, "component deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}
