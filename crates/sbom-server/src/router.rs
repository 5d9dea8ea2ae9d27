use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use sbom_store::ComponentStore;

use crate::config::ServerConfig;
use crate::handler;
use crate::render::Renderer;

/// State shared by every request: one store for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ComponentStore>,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(store: Arc<dyn ComponentStore>, renderer: Renderer) -> Self {
        Self { store, renderer }
    }
}

/// Build the axum router.
///
/// Methods not routed on `/components` are answered with 405 by axum. HEAD
/// is routed explicitly so it does not fall through to GET.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route(
            "/components",
            get(handler::get_components)
                .post(handler::create_component)
                .put(handler::replace_component)
                .patch(handler::patch_component)
                .delete(handler::delete_component)
                .head(handler::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
