use std::sync::Arc;

use tokio::net::TcpListener;

use sbom_store::{ComponentStore, InMemoryComponentStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::render::Renderer;
use crate::router::{build_router, AppState};

/// SBOM registry server.
pub struct SbomServer {
    config: ServerConfig,
    store: Arc<dyn ComponentStore>,
}

impl SbomServer {
    /// Create a server backed by a fresh in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(InMemoryComponentStore::new(config.license_policy));
        Self::with_store(config, store)
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn ComponentStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> Arc<dyn ComponentStore> {
        Arc::clone(&self.store)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let state = AppState::new(self.store(), Renderer::from_config(&self.config));
        build_router(state, &self.config)
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("SBOM registry listening on {}", self.config.bind_addr);
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
