use std::sync::Arc;

use tokio::net::TcpListener;

use strindex_engine::Catalogue;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// strindex HTTP server.
pub struct StrindexServer {
    config: ServerConfig,
    catalogue: Arc<Catalogue>,
}

impl StrindexServer {
    /// A server over a fresh, empty catalogue.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_catalogue(config, Arc::new(Catalogue::new()))
    }

    pub fn with_catalogue(config: ServerConfig, catalogue: Arc<Catalogue>) -> Self {
        Self { config, catalogue }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.catalogue), &self.config)
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("strindex server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = StrindexServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:3000".parse::<std::net::SocketAddr>().unwrap());
        assert!(server.catalogue().is_empty().unwrap());
    }

    #[test]
    fn router_shares_the_catalogue() {
        let catalogue = Arc::new(Catalogue::new());
        let server = StrindexServer::with_catalogue(ServerConfig::default(), Arc::clone(&catalogue));
        let _router = server.router();
        catalogue.create("shared").unwrap();
        assert_eq!(server.catalogue().len().unwrap(), 1);
    }
}
