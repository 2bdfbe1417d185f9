use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use strindex_engine::Catalogue;

use crate::config::ServerConfig;
use crate::handler;

/// Build the axum router with all catalogue endpoints.
///
/// The natural-language route is registered as a static path, so it takes
/// precedence over `/strings/:value`.
pub fn build_router(catalogue: Arc<Catalogue>, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/", get(handler::index_handler))
        .route("/health", get(handler::health_handler))
        .route(
            "/strings",
            get(handler::list_handler).post(handler::create_handler),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handler::natural_language_handler),
        )
        .route(
            "/strings/:value",
            get(handler::get_handler).delete(handler::delete_handler),
        )
        .fallback(handler::not_found_handler)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(catalogue);

    if config.log_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}
