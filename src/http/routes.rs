use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Karaoke timing
        .route("/karaoke/sync", post(handlers::sync_karaoke))
        .route("/karaoke/align", post(handlers::align_karaoke))
        // Whole songs are posted as base64 JSON
        .layer(DefaultBodyLimit::max(body_limit))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
