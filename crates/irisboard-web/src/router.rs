//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::dashboard,
    cluster::api_cluster,
    dataset::{api_attributes, api_dataset},
    system::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",               get(dashboard))

        // API endpoints
        .route("/api/cluster",    post(api_cluster))
        .route("/api/attributes", get(api_attributes))
        .route("/api/dataset",    get(api_dataset))
        .route("/health",         get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
