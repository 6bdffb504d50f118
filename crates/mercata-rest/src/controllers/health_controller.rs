//! Health check controller.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use mercata_cache::CacheStore;
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Readiness response.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// Readiness status.
    pub status: String,
    /// Cache store connectivity ("open" or "closed").
    pub cache: String,
}

/// Creates the health router.
pub fn router(store: Arc<dyn CacheStore>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
        .with_state(store)
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint.
///
/// Reports cache connectivity but stays ready when the store is down: the
/// service degrades to uncached responses rather than going unavailable.
pub async fn readiness_check(State(store): State<Arc<dyn CacheStore>>) -> impl IntoResponse {
    Json(ReadinessResponse {
        status: "ready".to_string(),
        cache: if store.is_open() { "open" } else { "closed" }.to_string(),
    })
}

/// Liveness check endpoint.
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
