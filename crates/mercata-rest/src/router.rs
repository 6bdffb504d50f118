//! Main application router.

use crate::{
    controllers::{admin_controller, catalog_controller, health_controller},
    middleware::{http_cache, logging_middleware, HttpCacheState},
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use mercata_cache::CacheStore;
use mercata_config::{CacheConfig, ServerConfig};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
///
/// Public catalog groups are wrapped in their own response-cache layers;
/// admin routes sit outside every cache layer.
pub fn create_router(
    state: AppState,
    store: Arc<dyn CacheStore>,
    server_config: &ServerConfig,
    cache_config: &CacheConfig,
) -> Router {
    let cors = create_cors_layer(server_config);

    let mut product_routes = catalog_controller::product_router();
    let mut category_routes = catalog_controller::category_router();

    if cache_config.enabled {
        let cache_state = HttpCacheState::new(Arc::clone(&store), cache_config.catalog_ttl());
        product_routes = product_routes.layer(middleware::from_fn_with_state(
            cache_state.clone(),
            http_cache,
        ));
        category_routes =
            category_routes.layer(middleware::from_fn_with_state(cache_state, http_cache));
        info!(
            "Response cache enabled for catalog routes (TTL {}s)",
            cache_config.catalog_ttl_secs
        );
    } else {
        info!("Response cache disabled by configuration");
    }

    let api_router = Router::new()
        .nest("/product", product_routes)
        .nest("/category", category_routes)
        .nest("/admin", admin_controller::router())
        .with_state(state);

    Router::new()
        // Health endpoints (never cached)
        .merge(health_controller::router(store))
        .merge(api_router)
        .route("/", get(root))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Mercata Storefront API v1"
}
