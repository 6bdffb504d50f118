//! # Mercata Server
//!
//! Main entry point for the Mercata storefront API: loads configuration,
//! connects the shared Redis store handle, wires the router with its
//! response-cache layers, and serves until a termination signal arrives.
//!
//! A failed Redis connection is not fatal; the server starts with a
//! disconnected store and every cache layer fails open.

use mercata_cache::{CacheStore, RedisStore};
use mercata_config::ConfigLoader;
use mercata_core::{MercataError, MercataResult};
use mercata_rest::{catalog::Catalog, create_router, AppState};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();
    startup::print_banner();

    info!("Starting Mercata server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> MercataResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Connect the process-wide store handle
    let store = if config.redis.enabled {
        match RedisStore::connect(&config.redis).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!("Failed to connect to Redis: {} (responses will not be cached)", e);
                Arc::new(RedisStore::disconnected())
            }
        }
    } else {
        info!("Redis disabled by configuration, responses will not be cached");
        Arc::new(RedisStore::disconnected())
    };

    // Create application state and router
    let state = AppState::new(Arc::new(Catalog::with_seed_data()));
    let router = create_router(
        state,
        Arc::clone(&store) as Arc<dyn CacheStore>,
        &config.server,
        &config.cache,
    );

    // Start HTTP server
    let addr = config.server.addr();
    info!("Starting HTTP server on http://{}", addr);
    startup::print_startup_info(config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MercataError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MercataError::internal(format!("Server error: {}", e)))?;

    // The listener has drained; no request can reach the cache layers now.
    store.close();

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mercata=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
