//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, store wiring, and the Axum server lifecycle.

use crate::application::services::ShortLinkStore;
use crate::config::Config;
use crate::infrastructure::link_metrics::RecorderMetrics;
use crate::infrastructure::persistence::{SqliteUrlRepository, db};
use crate::infrastructure::prometheus::init_metrics;
use crate::routes::app_router;
use crate::state::{AppState, AppStore};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the production store on top of an open pool.
pub fn build_store(pool: SqlitePool, config: &Config) -> AppStore {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let metrics = Arc::new(RecorderMetrics::new());

    ShortLinkStore::with_policy(repository, metrics, config.code_policy())
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Prometheus metrics recorder
/// - SQLite connection pool
/// - Apply migrations
/// - Short link store (and primes the stored-URL gauge)
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    init_metrics();

    let pool = db::connect(&config).await?;
    tracing::info!("Connected to database");

    db::run_migrations(&pool).await?;

    let store = Arc::new(build_store(pool.clone(), &config));
    if let Some(count) = store.count().await {
        tracing::info!("{count} URLs stored");
    }

    let app = app_router(AppState::new(store));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
