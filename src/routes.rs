//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Liveness text
//! - `GET  /health`        - Health check
//! - `GET  /metrics`       - Prometheus exposition
//! - `/urls`, `/urls/{short}` - URL management (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Metrics** - Request counts and latency per matched route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler, metrics_handler};
use crate::api::middleware::{metrics, tracing};
use crate::state::AppState;
use axum::Router;
use axum::middleware::from_fn;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .merge(api::routes::url_routes())
        .route_layer(from_fn(metrics::track_metrics))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
