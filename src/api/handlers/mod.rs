//! HTTP request handlers for API endpoints.

pub mod health;
pub mod metrics;
pub mod urls;

pub use health::{health_handler, index_handler};
pub use metrics::metrics_handler;
pub use urls::{create_url_handler, delete_url_handler, get_url_handler};
