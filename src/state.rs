use std::sync::Arc;

use crate::application::services::ShortLinkStore;
use crate::infrastructure::link_metrics::RecorderMetrics;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Store wired to the production repository and metrics.
pub type AppStore = ShortLinkStore<SqliteUrlRepository, RecorderMetrics>;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AppStore>,
}

impl AppState {
    pub fn new(store: Arc<AppStore>) -> Self {
        Self { store }
    }
}
