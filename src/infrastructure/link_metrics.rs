//! [`LinkMetrics`] implementations.

use crate::domain::LinkMetrics;

/// Counter of short links created since process start.
pub const URLS_TOTAL: &str = "urls_total";
/// Counter of short links deleted since process start.
pub const URLS_DELETED_TOTAL: &str = "urls_deleted_total";
/// Gauge of records currently stored.
pub const URLS_IN_DB: &str = "urls_in_db";

/// Forwards store events to the `metrics` facade.
///
/// Values reach an exporter only if the binary installs a recorder (see
/// [`crate::infrastructure::prometheus::init_metrics`]); without one the
/// calls are no-ops.
#[derive(Debug, Clone, Copy)]
pub struct RecorderMetrics;

impl RecorderMetrics {
    pub fn new() -> Self {
        metrics::describe_counter!(URLS_TOTAL, "Total number of shortened URLs created.");
        metrics::describe_counter!(URLS_DELETED_TOTAL, "Total number of shortened URLs deleted.");
        metrics::describe_gauge!(
            URLS_IN_DB,
            "Current number of shortened URLs stored in the database."
        );
        Self
    }
}

impl Default for RecorderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkMetrics for RecorderMetrics {
    fn link_created(&self) {
        metrics::counter!(URLS_TOTAL).increment(1);
    }

    fn link_deleted(&self) {
        metrics::counter!(URLS_DELETED_TOTAL).increment(1);
    }

    fn set_links_stored(&self, count: i64) {
        metrics::gauge!(URLS_IN_DB).set(count as f64);
    }
}

/// Discards all events. Used by the admin CLI and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl LinkMetrics for NoopMetrics {
    fn link_created(&self) {}

    fn link_deleted(&self) {}

    fn set_links_stored(&self, _count: i64) {}
}
