//! Prometheus exporter for the `metrics` facade.
//!
//! The recorder is installed at most once per process; later calls reuse the
//! same handle, so tests and the server can both call [`init_metrics`].

use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the Prometheus recorder as the global `metrics` recorder.
///
/// If a different recorder is already installed, the failure is logged and
/// the returned handle renders nothing.
pub fn init_metrics() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();

            if let Err(e) = metrics::set_global_recorder(recorder) {
                tracing::warn!(error = %e, "Metrics recorder already installed");
            }

            handle
        })
        .clone()
}

/// Renders every recorded metric in the Prometheus text format.
///
/// Returns an empty string when [`init_metrics`] has not been called.
pub fn render() -> String {
    match HANDLE.get() {
        Some(handle) => {
            handle.run_upkeep();
            handle.render()
        }
        None => String::new(),
    }
}
