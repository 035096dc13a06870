//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` directives take precedence over `log_level`. `log_format`
/// selects human-readable `text` or one-JSON-object-per-line `json` output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if log_format == "json" {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.with_target(false).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
