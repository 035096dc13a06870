//! Infrastructure layer implementing the domain contracts.
//!
//! - [`persistence`] - SQLite repository and pool setup
//! - [`link_metrics`] - Metrics collaborators backed by the `metrics` facade
//! - [`prometheus`] - Prometheus recorder and text rendering

pub mod link_metrics;
pub mod persistence;
pub mod prometheus;
