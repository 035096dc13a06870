//! Domain layer: entities, repository contracts, and the metrics contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`link_metrics`] - Metrics collaborator passed into the store
//!
//! Nothing here depends on HTTP or on a concrete database engine.

pub mod entities;
pub mod link_metrics;
pub mod repositories;

pub use link_metrics::LinkMetrics;

#[cfg(test)]
pub use link_metrics::MockLinkMetrics;
