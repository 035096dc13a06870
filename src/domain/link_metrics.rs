//! Metrics collaborator for the short link store.

/// Observability hooks invoked by
/// [`crate::application::services::ShortLinkStore`].
///
/// Implementations must not fail or block; metrics are advisory.
#[cfg_attr(test, mockall::automock)]
pub trait LinkMetrics: Send + Sync {
    /// Called after a record has been stored.
    fn link_created(&self);

    /// Called after a record has been deleted.
    fn link_deleted(&self);

    /// Publishes the current number of stored records.
    fn set_links_stored(&self, count: i64);
}
