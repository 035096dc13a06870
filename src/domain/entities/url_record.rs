//! URL record entity representing a stored short code mapping.

use chrono::{DateTime, Utc};

/// A shortened URL as stored by the persistence backend.
///
/// Records are immutable once created; the only lifecycle transition after
/// creation is deletion, which frees `short` for reuse.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original: String,
    pub short: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, original: String, short: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original,
            short,
            created_at,
        }
    }
}

/// Input data for inserting a new record. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original: String,
    pub short: String,
    pub created_at: DateTime<Utc>,
}

impl NewUrlRecord {
    /// Attaches the storage-assigned id.
    pub fn into_record(self, id: i64) -> UrlRecord {
        UrlRecord::new(id, self.original, self.short, self.created_at)
    }
}
