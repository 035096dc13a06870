//! DTOs for the URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;

/// Request to shorten a URL.
///
/// A missing `original` field deserializes to an empty string so that it is
/// rejected by the store with the same validation error as `""`.
#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    #[serde(default)]
    pub original: String,
}

/// Wire representation of a stored URL record.
///
/// ```json
/// {
///   "id": 1,
///   "original": "https://example.com",
///   "short": "abc123",
///   "createdAt": "2025-10-30T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: i64,
    pub original: String,
    pub short: String,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            original: record.original,
            short: record.short,
            created_at: record.created_at,
        }
    }
}
