//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was stored and received an id.
    Inserted(UrlRecord),
    /// Another record already holds the short code (unique constraint hit).
    Collision,
}

/// Persistence contract for URL records.
///
/// Implementations must enforce uniqueness of `short` at the storage level;
/// [`UrlRepository::exists`] pre-checks alone are not sufficient under
/// concurrent writers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Checks whether any stored record uses `short`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn exists(&self, short: &str) -> Result<bool, AppError>;

    /// Inserts a new record.
    ///
    /// A unique constraint violation on `short` is reported as
    /// [`InsertOutcome::Collision`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on any other database error.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError>;

    /// Finds a record by exact short code match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_short(&self, short: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Deletes the record with the given short code.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete_by_short(&self, short: &str) -> Result<bool, AppError>;

    /// Counts all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
