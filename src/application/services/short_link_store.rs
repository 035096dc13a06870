//! Short link creation, lookup, and deletion.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::LinkMetrics;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};

/// Default upper bound on code generation attempts per create.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// How short codes are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePolicy {
    /// Number of characters in a generated code.
    pub code_length: usize,
    /// Candidates tried before giving up with [`AppError::GenerationExhausted`].
    pub max_attempts: usize,
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Owns the mapping from short code to URL record.
///
/// Holds no mutable state of its own: every call goes straight to the
/// repository, so a single instance can be shared across request handlers
/// without locking. Uniqueness of codes is ultimately guaranteed by the
/// repository's unique constraint; the pre-insert existence check only saves
/// a failed insert in the common case.
pub struct ShortLinkStore<R: UrlRepository, M: LinkMetrics> {
    repository: Arc<R>,
    metrics: Arc<M>,
    policy: CodePolicy,
}

impl<R: UrlRepository, M: LinkMetrics> ShortLinkStore<R, M> {
    /// Creates a store with the default [`CodePolicy`].
    pub fn new(repository: Arc<R>, metrics: Arc<M>) -> Self {
        Self::with_policy(repository, metrics, CodePolicy::default())
    }

    pub fn with_policy(repository: Arc<R>, metrics: Arc<M>, policy: CodePolicy) -> Self {
        Self {
            repository,
            metrics,
            policy,
        }
    }

    /// Stores `original` under a freshly generated short code.
    ///
    /// # Collisions
    ///
    /// A candidate is discarded and regenerated when it is already in use,
    /// either as seen by the pre-check or as reported by the repository's
    /// unique constraint on insert. At most `policy.max_attempts` candidates
    /// are tried.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `original` is empty (no storage access happens)
    /// - [`AppError::GenerationExhausted`] if every candidate collided
    /// - [`AppError::Storage`] on database errors
    pub async fn create(&self, original: &str) -> Result<UrlRecord, AppError> {
        if original.is_empty() {
            return Err(AppError::validation("original URL cannot be empty"));
        }

        for attempt in 1..=self.policy.max_attempts {
            let short = generate_code(self.policy.code_length);

            if self.repository.exists(&short).await? {
                tracing::debug!(short = %short, attempt, "short code collision on pre-check");
                continue;
            }

            let new_record = NewUrlRecord {
                original: original.to_string(),
                short,
                created_at: Utc::now(),
            };

            match self.repository.insert(new_record).await? {
                InsertOutcome::Inserted(record) => {
                    tracing::info!(id = record.id, short = %record.short, "short link created");
                    self.metrics.link_created();
                    self.count().await;
                    return Ok(record);
                }
                InsertOutcome::Collision => {
                    tracing::debug!(attempt, "short code collision on insert");
                }
            }
        }

        tracing::warn!(
            attempts = self.policy.max_attempts,
            "gave up generating a unique short code"
        );

        Err(AppError::GenerationExhausted {
            attempts: self.policy.max_attempts,
        })
    }

    /// Resolves a short code to its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get(&self, short: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_short(short)
            .await?
            .ok_or_else(|| AppError::not_found(short))
    }

    /// Deletes the record with the given short code, freeing the code for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code (never
    /// issued or already deleted).
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn delete(&self, short: &str) -> Result<(), AppError> {
        if !self.repository.delete_by_short(short).await? {
            return Err(AppError::not_found(short));
        }

        tracing::info!(short = %short, "short link deleted");
        self.metrics.link_deleted();
        self.count().await;

        Ok(())
    }

    /// Returns the number of stored records and publishes it as a gauge.
    ///
    /// Failures are logged and reported as `None`; counting is advisory and
    /// never fails the caller.
    pub async fn count(&self) -> Option<i64> {
        match self.repository.count().await {
            Ok(count) => {
                self.metrics.set_links_stored(count);
                Some(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to count stored URLs");
                None
            }
        }
    }
}
