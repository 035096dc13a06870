//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;

/// SQLite repository for URL records.
///
/// Relies on the `UNIQUE` constraint on `urls.short` to reject duplicate
/// codes inserted by concurrent writers.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Returns true if `e` is the unique constraint on the short code column.
fn is_unique_violation_on_short(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    // SQLite reports no constraint name, only "UNIQUE constraint failed: urls.short".
    db_err.message().contains("urls.short")
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn exists(&self, short: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE short = ?")
            .bind(short)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query("INSERT INTO urls (original, short, created_at) VALUES (?, ?, ?)")
            .bind(&new_record.original)
            .bind(&new_record.short)
            .bind(new_record.created_at)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(done) => Ok(InsertOutcome::Inserted(
                new_record.into_record(done.last_insert_rowid()),
            )),
            Err(e) if is_unique_violation_on_short(&e) => Ok(InsertOutcome::Collision),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            "SELECT id, original, short, created_at FROM urls WHERE short = ?",
        )
        .bind(short)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn delete_by_short(&self, short: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE short = ?")
            .bind(short)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
