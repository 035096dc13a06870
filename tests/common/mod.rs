#![allow(dead_code)]

use shortlink::application::services::{CodePolicy, ShortLinkStore};
use shortlink::config::Config;
use shortlink::infrastructure::link_metrics::NoopMetrics;
use shortlink::infrastructure::persistence::{SqliteUrlRepository, db};
use shortlink::server::build_store;
use shortlink::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

/// Opens a fresh in-memory database with migrations applied.
///
/// Every connection to `sqlite::memory:` gets its own database, so the pool
/// is pinned to a single connection that is never recycled.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::run_migrations(&pool).await.unwrap();
    pool
}

pub async fn insert_test_url(pool: &SqlitePool, short: &str, original: &str) -> i64 {
    sqlx::query("INSERT INTO urls (original, short, created_at) VALUES (?, ?, ?)")
        .bind(original)
        .bind(short)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_repository(pool: SqlitePool) -> SqliteUrlRepository {
    SqliteUrlRepository::new(Arc::new(pool))
}

pub fn create_test_store(pool: SqlitePool) -> ShortLinkStore<SqliteUrlRepository, NoopMetrics> {
    ShortLinkStore::with_policy(
        Arc::new(create_test_repository(pool)),
        Arc::new(NoopMetrics),
        CodePolicy::default(),
    )
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(build_store(pool, &Config::default())))
}
