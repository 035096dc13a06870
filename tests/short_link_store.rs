mod common;

use chrono::{Duration, Utc};
use shortlink::AppError;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let pool = common::create_test_pool().await;
    let store = common::create_test_store(pool);

    let created = store.create("https://example.com").await.unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.original, "https://example.com");
    assert_eq!(created.short.len(), 6);
    assert!(Utc::now() - created.created_at < Duration::minutes(1));

    let fetched = store.get(&created.short).await.unwrap();
    assert_eq!(fetched, created);

    store.delete(&created.short).await.unwrap();

    assert!(matches!(
        store.get(&created.short).await,
        Err(AppError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_create_empty_url_leaves_storage_untouched() {
    let pool = common::create_test_pool().await;
    let store = common::create_test_store(pool.clone());

    let before = store.count().await;

    let result = store.create("").await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(store.count().await, before);
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_never_issued_code() {
    let pool = common::create_test_pool().await;
    let store = common::create_test_store(pool);

    assert!(matches!(
        store.delete("never1").await,
        Err(AppError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_delete_twice_reports_not_found() {
    let pool = common::create_test_pool().await;
    let store = common::create_test_store(pool);

    let record = store.create("https://example.com").await.unwrap();

    store.delete(&record.short).await.unwrap();

    assert!(matches!(
        store.delete(&record.short).await,
        Err(AppError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_same_original_gets_distinct_codes() {
    let pool = common::create_test_pool().await;
    let store = common::create_test_store(pool);

    let first = store.create("https://example.com").await.unwrap();
    let second = store.create("https://example.com").await.unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.short, second.short);
}

#[tokio::test]
async fn test_concurrent_creates_yield_distinct_codes() {
    const N: usize = 50;

    let pool = common::create_test_pool().await;
    let store = Arc::new(common::create_test_store(pool.clone()));

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.create(&format!("https://example.com/{i}")).await })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        let record = handle.await.unwrap().unwrap();
        codes.insert(record.short);
    }

    assert_eq!(codes.len(), N);
    assert_eq!(store.count().await, Some(N as i64));
}

#[tokio::test]
async fn test_count_tracks_creates_and_deletes() {
    let pool = common::create_test_pool().await;
    let store = common::create_test_store(pool);

    assert_eq!(store.count().await, Some(0));

    let a = store.create("https://example.com/a").await.unwrap();
    store.create("https://example.com/b").await.unwrap();
    assert_eq!(store.count().await, Some(2));

    store.delete(&a.short).await.unwrap();
    assert_eq!(store.count().await, Some(1));
}

#[tokio::test]
async fn test_count_on_closed_pool_is_none() {
    let pool = common::create_test_pool().await;
    let store = common::create_test_store(pool.clone());
    pool.close().await;

    assert_eq!(store.count().await, None);
}

#[tokio::test]
async fn test_get_on_closed_pool_is_storage_error() {
    let pool = common::create_test_pool().await;
    let store = common::create_test_store(pool.clone());
    pool.close().await;

    assert!(matches!(
        store.get("abc123").await,
        Err(AppError::Storage(_))
    ));
}
