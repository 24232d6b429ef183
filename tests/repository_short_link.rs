mod common;

use crud_services::domain::entities::ShortLink;
use crud_services::domain::repositories::ShortLinkRepository;
use crud_services::error::AppError;
use crud_services::infrastructure::persistence::SqliteShortLinkRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test(migrations = "migrations/short_url")]
async fn test_create_link(pool: SqlitePool) {
    let repo = SqliteShortLinkRepository::new(Arc::new(pool));

    let link = ShortLink::new("abc123".to_string(), "https://example.com".to_string());
    let result = repo.create(link.clone()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), link);
}

#[sqlx::test(migrations = "migrations/short_url")]
async fn test_find_by_short_id(pool: SqlitePool) {
    common::create_test_link(&pool, "Xy7Qa1", "https://rust-lang.org").await;

    let repo = SqliteShortLinkRepository::new(Arc::new(pool));
    let link = repo.find_by_short_id("Xy7Qa1").await.unwrap();

    assert!(link.is_some());
    assert_eq!(link.unwrap().full_url, "https://rust-lang.org");
}

#[sqlx::test(migrations = "migrations/short_url")]
async fn test_find_by_short_id_is_case_sensitive(pool: SqlitePool) {
    common::create_test_link(&pool, "AbCdEf", "https://example.com").await;

    let repo = SqliteShortLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_short_id("abcdef").await.unwrap().is_none());
}

#[sqlx::test(migrations = "migrations/short_url")]
async fn test_find_by_short_id_not_found(pool: SqlitePool) {
    let repo = SqliteShortLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_short_id("nope00").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test(migrations = "migrations/short_url")]
async fn test_create_duplicate_id_is_internal_error(pool: SqlitePool) {
    common::create_test_link(&pool, "dup123", "https://first.example").await;

    let repo = SqliteShortLinkRepository::new(Arc::new(pool));
    let result = repo
        .create(ShortLink::new(
            "dup123".to_string(),
            "https://second.example".to_string(),
        ))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));

    let stored = repo.find_by_short_id("dup123").await.unwrap().unwrap();
    assert_eq!(stored.full_url, "https://first.example");
}
