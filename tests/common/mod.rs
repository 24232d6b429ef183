#![allow(dead_code)]

use crud_services::application::services::{ShortLinkService, TodoService};
use crud_services::infrastructure::persistence::{SqliteShortLinkRepository, SqliteTodoRepository};
use crud_services::state::{ShortLinkState, TodoState};
use sqlx::SqlitePool;
use std::sync::Arc;

pub async fn create_test_link(pool: &SqlitePool, short_id: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_id, full_url) VALUES (?1, ?2)")
        .bind(short_id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_todo(
    pool: &SqlitePool,
    title: &str,
    description: Option<&str>,
    completed: bool,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO todos (title, description, completed) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(title)
    .bind(description)
    .bind(completed)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_short_link_state(pool: SqlitePool) -> ShortLinkState {
    let repository = Arc::new(SqliteShortLinkRepository::new(Arc::new(pool)));
    ShortLinkState::new(Arc::new(ShortLinkService::new(repository)))
}

pub fn create_todo_state(pool: SqlitePool) -> TodoState {
    let repository = Arc::new(SqliteTodoRepository::new(Arc::new(pool)));
    TodoState::new(Arc::new(TodoService::new(repository)))
}
