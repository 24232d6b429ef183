//! SQLite implementation of the short link repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct UrlRow {
    short_id: String,
    full_url: String,
}

impl From<UrlRow> for ShortLink {
    fn from(row: UrlRow) -> Self {
        ShortLink::new(row.short_id, row.full_url)
    }
}

/// SQLite repository backed by the `urls` table.
pub struct SqliteShortLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for SqliteShortLinkRepository {
    async fn create(&self, link: ShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (short_id, full_url)
            VALUES (?1, ?2)
            RETURNING short_id, full_url
            "#,
        )
        .bind(link.short_id)
        .bind(link.full_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "SELECT short_id, full_url FROM urls WHERE short_id = ?1",
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }
}
