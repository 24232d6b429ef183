//! SQLite implementation of the to-do repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewTodo, Todo};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: Option<String>,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::new(row.id, row.title, row.description, row.completed)
    }
}

/// SQLite repository backed by the `todos` table.
pub struct SqliteTodoRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTodoRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO todos (title, description, completed)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(&new_todo.title)
        .bind(&new_todo.description)
        .bind(new_todo.completed)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(new_todo.into_todo(id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, description, completed FROM todos WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Todo::from))
    }

    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, description, completed FROM todos ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn update(&self, id: i64, new_todo: NewTodo) -> Result<Option<Todo>, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET title = ?1, description = ?2, completed = ?3
            WHERE id = ?4
            RETURNING id, title, description, completed
            "#,
        )
        .bind(new_todo.title)
        .bind(new_todo.description)
        .bind(new_todo.completed)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Todo::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
