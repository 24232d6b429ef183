//! Repository trait for to-do item data access.

use crate::domain::entities::{NewTodo, Todo};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for to-do items.
///
/// Every method is one statement against the store; there are no
/// multi-statement transactions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteTodoRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a new item and returns it with its assigned id.
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError>;

    /// Finds an item by id. `Ok(None)` if it does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError>;

    /// Returns every item in storage order.
    async fn list(&self) -> Result<Vec<Todo>, AppError>;

    /// Replaces title, description and completed of an item.
    ///
    /// Returns `Ok(None)` if no item has this id.
    async fn update(&self, id: i64, new_todo: NewTodo) -> Result<Option<Todo>, AppError>;

    /// Deletes an item.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
