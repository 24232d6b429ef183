//! To-do item service.

use std::sync::Arc;

use crate::domain::entities::{NewTodo, Todo};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for to-do item CRUD.
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

fn item_not_found(id: i64) -> AppError {
    AppError::not_found("Item not found", json!({ "id": id }))
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a new to-do service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let todo = self.repository.create(new_todo).await?;
        tracing::debug!(id = todo.id, "Item created");
        Ok(todo)
    }

    pub async fn list(&self) -> Result<Vec<Todo>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn get(&self, id: i64) -> Result<Todo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| item_not_found(id))
    }

    /// Replaces every mutable field of an item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn update(&self, id: i64, new_todo: NewTodo) -> Result<Todo, AppError> {
        self.repository
            .update(id, new_todo)
            .await?
            .ok_or_else(|| item_not_found(id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(item_not_found(id));
        }

        tracing::debug!(id, "Item deleted");
        Ok(())
    }
}
