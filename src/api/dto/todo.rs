//! DTOs for the to-do service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewTodo, Todo};

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// Omitted fields take their defaults, which for `PUT` means they are reset.
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl From<TodoRequest> for NewTodo {
    fn from(request: TodoRequest) -> Self {
        NewTodo {
            title: request.title,
            description: request.description,
            completed: request.completed,
        }
    }
}

/// A stored to-do item. `description` is serialized as `null` when absent.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
        }
    }
}

/// Confirmation returned by `DELETE /items/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub detail: &'static str,
}
