//! Handlers for to-do item endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::todo::{DeleteResponse, TodoRequest, TodoResponse};
use crate::error::AppError;
use crate::state::TodoState;

/// Creates an item.
///
/// # Endpoint
///
/// `POST /items`
///
/// # Request Body
///
/// ```json
/// { "title": "Buy milk", "description": null, "completed": false }
/// ```
///
/// `description` and `completed` are optional.
pub async fn create_item_handler(
    State(state): State<TodoState>,
    Json(payload): Json<TodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todo_service.create(payload.into()).await?;

    Ok(Json(todo.into()))
}

/// Lists every item.
///
/// # Endpoint
///
/// `GET /items`
pub async fn list_items_handler(
    State(state): State<TodoState>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.todo_service.list().await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Returns a single item.
///
/// # Endpoint
///
/// `GET /items/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the item doesn't exist.
pub async fn get_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todo_service.get(id).await?;

    Ok(Json(todo.into()))
}

/// Replaces an item.
///
/// # Endpoint
///
/// `PUT /items/{id}`
///
/// All fields are written. An omitted `description` becomes `null` and an
/// omitted `completed` becomes `false`.
///
/// # Errors
///
/// Returns 404 Not Found if the item doesn't exist.
pub async fn update_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
    Json(payload): Json<TodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todo_service.update(id, payload.into()).await?;

    Ok(Json(todo.into()))
}

/// Deletes an item.
///
/// # Endpoint
///
/// `DELETE /items/{id}`
///
/// # Response
///
/// ```json
/// { "detail": "Item deleted" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the item doesn't exist.
pub async fn delete_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.todo_service.delete(id).await?;

    Ok(Json(DeleteResponse {
        detail: "Item deleted",
    }))
}
