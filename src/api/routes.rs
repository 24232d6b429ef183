//! API route configuration for both services.

use crate::api::handlers::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    redirect_handler, shorten_handler, stats_handler, update_item_handler,
};
use crate::state::{ShortLinkState, TodoState};
use axum::{
    Router,
    routing::{get, post},
};

/// Short-url service routes.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a short link
/// - `GET  /stats/{short_id}`   - Stored mapping for a short link
/// - `GET  /{short_id}`         - Redirect to the original URL
pub fn short_url_routes() -> Router<ShortLinkState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{short_id}", get(stats_handler))
        .route("/{short_id}", get(redirect_handler))
}

/// To-do service routes.
///
/// # Endpoints
///
/// - `GET    /items`        - List items
/// - `POST   /items`        - Create an item
/// - `GET    /items/{id}`   - Fetch an item
/// - `PUT    /items/{id}`   - Replace an item
/// - `DELETE /items/{id}`   - Delete an item
pub fn todo_routes() -> Router<TodoState> {
    Router::new()
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
}
