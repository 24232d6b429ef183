//! Top-level routers for the two services.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::{ShortLinkState, TodoState};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the short-url service application.
pub fn short_url_router(state: ShortLinkState) -> NormalizePath<Router> {
    let router = api::routes::short_url_routes()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Builds the to-do service application.
pub fn todo_router(state: TodoState) -> NormalizePath<Router> {
    let router = api::routes::todo_routes()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
