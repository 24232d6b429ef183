//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::ShortLinkState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Responds with `302 Found` and a `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<ShortLinkState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.short_link_service.get(&short_id).await?;

    tracing::debug!(short_id = %link.short_id, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, link.full_url)]))
}
