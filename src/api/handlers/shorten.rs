//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::short_link::{ShortenRequest, UrlInfo};
use crate::error::AppError;
use crate::state::ShortLinkState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_id": "aB3xY9", "full_url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error if the link cannot be stored.
pub async fn shorten_handler(
    State(state): State<ShortLinkState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<UrlInfo>, AppError> {
    let link = state.short_link_service.shorten(payload.url).await?;

    Ok(Json(link.into()))
}
