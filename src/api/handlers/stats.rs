//! Handler for short link details.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::short_link::UrlInfo;
use crate::error::AppError;
use crate::state::ShortLinkState;

/// Returns the stored mapping for a short identifier without redirecting.
///
/// # Endpoint
///
/// `GET /stats/{short_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn stats_handler(
    State(state): State<ShortLinkState>,
    Path(short_id): Path<String>,
) -> Result<Json<UrlInfo>, AppError> {
    let link = state.short_link_service.get(&short_id).await?;

    Ok(Json(link.into()))
}
