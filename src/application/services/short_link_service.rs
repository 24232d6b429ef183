//! Short link creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_short_id;
use serde_json::json;

/// Service for creating and resolving short links.
pub struct ShortLinkService<R: ShortLinkRepository> {
    repository: Arc<R>,
}

impl<R: ShortLinkRepository> ShortLinkService<R> {
    /// Creates a new short link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores `full_url` under a freshly generated short identifier.
    ///
    /// The URL is stored as given. The identifier is not checked against
    /// existing links; if it is already taken the insert fails and the error
    /// propagates as [`AppError::Internal`].
    pub async fn shorten(&self, full_url: String) -> Result<ShortLink, AppError> {
        let link = ShortLink::new(generate_short_id(), full_url);

        let stored = self.repository.create(link).await?;
        tracing::debug!(short_id = %stored.short_id, "Short link created");

        Ok(stored)
    }

    /// Looks up a short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this identifier.
    pub async fn get(&self, short_id: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "short_id": short_id })))
    }
}
