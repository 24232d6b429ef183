//! DTOs for the short-url service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
///
/// The URL is stored verbatim; it is not validated or normalized.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// A stored short link, returned by `POST /shorten` and `GET /stats/{short_id}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlInfo {
    pub short_id: String,
    pub full_url: String,
}

impl From<ShortLink> for UrlInfo {
    fn from(link: ShortLink) -> Self {
        Self {
            short_id: link.short_id,
            full_url: link.full_url,
        }
    }
}
