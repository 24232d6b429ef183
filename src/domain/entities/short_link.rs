//! Short link entity.

/// Mapping from a generated short identifier to the original URL.
///
/// Short links are created once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub short_id: String,
    pub full_url: String,
}

impl ShortLink {
    pub fn new(short_id: String, full_url: String) -> Self {
        Self { short_id, full_url }
    }
}
