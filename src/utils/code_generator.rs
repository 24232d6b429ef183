//! Short identifier generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of a generated short identifier.
pub const SHORT_ID_LENGTH: usize = 6;

/// Generates a random short identifier.
///
/// Each of the [`SHORT_ID_LENGTH`] characters is drawn uniformly from
/// `a-z`, `A-Z` and `0-9` using the thread-local RNG. Nothing checks the result
/// against stored links, so two calls may return the same identifier.
///
/// # Examples
///
/// ```ignore
/// let id = generate_short_id();
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_short_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SHORT_ID_LENGTH)
        .map(char::from)
        .collect()
}
