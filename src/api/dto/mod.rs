//! Data Transfer Objects for API requests and responses.

pub mod short_link;
pub mod todo;
