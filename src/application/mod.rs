//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers a small API in
//! which a missing record is already an [`crate::error::AppError::NotFound`].
//!
//! # Available Services
//!
//! - [`services::short_link_service::ShortLinkService`] - Short link creation and lookup
//! - [`services::todo_service::TodoService`] - To-do item CRUD

pub mod services;
