//! Business logic services for the application layer.

pub mod short_link_service;
pub mod todo_service;

pub use short_link_service::ShortLinkService;
pub use todo_service::TodoService;
