//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; SQLite implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`ShortLinkRepository`] - Short link storage and lookup
//! - [`TodoRepository`] - To-do item CRUD
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod short_link_repository;
pub mod todo_repository;

pub use short_link_repository::ShortLinkRepository;
pub use todo_repository::TodoRepository;

#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
