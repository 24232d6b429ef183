//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits on top of a shared
//! [`sqlx::SqlitePool`]. Each repository call checks a connection out of the
//! pool for one statement; the connection returns to the pool when the call
//! finishes, whether it succeeded or not.
//!
//! # Repositories
//!
//! - [`SqliteShortLinkRepository`] - Short link storage and lookup
//! - [`SqliteTodoRepository`] - To-do item CRUD

pub mod database;
pub mod sqlite_short_link_repository;
pub mod sqlite_todo_repository;

pub use database::{SHORT_URL_MIGRATOR, TODO_MIGRATOR, connect};
pub use sqlite_short_link_repository::SqliteShortLinkRepository;
pub use sqlite_todo_repository::SqliteTodoRepository;
