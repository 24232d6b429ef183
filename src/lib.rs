//! # CRUD services
//!
//! Two independent microservices built with Axum and SQLite:
//!
//! - **Short URL service** - stores a URL under a random 6-character identifier
//!   and redirects to it
//! - **ToDo service** - create, list, read, replace and delete to-do items
//!
//! Each service has its own database file, router and binary; they share
//! code only.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services turning lookups into not-found errors
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin short-url-service   # listens on 0.0.0.0:8000
//! cargo run --bin todo-service        # listens on 0.0.0.0:8001
//! ```
//!
//! Databases are created under `./data/` on first start and migrated
//! automatically. See [`config`] for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::{ShortLinkState, TodoState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortLinkService, TodoService};
    pub use crate::domain::entities::{NewTodo, ShortLink, Todo};
    pub use crate::error::AppError;
    pub use crate::state::{ShortLinkState, TodoState};
}
