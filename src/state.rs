//! Router state for each service.
//!
//! Each service owns its own state; nothing is shared between the two.

use std::sync::Arc;

use crate::application::services::{ShortLinkService, TodoService};
use crate::infrastructure::persistence::{SqliteShortLinkRepository, SqliteTodoRepository};

pub type AppShortLinkService = ShortLinkService<SqliteShortLinkRepository>;
pub type AppTodoService = TodoService<SqliteTodoRepository>;

/// State of the short-url service router.
#[derive(Clone)]
pub struct ShortLinkState {
    pub short_link_service: Arc<AppShortLinkService>,
}

impl ShortLinkState {
    pub fn new(short_link_service: Arc<AppShortLinkService>) -> Self {
        Self { short_link_service }
    }
}

/// State of the to-do service router.
#[derive(Clone)]
pub struct TodoState {
    pub todo_service: Arc<AppTodoService>,
}

impl TodoState {
    pub fn new(todo_service: Arc<AppTodoService>) -> Self {
        Self { todo_service }
    }
}
