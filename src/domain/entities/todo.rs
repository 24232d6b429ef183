//! To-do item entity.

/// A stored to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: i64, title: String, description: Option<String>, completed: bool) -> Self {
        Self {
            id,
            title,
            description,
            completed,
        }
    }
}

/// Mutable fields of a to-do item.
///
/// An update writes every field, so a `None` description clears the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl NewTodo {
    /// Attaches a store-assigned id.
    pub fn into_todo(self, id: i64) -> Todo {
        Todo::new(id, self.title, self.description, self.completed)
    }
}
