//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A short identifier mapped to a destination URL
//! - [`Todo`] - A to-do item
//!
//! `NewTodo` carries the mutable fields of a to-do item and is used both for
//! creation and for full-replace updates.

pub mod short_link;
pub mod todo;

pub use short_link::ShortLink;
pub use todo::{NewTodo, Todo};
