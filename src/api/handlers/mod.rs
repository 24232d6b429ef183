//! HTTP request handlers.
//!
//! `shorten`, `redirect` and `stats` belong to the short-url service;
//! `items` holds the to-do service handlers.

pub mod items;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
