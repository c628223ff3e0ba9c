// src/catalog/systems/logic/mod.rs
pub mod categories;
pub mod items;

pub use categories::handle_add_category_request;
pub use items::{handle_delete_item_request, handle_save_item_request};
