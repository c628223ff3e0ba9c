// src/ui/elements/popups/mod.rs
pub mod category_popup;
pub mod delete_confirm_popup;
pub mod item_editor_popup;

pub use category_popup::show_new_category_popup;
pub use delete_confirm_popup::show_delete_confirm_popup;
pub use item_editor_popup::show_item_editor_popup;
