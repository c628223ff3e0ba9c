// src/ui/elements/editor/mod.rs

pub mod state;
pub mod main_editor; // orchestrator
pub mod sidebar;
pub mod item_list;

pub use main_editor::catalog_editor_ui;
pub use state::EditorWindowState;
