// src/catalog/mod.rs

pub mod assets;
pub mod definitions;
pub mod error;
pub mod events;
pub mod ids;
pub mod plugin;
pub mod resources;
pub mod schema;

pub(crate) mod systems;

pub use definitions::{CatalogDocument, CatalogItem, EditorMode, ItemDraft, ItemTarget, Scope};
pub use plugin::CatalogPlugin;
pub use resources::{CatalogPaths, CatalogStore};
