// src/catalog/events.rs
use bevy::prelude::Event;
use std::path::PathBuf;

use super::definitions::{EditorMode, ItemDraft, ItemTarget, Scope};

/// Sent by the sidebar "+ New Category" popup.
#[derive(Event, Debug, Clone)]
pub struct RequestAddCategory {
    pub name: String,
}

/// Sent by the item form's SAVE button. `target` is `None` for a new record.
#[derive(Event, Debug, Clone)]
pub struct RequestSaveItem {
    pub scope: Scope,
    pub target: Option<ItemTarget>,
    pub draft: ItemDraft,
}

/// Sent only after the user confirmed the deletion.
#[derive(Event, Debug, Clone)]
pub struct RequestDeleteItem {
    pub scope: Scope,
    pub target: ItemTarget,
}

/// Sent by the item form's Upload button; opens the native picker.
#[derive(Event, Debug, Clone)]
pub struct RequestPickImage {
    pub mode: EditorMode,
}

/// A file was chosen in the picker and should be copied into the assets.
#[derive(Event, Debug, Clone)]
pub struct RequestImportImage {
    pub mode: EditorMode,
    pub path: PathBuf,
}

/// The picked image is in place; the form should point at `relative_path`.
#[derive(Event, Debug, Clone)]
pub struct ImageImported {
    pub relative_path: String,
}

/// A mutation was applied and persisted.
#[derive(Event, Debug, Clone)]
pub struct CatalogModified {
    pub scope: Option<Scope>,
}

/// Load or save of the catalog file failed. Shown with a blocking dialog.
#[derive(Event, Debug, Clone)]
pub struct StoreFailureNotice {
    pub title: String,
    pub message: String,
}

#[derive(Event, Debug, Clone)]
pub struct CatalogOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
