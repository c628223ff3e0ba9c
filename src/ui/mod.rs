// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContextPass};

pub mod elements;
pub mod systems;
pub mod thumbnails;

use elements::editor::catalog_editor_ui;
use elements::editor::state::EditorWindowState;
use systems::{
    apply_imported_images, handle_ui_feedback, refresh_thumbnails_on_change,
    remember_last_scope, restore_last_scope, show_store_failure_dialogs,
};
use thumbnails::ThumbnailCache;

/// Accent for primary buttons.
pub const THEME_COLOR: egui::Color32 = egui::Color32::from_rgb(0xD4, 0x8C, 0x9E);

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the catalog editor window.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .init_resource::<ThumbnailCache>()
            // Runs after the catalog startup load has been applied.
            .add_systems(PostStartup, restore_last_scope)
            .add_systems(
                Update,
                (
                    handle_ui_feedback,
                    show_store_failure_dialogs,
                    apply_imported_images,
                    refresh_thumbnails_on_change,
                    remember_last_scope,
                ),
            )
            .add_systems(EguiContextPass, catalog_editor_ui);

        info!("EditorUiPlugin initialized.");
    }
}
