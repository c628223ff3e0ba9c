// src/ui/elements/editor/main_editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{
    events::{RequestAddCategory, RequestDeleteItem, RequestPickImage, RequestSaveItem},
    CatalogStore,
};
use crate::ui::{
    elements::popups::{show_delete_confirm_popup, show_item_editor_popup, show_new_category_popup},
    thumbnails::ThumbnailCache,
    UiFeedbackState, THEME_COLOR,
};
use super::item_list::show_item_list;
use super::sidebar::show_sidebar;
use super::state::EditorWindowState;

#[allow(clippy::too_many_arguments)]
pub fn catalog_editor_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorWindowState>,
    store: Res<CatalogStore>,
    mut thumbnails: ResMut<ThumbnailCache>,
    ui_feedback: Res<UiFeedbackState>,
    mut add_category_writer: EventWriter<RequestAddCategory>,
    mut save_item_writer: EventWriter<RequestSaveItem>,
    mut delete_item_writer: EventWriter<RequestDeleteItem>,
    mut pick_image_writer: EventWriter<RequestPickImage>,
) {
    let ctx = contexts.ctx_mut();
    let doc = store.document();
    let read_only = store.is_read_only();
    state.sanitize_selection(doc);

    show_new_category_popup(ctx, &mut state, &mut add_category_writer);
    show_item_editor_popup(
        ctx,
        &mut state,
        doc.currency(),
        &mut save_item_writer,
        &mut pick_image_writer,
    );
    show_delete_confirm_popup(ctx, &mut state, &mut delete_item_writer);

    egui::SidePanel::left("catalog_sidebar")
        .resizable(false)
        .exact_width(220.0)
        .show(ctx, |ui| {
            show_sidebar(ui, &mut state, doc, read_only);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new(state.header_text(doc)).size(24.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add = egui::Button::new(state.add_button_label()).fill(THEME_COLOR);
                let enabled = state.selection.is_some() && !read_only;
                if ui.add_enabled(enabled, add).clicked() {
                    state.open_editor(None);
                }
            });
        });

        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.weak_text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
        ui.separator();

        show_item_list(ui, &mut state, doc, store.paths(), &mut thumbnails, read_only);
    });
}
