// src/ui/elements/popups/item_editor_popup.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::catalog::{
    events::{RequestPickImage, RequestSaveItem},
    EditorMode,
};
use crate::ui::{elements::editor::state::EditorWindowState, THEME_COLOR};

/// Create/update form. Product fields are only shown in Store mode.
pub fn show_item_editor_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    currency: &str,
    save_writer: &mut EventWriter<RequestSaveItem>,
    pick_image_writer: &mut EventWriter<RequestPickImage>,
) {
    let Some(form) = &mut state.item_form else {
        return;
    };
    let mode = form.mode();
    let mut open = true;
    let mut save_clicked = false;

    egui::Window::new(form.window_title())
        .id(egui::Id::new("item_editor_popup"))
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            let draft = &mut form.draft;
            egui::Grid::new("item_editor_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |grid| {
                    grid.label("Title / Name");
                    grid.add(egui::TextEdit::singleline(&mut draft.title).desired_width(280.0));
                    grid.end_row();

                    if mode == EditorMode::Store {
                        grid.label(format!("Price ({})", currency));
                        grid.add(egui::TextEdit::singleline(&mut draft.price).desired_width(280.0));
                        grid.end_row();

                        grid.label("Description");
                        grid.add(
                            egui::TextEdit::multiline(&mut draft.description)
                                .desired_rows(3)
                                .desired_width(280.0),
                        );
                        grid.end_row();

                        grid.label("WhatsApp Code");
                        grid.add(egui::TextEdit::singleline(&mut draft.whatsapp_code).desired_width(280.0));
                        grid.end_row();
                    }

                    grid.label("Image");
                    grid.horizontal(|row| {
                        row.add(egui::TextEdit::singleline(&mut draft.image).desired_width(200.0));
                        if row.button("📂 Upload").clicked() {
                            pick_image_writer.write(RequestPickImage { mode });
                        }
                    });
                    grid.end_row();
                });

            ui.add_space(16.0);
            let save = egui::Button::new(egui::RichText::new("SAVE").strong())
                .fill(THEME_COLOR)
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add(save).clicked() {
                save_clicked = true;
            }
        });

    if save_clicked {
        if let Some(request) = state.take_save_request() {
            save_writer.write(request);
        }
    } else if !open {
        state.item_form = None;
    }
}
