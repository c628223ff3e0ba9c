// src/ui/elements/popups/category_popup.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::catalog::events::RequestAddCategory;
use crate::ui::elements::editor::state::EditorWindowState;

pub fn show_new_category_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    add_category_writer: &mut EventWriter<RequestAddCategory>,
) {
    if !state.show_new_category_popup {
        return;
    }
    let mut open = state.show_new_category_popup;
    let mut create_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new("New Category")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("Enter Category Name:");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut state.new_category_name_input).desired_width(220.0),
            );
            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                create_clicked = true;
            }
            ui.separator();
            ui.horizontal(|ui_h| {
                if ui_h
                    .add_enabled(
                        !state.new_category_name_input.trim().is_empty(),
                        egui::Button::new("Create"),
                    )
                    .clicked()
                {
                    create_clicked = true;
                }
                if ui_h.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    if create_clicked {
        let name = state.new_category_name_input.trim().to_string();
        // An empty name behaves like cancel.
        if !name.is_empty() {
            add_category_writer.write(RequestAddCategory { name });
        }
        cancel_clicked = true;
    }
    if cancel_clicked || !open {
        state.show_new_category_popup = false;
        state.new_category_name_input.clear();
    }
}
