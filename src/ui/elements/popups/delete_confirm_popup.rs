// src/ui/elements/popups/delete_confirm_popup.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::catalog::events::RequestDeleteItem;
use crate::ui::elements::editor::state::EditorWindowState;

/// Yes/no gate in front of every delete. Closing the window counts as "no".
pub fn show_delete_confirm_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    delete_writer: &mut EventWriter<RequestDeleteItem>,
) {
    let Some(pending) = &state.pending_delete else {
        return;
    };
    let label = pending.label.clone();

    let mut open = true;
    let mut answer: Option<bool> = None;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!("Delete '{}'?", label));
            ui.colored_label(egui::Color32::YELLOW, "This action cannot be undone.");
            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Delete").fill(egui::Color32::from_rgb(0xD9, 0x53, 0x4F)))
                    .clicked()
                {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });

    if !open && answer.is_none() {
        answer = Some(false);
    }
    if let Some(confirmed) = answer {
        if let Some(request) = state.resolve_delete(confirmed) {
            delete_writer.write(request);
        } else {
            debug!("Delete of '{}' declined.", label);
        }
    }
}
