// src/ui/elements/editor/sidebar.rs
use bevy_egui::egui;

use crate::catalog::{CatalogDocument, Scope};
use crate::ui::THEME_COLOR;
use super::state::EditorWindowState;

/// Left panel: store name, category list, new-category and portfolio buttons.
pub fn show_sidebar(ui: &mut egui::Ui, state: &mut EditorWindowState, doc: &CatalogDocument, read_only: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        let title = doc.store_name().unwrap_or("Store");
        ui.label(egui::RichText::new(format!("{title}\nManager")).size(20.0).strong());
        ui.add_space(12.0);
    });

    ui.label(egui::RichText::new("Shop Categories").weak());
    let list_height = (ui.available_height() - 110.0).max(80.0);
    egui::ScrollArea::vertical()
        .id_salt("category_list")
        .max_height(list_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if doc.categories.is_empty() {
                ui.weak("No categories yet.");
            }
            for category in &doc.categories {
                let selected = state.selection.as_ref() == Some(&Scope::Category(category.id.clone()));
                let button = egui::Button::new(&category.name)
                    .selected(selected)
                    .min_size(egui::vec2(ui.available_width(), 28.0));
                if ui.add(button).clicked() {
                    state.select_category(&category.id);
                }
            }
        });

    ui.separator();
    ui.vertical_centered_justified(|ui| {
        if ui
            .add_enabled(!read_only, egui::Button::new("+ New Category"))
            .clicked()
        {
            state.show_new_category_popup = true;
            state.new_category_name_input.clear();
        }
        ui.add_space(12.0);
        let portfolio = egui::Button::new(egui::RichText::new("🎨 Manage Portfolio").strong())
            .fill(THEME_COLOR)
            .selected(state.selection == Some(Scope::Portfolio))
            .min_size(egui::vec2(0.0, 32.0));
        if ui.add(portfolio).clicked() {
            state.select_portfolio();
        }
    });
}
