// src/ui/elements/editor/item_list.rs
use bevy_egui::egui;

use crate::catalog::{definitions::list_active_items, CatalogDocument, CatalogItem, CatalogPaths, EditorMode};
use crate::ui::thumbnails::ThumbnailCache;
use super::state::EditorWindowState;

const THUMB_SIZE: f32 = 48.0;
const EDIT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x5B, 0xC0, 0xDE);
const DELETE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xD9, 0x53, 0x4F);

/// What the user clicked on a card this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit,
    Delete,
}

/// Title and subtitle shown on a card.
pub fn card_text(item: CatalogItem<'_>, currency: &str) -> (String, String) {
    let title = if item.title().is_empty() { "Untitled" } else { item.title() };
    let subtitle = match item {
        CatalogItem::Product(p) => format!("{}{}", currency, p.price),
        CatalogItem::Portfolio(p) if p.image.is_empty() => "No image".to_string(),
        CatalogItem::Portfolio(p) => p.image.clone(),
    };
    (title.to_string(), subtitle)
}

/// Renders the active scope as cards, in storage order.
pub fn show_item_list(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    doc: &CatalogDocument,
    paths: &CatalogPaths,
    thumbnails: &mut ThumbnailCache,
    read_only: bool,
) {
    let Some(scope) = state.selection.clone() else {
        ui.centered_and_justified(|ui| {
            ui.weak("Pick a category or the portfolio on the left.");
        });
        return;
    };

    let currency = doc.currency();
    let mut clicked: Option<(usize, CardAction)> = None;
    egui::ScrollArea::vertical()
        .id_salt("item_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut any = false;
            for (index, item) in list_active_items(doc, &scope) {
                any = true;
                if let Some(action) = render_card(ui, item, index, currency, paths, thumbnails, read_only) {
                    clicked = Some((index, action));
                }
            }
            if !any {
                ui.weak(match scope.mode() {
                    EditorMode::Store => "No products in this category yet.",
                    EditorMode::Portfolio => "The portfolio is empty.",
                });
            }
        });

    if let Some((index, action)) = clicked {
        // Re-project to hand the clicked record to the state.
        if let Some((_, item)) = list_active_items(doc, &scope).nth(index) {
            match action {
                CardAction::Edit => state.open_editor(Some((index, item))),
                CardAction::Delete => state.request_delete(index, item),
            }
        }
    }
}

fn render_card(
    ui: &mut egui::Ui,
    item: CatalogItem<'_>,
    index: usize,
    currency: &str,
    paths: &CatalogPaths,
    thumbnails: &mut ThumbnailCache,
    read_only: bool,
) -> Option<CardAction> {
    let (title, subtitle) = card_text(item, currency);
    let mut action = None;

    ui.push_id(("card", index, item.id()), |ui| {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().faint_bg_color)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let size = egui::vec2(THUMB_SIZE, THUMB_SIZE);
                    match thumbnails.get_or_load(ui.ctx(), paths, item.image()) {
                        Some(texture) => {
                            ui.add(egui::Image::new(egui::load::SizedTexture::new(texture.id(), size)));
                        }
                        None => {
                            ui.add_sized(size, egui::Label::new(egui::RichText::new("🖼").size(24.0)));
                        }
                    }

                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(title).size(16.0).strong());
                        ui.weak(subtitle);
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = egui::Button::new("Delete").fill(DELETE_COLOR);
                        if ui.add_enabled(!read_only, delete).clicked() {
                            action = Some(CardAction::Delete);
                        }
                        let edit = egui::Button::new("Edit").fill(EDIT_COLOR);
                        if ui.add_enabled(!read_only, edit).clicked() {
                            action = Some(CardAction::Edit);
                        }
                    });
                });
            });
    });
    ui.add_space(4.0);
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definitions::{PortfolioItem, Product};

    #[test]
    fn product_card_shows_currency_and_price() {
        let product = Product {
            id: "1".to_string(),
            name: "Candle".to_string(),
            price: "499".to_string(),
            description: String::new(),
            whatsapp_code: String::new(),
            image: String::new(),
            featured: false,
            extra: Default::default(),
        };
        assert_eq!(
            card_text(CatalogItem::Product(&product), "₹"),
            ("Candle".to_string(), "₹499".to_string())
        );
    }

    #[test]
    fn portfolio_card_falls_back_for_missing_fields() {
        let item = PortfolioItem {
            id: "1".to_string(),
            title: String::new(),
            image: String::new(),
            extra: Default::default(),
        };
        assert_eq!(
            card_text(CatalogItem::Portfolio(&item), "₹"),
            ("Untitled".to_string(), "No image".to_string())
        );
    }
}
