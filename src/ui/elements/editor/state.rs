// src/ui/elements/editor/state.rs
use bevy::prelude::Resource;

use crate::catalog::{
    events::{RequestDeleteItem, RequestSaveItem},
    CatalogDocument, CatalogItem, EditorMode, ItemDraft, ItemTarget, Scope,
};

/// Modal form state for creating or updating one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub scope: Scope,
    /// `None` while creating.
    pub target: Option<ItemTarget>,
    pub draft: ItemDraft,
}

impl ItemForm {
    pub fn mode(&self) -> EditorMode {
        self.scope.mode()
    }

    pub fn is_create(&self) -> bool {
        self.target.is_none()
    }

    pub fn window_title(&self) -> String {
        let verb = if self.is_create() { "Add" } else { "Edit" };
        match self.mode() {
            EditorMode::Store => format!("{verb} Product"),
            EditorMode::Portfolio => format!("{verb} Portfolio Image"),
        }
    }
}

/// A delete waiting for the user's yes/no.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub scope: Scope,
    pub target: ItemTarget,
    pub label: String,
}

#[derive(Resource, Debug, Default)]
pub struct EditorWindowState {
    pub mode: EditorMode,
    pub selection: Option<Scope>,

    pub show_new_category_popup: bool,
    pub new_category_name_input: String,

    pub item_form: Option<ItemForm>,
    pub pending_delete: Option<PendingDelete>,
}

impl EditorWindowState {
    pub fn select_category(&mut self, category_id: &str) {
        self.mode = EditorMode::Store;
        self.selection = Some(Scope::Category(category_id.to_string()));
    }

    pub fn select_portfolio(&mut self) {
        self.mode = EditorMode::Portfolio;
        self.selection = Some(Scope::Portfolio);
    }

    pub fn select_scope(&mut self, scope: Scope) {
        match &scope {
            Scope::Category(id) => self.select_category(id),
            Scope::Portfolio => self.select_portfolio(),
        }
    }

    /// Drops a selection whose category is no longer in the document.
    pub fn sanitize_selection(&mut self, doc: &CatalogDocument) {
        if let Some(scope) = &self.selection {
            if !doc.contains_scope(scope) {
                self.selection = None;
                self.item_form = None;
                self.pending_delete = None;
            }
        }
    }

    pub fn header_text(&self, doc: &CatalogDocument) -> String {
        match &self.selection {
            Some(Scope::Category(id)) => doc
                .category(id)
                .map(|c| format!("📂 {}", c.name))
                .unwrap_or_else(|| "Dashboard".to_string()),
            Some(Scope::Portfolio) => "🎨 Portfolio Gallery".to_string(),
            None => "Dashboard".to_string(),
        }
    }

    pub fn add_button_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Store => "+ Add Product",
            EditorMode::Portfolio => "+ Add Image",
        }
    }

    /// Opens the item form, empty for a create or pre-filled for an update.
    pub fn open_editor(&mut self, existing: Option<(usize, CatalogItem<'_>)>) {
        let Some(scope) = self.selection.clone() else {
            return;
        };
        self.item_form = Some(match existing {
            Some((position, item)) => ItemForm {
                scope,
                target: Some(ItemTarget { id: item.id().to_string(), position }),
                draft: ItemDraft::from_item(item),
            },
            None => ItemForm {
                scope,
                target: None,
                draft: ItemDraft::default(),
            },
        });
    }

    /// Builds the save request from the open form and closes it.
    pub fn take_save_request(&mut self) -> Option<RequestSaveItem> {
        self.item_form.take().map(|form| RequestSaveItem {
            scope: form.scope,
            target: form.target,
            draft: form.draft,
        })
    }

    pub fn apply_imported_image(&mut self, relative_path: &str) {
        if let Some(form) = &mut self.item_form {
            form.draft.image = relative_path.to_string();
        }
    }

    pub fn request_delete(&mut self, position: usize, item: CatalogItem<'_>) {
        let Some(scope) = self.selection.clone() else {
            return;
        };
        let label = if item.title().is_empty() { "Untitled" } else { item.title() };
        self.pending_delete = Some(PendingDelete {
            scope,
            target: ItemTarget { id: item.id().to_string(), position },
            label: label.to_string(),
        });
    }

    /// Closes the confirmation. Only a `true` answer produces a delete.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Option<RequestDeleteItem> {
        let pending = self.pending_delete.take()?;
        confirmed.then(|| RequestDeleteItem {
            scope: pending.scope,
            target: pending.target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definitions::{Category, PortfolioItem, Product, DEFAULT_CATEGORY_ICON};

    fn doc() -> CatalogDocument {
        let mut doc = CatalogDocument::with_default_settings();
        doc.categories.push(Category {
            id: "mugs".to_string(),
            name: "Mugs".to_string(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
            products: vec![Product {
                id: "7".to_string(),
                name: "Blue mug".to_string(),
                price: "350".to_string(),
                description: String::new(),
                whatsapp_code: "MUG".to_string(),
                image: String::new(),
                featured: true,
                extra: Default::default(),
            }],
            extra: Default::default(),
        });
        doc.portfolio.push(PortfolioItem {
            id: "8".to_string(),
            title: String::new(),
            image: String::new(),
            extra: Default::default(),
        });
        doc
    }

    #[test]
    fn selecting_switches_mode_and_header() {
        let doc = doc();
        let mut state = EditorWindowState::default();
        assert_eq!(state.header_text(&doc), "Dashboard");

        state.select_category("mugs");
        assert_eq!(state.mode, EditorMode::Store);
        assert_eq!(state.header_text(&doc), "📂 Mugs");
        assert_eq!(state.add_button_label(), "+ Add Product");

        state.select_portfolio();
        assert_eq!(state.mode, EditorMode::Portfolio);
        assert_eq!(state.selection, Some(Scope::Portfolio));
        assert_eq!(state.add_button_label(), "+ Add Image");
    }

    #[test]
    fn open_editor_prefills_for_update_and_is_empty_for_create() {
        let doc = doc();
        let mut state = EditorWindowState::default();
        state.select_category("mugs");

        let product = &doc.categories[0].products[0];
        state.open_editor(Some((0, CatalogItem::Product(product))));
        let form = state.item_form.clone().unwrap();
        assert_eq!(form.target, Some(ItemTarget { id: "7".to_string(), position: 0 }));
        assert_eq!(form.draft.title, "Blue mug");
        assert_eq!(form.draft.whatsapp_code, "MUG");
        assert_eq!(form.window_title(), "Edit Product");

        state.open_editor(None);
        let form = state.item_form.clone().unwrap();
        assert!(form.is_create());
        assert_eq!(form.draft, ItemDraft::default());
    }

    #[test]
    fn open_editor_without_selection_does_nothing() {
        let mut state = EditorWindowState::default();
        state.open_editor(None);
        assert!(state.item_form.is_none());
    }

    #[test]
    fn save_request_closes_form() {
        let mut state = EditorWindowState::default();
        state.select_portfolio();
        state.open_editor(None);
        state.apply_imported_image("assets/img/portfolio/a.png");

        let request = state.take_save_request().unwrap();
        assert_eq!(request.scope, Scope::Portfolio);
        assert!(request.target.is_none());
        assert_eq!(request.draft.image, "assets/img/portfolio/a.png");
        assert!(state.item_form.is_none());
    }

    #[test]
    fn declined_delete_produces_no_request() {
        let doc = doc();
        let mut state = EditorWindowState::default();
        state.select_portfolio();
        state.request_delete(0, CatalogItem::Portfolio(&doc.portfolio[0]));
        assert_eq!(state.pending_delete.as_ref().unwrap().label, "Untitled");

        assert!(state.resolve_delete(false).is_none());
        assert!(state.pending_delete.is_none());

        state.request_delete(0, CatalogItem::Portfolio(&doc.portfolio[0]));
        let request = state.resolve_delete(true).unwrap();
        assert_eq!(request.target.id, "8");
    }

    #[test]
    fn vanished_category_clears_selection() {
        let mut state = EditorWindowState::default();
        state.select_category("gone");
        state.open_editor(None);
        state.sanitize_selection(&doc());
        assert!(state.selection.is_none());
        assert!(state.item_form.is_none());
    }
}
