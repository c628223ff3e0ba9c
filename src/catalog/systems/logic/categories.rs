// src/catalog/systems/logic/categories.rs
use bevy::prelude::*;

use crate::catalog::{
    definitions::{CatalogDocument, Category, Scope, DEFAULT_CATEGORY_ICON},
    events::{CatalogModified, CatalogOperationFeedback, RequestAddCategory, StoreFailureNotice},
    ids::unique_category_id,
    resources::CatalogStore,
    systems::io::persist,
};

/// Appends a new empty category named `name`. Returns its id, or `None` when
/// the name is blank.
pub fn add_category(doc: &mut CatalogDocument, name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let id = unique_category_id(doc, name);
    doc.categories.push(Category {
        id: id.clone(),
        name: name.to_string(),
        icon: DEFAULT_CATEGORY_ICON.to_string(),
        products: Vec::new(),
        extra: Default::default(),
    });
    Some(id)
}

pub fn handle_add_category_request(
    mut events: EventReader<RequestAddCategory>,
    mut store: ResMut<CatalogStore>,
    mut feedback: EventWriter<CatalogOperationFeedback>,
    mut failures: EventWriter<StoreFailureNotice>,
    mut modified: EventWriter<CatalogModified>,
) {
    for ev in events.read() {
        let added = match store.document_mut() {
            Ok(doc) => add_category(doc, &ev.name),
            Err(e) => {
                feedback.write(CatalogOperationFeedback { message: e.to_string(), is_error: true });
                continue;
            }
        };
        let Some(id) = added else {
            debug!("Ignoring blank category name.");
            continue;
        };
        if persist(&store, &mut feedback, &mut failures) {
            feedback.write(CatalogOperationFeedback {
                message: format!("Category '{}' created.", ev.name.trim()),
                is_error: false,
            });
        }
        modified.write(CatalogModified { scope: Some(Scope::Category(id)) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resources::{CatalogPaths, CATALOG_FILE};
    use tempfile::tempdir;

    #[test]
    fn add_category_derives_slug_and_starts_empty() {
        let mut doc = CatalogDocument::empty();
        let id = add_category(&mut doc, "Gift Boxes").unwrap();
        assert_eq!(id, "gift-boxes");
        let cat = doc.category("gift-boxes").unwrap();
        assert_eq!(cat.name, "Gift Boxes");
        assert_eq!(cat.icon, "fa-box");
        assert!(cat.products.is_empty());
    }

    #[test]
    fn blank_name_is_a_no_op() {
        let mut doc = CatalogDocument::empty();
        assert_eq!(add_category(&mut doc, ""), None);
        assert_eq!(add_category(&mut doc, "   "), None);
        assert!(doc.categories.is_empty());
    }

    #[test]
    fn duplicate_names_get_distinct_ids() {
        let mut doc = CatalogDocument::empty();
        add_category(&mut doc, "Mugs");
        let second = add_category(&mut doc, "Mugs").unwrap();
        assert_eq!(second, "mugs-2");
        let ids: Vec<_> = doc.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["mugs", "mugs-2"]);
    }

    #[test]
    fn handler_adds_and_persists() {
        let dir = tempdir().unwrap();
        let mut store = CatalogStore::new(CatalogPaths::new(dir.path()));
        store.load().unwrap();

        let mut app = App::new();
        app.insert_resource(store)
            .add_event::<RequestAddCategory>()
            .add_event::<CatalogOperationFeedback>()
            .add_event::<StoreFailureNotice>()
            .add_event::<CatalogModified>()
            .add_systems(Update, handle_add_category_request);

        app.world_mut().send_event(RequestAddCategory { name: "Gift Boxes".to_string() });
        app.update();

        let store = app.world().resource::<CatalogStore>();
        assert!(store.document().category("gift-boxes").is_some());

        let on_disk: CatalogDocument = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(CATALOG_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(&on_disk, store.document());
    }
}
