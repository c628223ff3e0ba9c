// src/catalog/systems/logic/items.rs
use bevy::prelude::*;
use serde_json::Map;

use crate::catalog::{
    definitions::{CatalogDocument, ItemDraft, ItemTarget, PortfolioItem, Product, Scope},
    error::CatalogError,
    events::{
        CatalogModified, CatalogOperationFeedback, RequestDeleteItem, RequestSaveItem,
        StoreFailureNotice,
    },
    ids::{new_item_id, now_seconds},
    resources::CatalogStore,
    systems::io::persist,
};

trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for PortfolioItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Finds the record `target` refers to. The id must match; the position is
/// only trusted when the record there carries that id.
fn resolve<T: Identified>(items: &[T], target: &ItemTarget) -> Option<usize> {
    if items
        .get(target.position)
        .is_some_and(|item| item.id() == target.id)
    {
        return Some(target.position);
    }
    items.iter().position(|item| item.id() == target.id)
}

fn products_mut<'a>(
    doc: &'a mut CatalogDocument,
    category_id: &str,
) -> Result<&'a mut Vec<Product>, CatalogError> {
    doc.category_mut(category_id)
        .map(|c| &mut c.products)
        .ok_or_else(|| CatalogError::CategoryNotFound(category_id.to_string()))
}

/// Replaces the record at `target` (keeping its id, any fields this editor
/// does not know, and for products its `featured` flag) or appends a new one built from `draft`. Returns the id
/// of the written record.
pub fn save_item(
    doc: &mut CatalogDocument,
    scope: &Scope,
    target: Option<&ItemTarget>,
    draft: &ItemDraft,
    now: i64,
) -> Result<String, CatalogError> {
    let fresh_id = target.is_none().then(|| new_item_id(doc, scope, now));
    let not_found = |t: &ItemTarget| CatalogError::ItemNotFound {
        scope: scope.clone(),
        id: t.id.clone(),
    };

    match scope {
        Scope::Category(category_id) => {
            let products = products_mut(doc, category_id)?;
            let existing = match target {
                Some(t) => Some(resolve(products.as_slice(), t).ok_or_else(|| not_found(t))?),
                None => None,
            };
            let (id, featured, extra) = match existing {
                Some(index) => {
                    let current = &products[index];
                    (current.id.clone(), current.featured, current.extra.clone())
                }
                None => (fresh_id.unwrap_or_default(), false, Map::new()),
            };
            let record = Product {
                id: id.clone(),
                name: draft.title.clone(),
                price: draft.price.clone(),
                description: draft.description.clone(),
                whatsapp_code: draft.whatsapp_code.clone(),
                image: draft.image.clone(),
                featured,
                extra,
            };
            match existing {
                Some(index) => products[index] = record,
                None => products.push(record),
            }
            Ok(id)
        }
        Scope::Portfolio => {
            let items = &mut doc.portfolio;
            let existing = match target {
                Some(t) => Some(resolve(items.as_slice(), t).ok_or_else(|| not_found(t))?),
                None => None,
            };
            let (id, extra) = match existing {
                Some(index) => (items[index].id.clone(), items[index].extra.clone()),
                None => (fresh_id.unwrap_or_default(), Map::new()),
            };
            let record = PortfolioItem {
                id: id.clone(),
                title: draft.title.clone(),
                image: draft.image.clone(),
                extra,
            };
            match existing {
                Some(index) => items[index] = record,
                None => items.push(record),
            }
            Ok(id)
        }
    }
}

/// Removes the record `target` refers to, keeping the order of the rest.
pub fn delete_item(
    doc: &mut CatalogDocument,
    scope: &Scope,
    target: &ItemTarget,
) -> Result<(), CatalogError> {
    let not_found = || CatalogError::ItemNotFound {
        scope: scope.clone(),
        id: target.id.clone(),
    };
    match scope {
        Scope::Category(category_id) => {
            let products = products_mut(doc, category_id)?;
            let index = resolve(products.as_slice(), target).ok_or_else(not_found)?;
            products.remove(index);
        }
        Scope::Portfolio => {
            let index = resolve(doc.portfolio.as_slice(), target).ok_or_else(not_found)?;
            doc.portfolio.remove(index);
        }
    }
    Ok(())
}

pub fn handle_save_item_request(
    mut events: EventReader<RequestSaveItem>,
    mut store: ResMut<CatalogStore>,
    mut feedback: EventWriter<CatalogOperationFeedback>,
    mut failures: EventWriter<StoreFailureNotice>,
    mut modified: EventWriter<CatalogModified>,
) {
    for ev in events.read() {
        let result = store
            .document_mut()
            .and_then(|doc| save_item(doc, &ev.scope, ev.target.as_ref(), &ev.draft, now_seconds()));
        match result {
            Ok(id) => {
                info!("Saved item '{}' in {:?}.", id, ev.scope);
                if persist(&store, &mut feedback, &mut failures) {
                    let verb = if ev.target.is_some() { "updated" } else { "added" };
                    feedback.write(CatalogOperationFeedback {
                        message: format!("'{}' {}.", display_title(&ev.draft), verb),
                        is_error: false,
                    });
                }
                modified.write(CatalogModified { scope: Some(ev.scope.clone()) });
            }
            Err(e) => {
                warn!("Save item rejected: {}", e);
                feedback.write(CatalogOperationFeedback { message: e.to_string(), is_error: true });
            }
        }
    }
}

pub fn handle_delete_item_request(
    mut events: EventReader<RequestDeleteItem>,
    mut store: ResMut<CatalogStore>,
    mut feedback: EventWriter<CatalogOperationFeedback>,
    mut failures: EventWriter<StoreFailureNotice>,
    mut modified: EventWriter<CatalogModified>,
) {
    for ev in events.read() {
        let result = store
            .document_mut()
            .and_then(|doc| delete_item(doc, &ev.scope, &ev.target));
        match result {
            Ok(()) => {
                info!("Deleted item '{}' from {:?}.", ev.target.id, ev.scope);
                if persist(&store, &mut feedback, &mut failures) {
                    feedback.write(CatalogOperationFeedback {
                        message: "Item deleted.".to_string(),
                        is_error: false,
                    });
                }
                modified.write(CatalogModified { scope: Some(ev.scope.clone()) });
            }
            Err(e) => {
                warn!("Delete rejected: {}", e);
                feedback.write(CatalogOperationFeedback { message: e.to_string(), is_error: true });
            }
        }
    }
}

fn display_title(draft: &ItemDraft) -> &str {
    if draft.title.trim().is_empty() {
        "Untitled"
    } else {
        &draft.title
    }
}
