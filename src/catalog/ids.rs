// src/catalog/ids.rs

use std::collections::HashSet;

use super::definitions::{CatalogDocument, Scope};

/// Lowercases `name` and replaces spaces with hyphens. Nothing else is touched.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Slug for a new category, suffixed with `-2`, `-3`, ... when it would
/// collide with an existing category id.
pub fn unique_category_id(doc: &CatalogDocument, name: &str) -> String {
    let base = slugify(name);
    if doc.category(&base).is_none() {
        return base;
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| doc.category(candidate).is_none())
        .unwrap_or(base)
}

/// Current Unix time in seconds.
pub fn now_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Timestamp id for a new record in `scope`. Products are checked against
/// every category so an id never appears twice in the storefront; when the
/// second is taken, the next free second is used.
pub fn new_item_id(doc: &CatalogDocument, scope: &Scope, now: i64) -> String {
    let taken: HashSet<&str> = match scope {
        Scope::Category(_) => doc
            .categories
            .iter()
            .flat_map(|c| c.products.iter().map(|p| p.id.as_str()))
            .collect(),
        Scope::Portfolio => doc.portfolio.iter().map(|p| p.id.as_str()).collect(),
    };
    let mut candidate = now;
    while taken.contains(candidate.to_string().as_str()) {
        candidate += 1;
    }
    candidate.to_string()
}
