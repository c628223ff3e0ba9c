// src/catalog/schema.rs
//! Schema evolution for the catalog file. Kept free of I/O so every upgrade
//! step can be checked against raw JSON directly.

use bevy::log::debug;
use serde_json::{Map, Value};

use super::definitions::CatalogDocument;
use super::error::{PersistError, SchemaError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaVersion {
    /// Written before the portfolio gallery existed.
    Legacy,
    V1,
}

impl SchemaVersion {
    pub const CURRENT: SchemaVersion = SchemaVersion::V1;
}

/// Result of upgrading a raw document.
#[derive(Debug, Clone, PartialEq)]
pub struct Migrated {
    pub document: CatalogDocument,
    pub from: SchemaVersion,
    /// True when anything in the raw document had to be filled in or coerced.
    pub patched: bool,
}

pub fn detect_version(raw: &Value) -> SchemaVersion {
    match raw.as_object() {
        Some(obj) if obj.contains_key("portfolio") => SchemaVersion::V1,
        _ => SchemaVersion::Legacy,
    }
}

/// Upgrades `raw` to the current schema and deserializes it.
pub fn migrate(raw: Value) -> Result<Migrated, PersistError> {
    let from = detect_version(&raw);
    let Value::Object(mut root) = raw else {
        return Err(SchemaError::NotAnObject.into());
    };

    let mut patched = false;
    if from < SchemaVersion::V1 {
        root.insert("portfolio".to_string(), Value::Array(Vec::new()));
        patched = true;
    }
    patched |= ensure_key(&mut root, "settings", || Value::Object(Map::new()));
    patched |= ensure_key(&mut root, "categories", || Value::Array(Vec::new()));

    let categories = list_mut(&mut root, "categories")?;
    for category in categories.iter_mut() {
        patched |= coerce_scalar(category, "id");
        patched |= clear_nulls(category, CATEGORY_TEXT_FIELDS);
        patched |= replace_null(category, "products", || Value::Array(Vec::new()));
        if let Some(Value::Array(products)) = category.get_mut("products") {
            for product in products.iter_mut() {
                patched |= coerce_scalar(product, "id");
                patched |= coerce_scalar(product, "price");
                patched |= clear_nulls(product, PRODUCT_TEXT_FIELDS);
                patched |= replace_null(product, "featured", || Value::Bool(false));
            }
        }
    }
    for item in list_mut(&mut root, "portfolio")?.iter_mut() {
        patched |= coerce_scalar(item, "id");
        patched |= clear_nulls(item, PORTFOLIO_TEXT_FIELDS);
    }

    let document: CatalogDocument = serde_json::from_value(Value::Object(root))?;
    debug!("Catalog migrated from {:?} (patched: {})", from, patched);
    Ok(Migrated {
        document,
        from,
        patched,
    })
}

fn ensure_key(root: &mut Map<String, Value>, key: &str, default: impl FnOnce() -> Value) -> bool {
    if root.contains_key(key) {
        return false;
    }
    root.insert(key.to_string(), default());
    true
}

fn list_mut<'a>(
    root: &'a mut Map<String, Value>,
    key: &'static str,
) -> Result<&'a mut Vec<Value>, SchemaError> {
    match root.get_mut(key) {
        Some(Value::Array(list)) => Ok(list),
        _ => Err(SchemaError::NotAList(key)),
    }
}

const CATEGORY_TEXT_FIELDS: &[&str] = &["name", "icon"];
const PRODUCT_TEXT_FIELDS: &[&str] = &["name", "price", "description", "whatsappCode", "image"];
const PORTFOLIO_TEXT_FIELDS: &[&str] = &["title", "image"];

fn replace_null(record: &mut Value, key: &str, fallback: impl FnOnce() -> Value) -> bool {
    match record.get_mut(key) {
        Some(slot) if slot.is_null() => {
            *slot = fallback();
            true
        }
        _ => false,
    }
}

/// `null` in a text field reads as an empty string.
fn clear_nulls(record: &mut Value, keys: &[&str]) -> bool {
    keys.iter().fold(false, |patched, key| {
        replace_null(record, key, || Value::String(String::new())) | patched
    })
}

/// Hand-edited files sometimes carry numbers where strings are expected.
fn coerce_scalar(record: &mut Value, key: &str) -> bool {
    let Some(slot) = record.get_mut(key) else {
        return false;
    };
    let Value::Number(n) = slot else {
        return false;
    };
    let text = n.to_string();
    *slot = Value::String(text);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_document_gains_empty_portfolio() {
        let raw = json!({
            "settings": {"storeName": "Shop"},
            "categories": [{"id": "a", "name": "A", "icon": "fa-box", "products": []}]
        });
        assert_eq!(detect_version(&raw), SchemaVersion::Legacy);

        let migrated = migrate(raw).unwrap();
        assert_eq!(migrated.from, SchemaVersion::Legacy);
        assert!(migrated.patched);
        assert!(migrated.document.portfolio.is_empty());
        assert_eq!(migrated.document.categories.len(), 1);
        assert_eq!(migrated.document.categories[0].name, "A");
    }

    #[test]
    fn current_document_is_untouched() {
        let raw = json!({
            "settings": {"currency": "$"},
            "categories": [],
            "portfolio": [{"id": "1", "title": "T", "image": "assets/img/portfolio/t.png"}]
        });
        let migrated = migrate(raw).unwrap();
        assert_eq!(migrated.from, SchemaVersion::CURRENT);
        assert!(!migrated.patched);
        assert_eq!(migrated.document.portfolio[0].title, "T");
    }

    #[test]
    fn numeric_ids_and_prices_become_strings() {
        let raw = json!({
            "settings": {},
            "categories": [{"id": "c", "name": "C", "products": [
                {"id": 1700000000, "name": "Candle", "price": 499}
            ]}],
            "portfolio": []
        });
        let migrated = migrate(raw).unwrap();
        let product = &migrated.document.categories[0].products[0];
        assert_eq!(product.id, "1700000000");
        assert_eq!(product.price, "499");
        assert!(!product.featured);
        assert_eq!(migrated.document.categories[0].icon, "fa-box");
        assert!(migrated.patched);
    }

    #[test]
    fn null_fields_read_as_empty() {
        let raw = json!({
            "settings": {},
            "categories": [{"id": "c", "name": null, "icon": null, "products": [
                {"id": "1", "name": "Candle", "price": null, "description": null,
                 "whatsappCode": null, "image": null, "featured": null}
            ]}, {"id": "d", "name": "D", "products": null}],
            "portfolio": [{"id": "2", "title": null, "image": null}]
        });
        let migrated = migrate(raw).unwrap();
        assert!(migrated.patched);

        let category = &migrated.document.categories[0];
        assert_eq!(category.name, "");
        assert_eq!(category.icon, "");
        let product = &category.products[0];
        assert_eq!(product.name, "Candle");
        assert_eq!(product.price, "");
        assert_eq!(product.description, "");
        assert_eq!(product.whatsapp_code, "");
        assert_eq!(product.image, "");
        assert!(!product.featured);
        assert!(migrated.document.categories[1].products.is_empty());

        let item = &migrated.document.portfolio[0];
        assert_eq!(item.title, "");
        assert_eq!(item.image, "");
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = migrate(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, PersistError::Schema(SchemaError::NotAnObject)));
    }

    #[test]
    fn categories_must_be_a_list() {
        let err = migrate(json!({"categories": {}, "portfolio": []})).unwrap_err();
        assert!(matches!(
            err,
            PersistError::Schema(SchemaError::NotAList("categories"))
        ));
    }

    #[test]
    fn settings_key_order_survives() {
        let raw = json!({
            "settings": {"zeta": 1, "alpha": 2},
            "categories": [],
            "portfolio": []
        });
        let migrated = migrate(raw).unwrap();
        let keys: Vec<_> = migrated.document.settings.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
