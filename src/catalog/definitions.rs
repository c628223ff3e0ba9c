// src/catalog/definitions.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_CATEGORY_ICON: &str = "fa-box";

/// The whole persisted catalog: store-wide settings, shop categories and the
/// portfolio gallery. Serialized wholesale on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Store-wide configuration consumed by the storefront. Never mutated here.
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    /// Top-level keys owned by the storefront (testimonials and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogDocument {
    /// Document written when no catalog file exists yet.
    pub fn with_default_settings() -> Self {
        let mut settings = Map::new();
        settings.insert("storeName".to_string(), Value::from("Candid Craft"));
        settings.insert("currency".to_string(), Value::from("₹"));
        settings.insert("whatsappPhone".to_string(), Value::from("919876543210"));
        Self {
            settings,
            categories: Vec::new(),
            portfolio: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Empty in-memory document used when loading failed.
    pub fn empty() -> Self {
        Self {
            settings: Map::new(),
            categories: Vec::new(),
            portfolio: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    pub fn store_name(&self) -> Option<&str> {
        self.settings.get("storeName").and_then(Value::as_str)
    }

    pub fn currency(&self) -> &str {
        self.settings
            .get("currency")
            .and_then(Value::as_str)
            .unwrap_or("₹")
    }

    /// Whether `scope` still refers to something present in the document.
    pub fn contains_scope(&self, scope: &Scope) -> bool {
        match scope {
            Scope::Category(id) => self.category(id).is_some(),
            Scope::Portfolio => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_icon() -> String {
    DEFAULT_CATEGORY_ICON.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-form; not validated as a number.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub whatsapp_code: String,
    /// Path relative to the catalog root, always with forward slashes.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    /// Fields the editor does not manage; written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which list the editor is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Store,
    Portfolio,
}

/// The currently displayed item sequence: one category's products, or the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Category(String),
    Portfolio,
}

impl Scope {
    pub fn mode(&self) -> EditorMode {
        match self {
            Scope::Category(_) => EditorMode::Store,
            Scope::Portfolio => EditorMode::Portfolio,
        }
    }
}

/// Stable reference to a record inside a scope. Resolved by `id`; `position`
/// only disambiguates legacy files that contain the same id twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTarget {
    pub id: String,
    pub position: usize,
}

/// Borrowed view over one record of the active scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogItem<'a> {
    Product(&'a Product),
    Portfolio(&'a PortfolioItem),
}

impl<'a> CatalogItem<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            CatalogItem::Product(p) => &p.id,
            CatalogItem::Portfolio(p) => &p.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match *self {
            CatalogItem::Product(p) => &p.name,
            CatalogItem::Portfolio(p) => &p.title,
        }
    }

    pub fn image(&self) -> &'a str {
        match *self {
            CatalogItem::Product(p) => &p.image,
            CatalogItem::Portfolio(p) => &p.image,
        }
    }
}

/// Field values collected by the item form. Fields not shown for the active
/// mode are ignored when the record is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    /// Product name or portfolio title.
    pub title: String,
    pub price: String,
    pub description: String,
    pub whatsapp_code: String,
    pub image: String,
}

impl ItemDraft {
    pub fn from_item(item: CatalogItem<'_>) -> Self {
        match item {
            CatalogItem::Product(p) => Self {
                title: p.name.clone(),
                price: p.price.clone(),
                description: p.description.clone(),
                whatsapp_code: p.whatsapp_code.clone(),
                image: p.image.clone(),
            },
            CatalogItem::Portfolio(p) => Self {
                title: p.title.clone(),
                image: p.image.clone(),
                ..Default::default()
            },
        }
    }
}

/// Lazily projects the records of `scope` in storage order, paired with their
/// position. Recomputed on every render; an unknown category yields nothing.
pub fn list_active_items<'a>(
    doc: &'a CatalogDocument,
    scope: &Scope,
) -> impl Iterator<Item = (usize, CatalogItem<'a>)> + 'a {
    let products: Option<&[Product]> = match scope {
        Scope::Category(id) => doc.category(id).map(|c| c.products.as_slice()),
        Scope::Portfolio => None,
    };
    let portfolio: &[PortfolioItem] = match scope {
        Scope::Portfolio => doc.portfolio.as_slice(),
        Scope::Category(_) => &[],
    };
    products
        .unwrap_or(&[])
        .iter()
        .map(CatalogItem::Product)
        .chain(portfolio.iter().map(CatalogItem::Portfolio))
        .enumerate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: String::new(),
            description: String::new(),
            whatsapp_code: String::new(),
            image: String::new(),
            featured: false,
            extra: Default::default(),
        }
    }

    fn sample() -> CatalogDocument {
        let mut doc = CatalogDocument::with_default_settings();
        doc.categories.push(Category {
            id: "candles".to_string(),
            name: "Candles".to_string(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
            products: vec![product("1", "Rose"), product("2", "Vanilla")],
            extra: Default::default(),
        });
        doc.portfolio.push(PortfolioItem {
            id: "9".to_string(),
            title: "Wedding".to_string(),
            image: "assets/img/portfolio/w.png".to_string(),
            extra: Default::default(),
        });
        doc
    }

    #[test]
    fn active_items_follow_scope() {
        let doc = sample();
        let names: Vec<_> = list_active_items(&doc, &Scope::Category("candles".into()))
            .map(|(i, item)| (i, item.title()))
            .collect();
        assert_eq!(names, vec![(0, "Rose"), (1, "Vanilla")]);

        let portfolio: Vec<_> = list_active_items(&doc, &Scope::Portfolio)
            .map(|(_, item)| item.id())
            .collect();
        assert_eq!(portfolio, vec!["9"]);
    }

    #[test]
    fn unknown_category_lists_nothing() {
        let doc = sample();
        assert_eq!(list_active_items(&doc, &Scope::Category("gone".into())).count(), 0);
        assert!(!doc.contains_scope(&Scope::Category("gone".into())));
    }

    #[test]
    fn product_serializes_with_storefront_keys() {
        let json = serde_json::to_value(product("1", "Rose")).unwrap();
        assert!(json.get("whatsappCode").is_some());
        assert_eq!(json["featured"], Value::Bool(false));
    }

    #[test]
    fn settings_passthrough_helpers() {
        let doc = sample();
        assert_eq!(doc.store_name(), Some("Candid Craft"));
        assert_eq!(doc.currency(), "₹");
        assert_eq!(CatalogDocument::empty().currency(), "₹");
    }
}
