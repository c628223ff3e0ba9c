// src/catalog/error.rs

use std::path::PathBuf;
use thiserror::Error;

use super::definitions::Scope;

/// Why reading or writing the catalog file failed.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// The two failure kinds surfaced to the user with a blocking notification.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to load catalog '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
    #[error("Failed to save catalog '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
}

impl StoreError {
    pub fn title(&self) -> &'static str {
        match self {
            StoreError::Load { .. } => "Load failed",
            StoreError::Save { .. } => "Save failed",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("catalog root must be a JSON object")]
    NotAnObject,
    #[error("'{0}' must be a list")]
    NotAList(&'static str),
}

/// Rejected mutations. Nothing is changed or written when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Category '{0}' no longer exists")]
    CategoryNotFound(String),
    #[error("Item '{id}' not found in {scope:?}")]
    ItemNotFound { scope: Scope, id: String },
    #[error("Catalog failed to load; editing is disabled until it is fixed and reloaded")]
    ReadOnly,
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Selected path '{}' has no file name", .0.display())]
    NoFileName(PathBuf),
    #[error("Failed to copy '{}' into '{}': {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
