// src/catalog/resources.rs
use bevy::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::definitions::{CatalogDocument, EditorMode};
use super::error::{CatalogError, PersistError, StoreError};
use super::schema::{self, Migrated, SchemaVersion};

pub const CATALOG_FILE: &str = "products.json";
pub const PRODUCT_IMAGE_DIR: &str = "assets/img/products";
pub const PORTFOLIO_IMAGE_DIR: &str = "assets/img/portfolio";

/// Fixed layout of the catalog below its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub root: PathBuf,
}

impl CatalogPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn document(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    /// Asset directory as stored in records (forward slashes, relative to root).
    pub fn relative_image_dir(mode: EditorMode) -> &'static str {
        match mode {
            EditorMode::Store => PRODUCT_IMAGE_DIR,
            EditorMode::Portfolio => PORTFOLIO_IMAGE_DIR,
        }
    }

    pub fn image_dir(&self, mode: EditorMode) -> PathBuf {
        self.root.join(Self::relative_image_dir(mode))
    }

    /// Resolves a record's relative image path against the root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// Creates both asset directories if absent.
    pub fn ensure_asset_dirs(&self) -> std::io::Result<()> {
        for mode in [EditorMode::Store, EditorMode::Portfolio] {
            fs::create_dir_all(self.image_dir(mode))?;
        }
        Ok(())
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

/// What `CatalogStore::load` found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub from: SchemaVersion,
    /// The document had to be upgraded; the next save rewrites it.
    pub patched: bool,
}

/// Owns the in-memory catalog for the session and its backing file.
#[derive(Resource, Debug)]
pub struct CatalogStore {
    paths: CatalogPaths,
    document: CatalogDocument,
    /// Set when the last load failed; saving would clobber the unreadable file.
    read_only: bool,
    loaded_version: Option<SchemaVersion>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(CatalogPaths::default())
    }
}

impl CatalogStore {
    pub fn new(paths: CatalogPaths) -> Self {
        Self {
            paths,
            document: CatalogDocument::empty(),
            read_only: false,
            loaded_version: None,
        }
    }

    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    pub fn document(&self) -> &CatalogDocument {
        &self.document
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn loaded_version(&self) -> Option<SchemaVersion> {
        self.loaded_version
    }

    /// Mutable access for edits. Refused after a failed load.
    pub fn document_mut(&mut self) -> Result<&mut CatalogDocument, CatalogError> {
        if self.read_only {
            return Err(CatalogError::ReadOnly);
        }
        Ok(&mut self.document)
    }

    /// Reads the catalog, writing the default document first when the file
    /// does not exist. On failure the in-memory document is left empty.
    pub fn load(&mut self) -> Result<LoadReport, StoreError> {
        let path = self.paths.document();
        match read_document(&path) {
            Ok(migrated) => {
                info!(
                    "Loaded catalog '{}' (schema {:?}, {} categories, {} portfolio items).",
                    path.display(),
                    migrated.from,
                    migrated.document.categories.len(),
                    migrated.document.portfolio.len()
                );
                let report = LoadReport {
                    from: migrated.from,
                    patched: migrated.patched,
                };
                self.document = migrated.document;
                self.loaded_version = Some(report.from);
                self.read_only = false;
                Ok(report)
            }
            Err(source) => {
                error!("Failed to load catalog '{}': {}", path.display(), source);
                self.document = CatalogDocument::empty();
                self.loaded_version = None;
                self.read_only = true;
                Err(StoreError::Load { path, source })
            }
        }
    }

    /// Overwrites the backing file with the full in-memory document.
    /// Not atomic: a crash mid-write can leave a truncated file.
    pub fn save(&self) -> Result<(), StoreError> {
        let path = self.paths.document();
        if self.read_only {
            warn!("Refusing to save '{}': catalog failed to load.", path.display());
            return Ok(());
        }
        write_document(&path, &self.document).map_err(|source| {
            error!("Failed to save catalog '{}': {}", path.display(), source);
            StoreError::Save { path: path.clone(), source }
        })?;
        info!("Auto-saved changes to '{}'.", path.display());
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<Migrated, PersistError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No catalog at '{}'. Writing default document.", path.display());
            write_document(path, &CatalogDocument::with_default_settings())?;
            fs::read_to_string(path)?
        }
        Err(e) => return Err(e.into()),
    };
    let raw: serde_json::Value = serde_json::from_str(&text)?;
    schema::migrate(raw)
}

fn write_document(path: &Path, document: &CatalogDocument) -> Result<(), PersistError> {
    let bytes = to_pretty_json(document)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Pretty JSON with four-space indentation, matching files edited by hand.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
