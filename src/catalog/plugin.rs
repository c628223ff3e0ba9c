// src/catalog/plugin.rs
use bevy::prelude::*;

use super::events::{
    CatalogModified, CatalogOperationFeedback, ImageImported, RequestAddCategory,
    RequestDeleteItem, RequestImportImage, RequestPickImage, RequestSaveItem,
    StoreFailureNotice,
};
use super::resources::{CatalogPaths, CatalogStore};
use super::systems;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogSystemSet {
    /// Blocking dialogs opened on behalf of the UI.
    UserInput,
    /// Mutate the document and persist it.
    ApplyChanges,
}

/// Data layer: owns the catalog document, its file and the image folders.
pub struct CatalogPlugin {
    pub paths: CatalogPaths,
}

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                CatalogSystemSet::UserInput,
                CatalogSystemSet::ApplyChanges.after(CatalogSystemSet::UserInput),
            ),
        );

        app.insert_resource(CatalogStore::new(self.paths.clone()));

        app.add_event::<RequestAddCategory>()
            .add_event::<RequestSaveItem>()
            .add_event::<RequestDeleteItem>()
            .add_event::<RequestPickImage>()
            .add_event::<RequestImportImage>()
            .add_event::<ImageImported>()
            .add_event::<CatalogModified>()
            .add_event::<StoreFailureNotice>()
            .add_event::<CatalogOperationFeedback>();

        app.add_systems(
            Startup,
            (
                systems::io::ensure_asset_directories,
                systems::io::load_catalog_startup,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            systems::io::handle_pick_image_request.in_set(CatalogSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::io::handle_import_image_request,
                systems::logic::handle_add_category_request,
                systems::logic::handle_save_item_request,
                systems::logic::handle_delete_item_request,
            )
                .chain()
                .in_set(CatalogSystemSet::ApplyChanges),
        );

        info!("CatalogPlugin initialized for '{}'.", self.paths.root.display());
    }
}
