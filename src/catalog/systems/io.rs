// src/catalog/systems/io.rs

use bevy::prelude::*;
use std::path::PathBuf;

use crate::catalog::{
    assets::{has_image_extension, import_image, IMAGE_EXTENSIONS},
    events::{
        CatalogOperationFeedback, ImageImported, RequestImportImage, RequestPickImage,
        StoreFailureNotice,
    },
    resources::CatalogStore,
};

/// Writes the whole document. Returns false after reporting a SaveFailure.
pub fn persist(
    store: &CatalogStore,
    feedback: &mut EventWriter<CatalogOperationFeedback>,
    failures: &mut EventWriter<StoreFailureNotice>,
) -> bool {
    match store.save() {
        Ok(()) => true,
        Err(e) => {
            failures.write(StoreFailureNotice {
                title: e.title().to_string(),
                message: e.to_string(),
            });
            feedback.write(CatalogOperationFeedback { message: e.to_string(), is_error: true });
            false
        }
    }
}

/// Startup: create the two asset folders if they are missing.
pub fn ensure_asset_directories(
    store: Res<CatalogStore>,
    mut feedback: EventWriter<CatalogOperationFeedback>,
) {
    let paths = store.paths();
    match paths.ensure_asset_dirs() {
        Ok(()) => debug!("Asset directories ready under '{}'.", paths.root.display()),
        Err(e) => {
            error!("Failed to create asset directories under '{}': {}", paths.root.display(), e);
            feedback.write(CatalogOperationFeedback {
                message: format!("Could not create image folders: {}", e),
                is_error: true,
            });
        }
    }
}

/// Startup: read the catalog (writing the default one if absent).
pub fn load_catalog_startup(
    mut store: ResMut<CatalogStore>,
    mut feedback: EventWriter<CatalogOperationFeedback>,
    mut failures: EventWriter<StoreFailureNotice>,
) {
    match store.load() {
        Ok(report) => {
            if report.patched {
                info!(
                    "Catalog upgraded from {:?}; it will be rewritten on the next change.",
                    report.from
                );
            }
            feedback.write(CatalogOperationFeedback {
                message: format!(
                    "Loaded {} categories and {} portfolio items.",
                    store.document().categories.len(),
                    store.document().portfolio.len()
                ),
                is_error: false,
            });
        }
        Err(e) => {
            failures.write(StoreFailureNotice {
                title: e.title().to_string(),
                message: e.to_string(),
            });
            feedback.write(CatalogOperationFeedback { message: e.to_string(), is_error: true });
        }
    }
}

/// Opens the native picker (blocking, like every other action here).
pub fn handle_pick_image_request(
    mut events: EventReader<RequestPickImage>,
    mut import_writer: EventWriter<RequestImportImage>,
    mut feedback: EventWriter<CatalogOperationFeedback>,
) {
    for ev in events.read() {
        let picked: Option<PathBuf> = rfd::FileDialog::new()
            .set_title("Select image")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file();
        match picked {
            Some(path) => {
                info!("Image picked: '{}'.", path.display());
                import_writer.write(RequestImportImage { mode: ev.mode, path });
            }
            None => {
                let msg = "Image selection cancelled.".to_string();
                info!("{}", msg);
                feedback.write(CatalogOperationFeedback { message: msg, is_error: false });
            }
        }
    }
}

pub fn handle_import_image_request(
    mut events: EventReader<RequestImportImage>,
    store: Res<CatalogStore>,
    mut imported: EventWriter<ImageImported>,
    mut feedback: EventWriter<CatalogOperationFeedback>,
) {
    for ev in events.read() {
        if !has_image_extension(&ev.path) {
            feedback.write(CatalogOperationFeedback {
                message: format!("'{}' is not a supported image.", ev.path.display()),
                is_error: true,
            });
            continue;
        }
        match import_image(store.paths(), ev.mode, &ev.path) {
            Ok(relative_path) => {
                imported.write(ImageImported { relative_path });
            }
            Err(e) => {
                error!("{}", e);
                feedback.write(CatalogOperationFeedback { message: e.to_string(), is_error: true });
            }
        }
    }
}
