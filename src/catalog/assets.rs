// src/catalog/assets.rs

use bevy::log::{info, warn};
use std::fs;
use std::path::Path;

use super::definitions::EditorMode;
use super::error::AssetError;
use super::resources::CatalogPaths;

/// Extensions offered by the image picker.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Copies `source` into the asset directory for `mode` unless a file with the
/// same name is already there, and returns the record path
/// `"<asset dir>/<file name>"` with forward slashes.
///
/// An existing file is never replaced, even when its content differs from the
/// upload; that case is only logged.
pub fn import_image(
    paths: &CatalogPaths,
    mode: EditorMode,
    source: &Path,
) -> Result<String, AssetError> {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AssetError::NoFileName(source.to_path_buf()))?;

    let target_dir = paths.image_dir(mode);
    let dest = target_dir.join(&file_name);
    if dest.exists() {
        if !same_content(source, &dest) {
            warn!(
                "'{}' already exists with different content; keeping the existing file.",
                dest.display()
            );
        } else {
            info!("'{}' already present; skipping copy.", dest.display());
        }
    } else {
        fs::create_dir_all(&target_dir)
            .and_then(|_| fs::copy(source, &dest))
            .map_err(|e| AssetError::Copy {
                from: source.to_path_buf(),
                to: dest.clone(),
                source: e,
            })?;
        info!("Copied image '{}' to '{}'.", source.display(), dest.display());
    }

    Ok(relative_image_path(mode, &file_name))
}

/// Record path for `file_name` inside the asset directory for `mode`.
pub fn relative_image_path(mode: EditorMode, file_name: &str) -> String {
    format!("{}/{}", CatalogPaths::relative_image_dir(mode), file_name).replace('\\', "/")
}

fn same_content(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::read(a), fs::read(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
