// src/ui/thumbnails.rs
use bevy::prelude::*;
use bevy_egui::egui;
use std::collections::HashMap;
use std::path::Path;

use crate::catalog::CatalogPaths;

const THUMBNAIL_EDGE: u32 = 96;

/// Card thumbnails keyed by the record's relative image path. `None` marks a
/// path that was missing or undecodable when last tried.
#[derive(Resource, Default)]
pub struct ThumbnailCache {
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl ThumbnailCache {
    pub fn get_or_load(
        &mut self,
        ctx: &egui::Context,
        paths: &CatalogPaths,
        relative: &str,
    ) -> Option<&egui::TextureHandle> {
        if relative.is_empty() {
            return None;
        }
        self.textures
            .entry(relative.to_string())
            .or_insert_with(|| {
                let image = decode_thumbnail(&paths.resolve(relative))?;
                Some(ctx.load_texture(relative, image, egui::TextureOptions::LINEAR))
            })
            .as_ref()
    }

    /// Forget failed lookups so files copied in since then get picked up.
    pub fn forget_missing(&mut self) {
        self.textures.retain(|_, texture| texture.is_some());
    }
}

fn decode_thumbnail(path: &Path) -> Option<egui::ColorImage> {
    if !path.is_file() {
        return None;
    }
    match image::open(path) {
        Ok(img) => {
            let rgba = img.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE).into_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
        }
        Err(e) => {
            warn!("Could not decode thumbnail '{}': {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn decodes_and_downscales_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.png");
        image::RgbaImage::from_pixel(300, 150, image::Rgba([200, 10, 10, 255]))
            .save(&path)
            .unwrap();

        let thumb = decode_thumbnail(&path).unwrap();
        assert_eq!(thumb.size, [96, 48]);
    }

    #[test]
    fn missing_or_broken_files_have_no_thumbnail() {
        let dir = tempdir().unwrap();
        assert!(decode_thumbnail(&dir.path().join("none.png")).is_none());

        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"not an image").unwrap();
        assert!(decode_thumbnail(&broken).is_none());
    }

    #[test]
    fn failed_lookups_are_forgotten() {
        let dir = tempdir().unwrap();
        let ctx = egui::Context::default();
        let paths = CatalogPaths::new(dir.path());
        let mut cache = ThumbnailCache::default();

        assert!(cache.get_or_load(&ctx, &paths, "assets/img/products/a.png").is_none());
        cache.forget_missing();

        std::fs::create_dir_all(dir.path().join("assets/img/products")).unwrap();
        image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]))
            .save(dir.path().join("assets/img/products/a.png"))
            .unwrap();
        assert!(cache.get_or_load(&ctx, &paths, "assets/img/products/a.png").is_some());
    }
}
