//! Image asset loading (chart figures and avatars)
//!
//! Assets are read from the asset directory by relative path. A failed load is
//! remembered so the file is not retried every frame; the UI shows fallback
//! content instead.

use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Read and decode an image file into an egui color image
pub fn decode_image(path: &Path) -> Result<egui::ColorImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}

pub struct AssetCache {
    root: PathBuf,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl AssetCache {
    pub fn new(root: PathBuf) -> Self {
        debug!(root = %root.display(), "Asset directory");
        Self {
            root,
            textures: HashMap::new(),
        }
    }

    /// Absolute (or root-relative) location of an asset
    pub fn resolve(&self, rel: &str) -> PathBuf {
        self.root.join(rel.trim_start_matches('/'))
    }

    /// Texture for `rel`, loading it on first use. `None` when the image is
    /// missing or unreadable.
    pub fn texture(&mut self, ctx: &egui::Context, rel: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(rel) {
            return cached.clone();
        }

        let path = self.resolve(rel);
        let texture = match decode_image(&path) {
            Ok(image) => {
                debug!(asset = rel, "Image loaded");
                Some(ctx.load_texture(rel, image, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                warn!(error = %e, asset = rel, "Image unavailable, showing fallback");
                None
            }
        };
        self.textures.insert(rel.to_string(), texture.clone());
        texture
    }

    /// Loaded texture without triggering a load
    pub fn cached(&self, rel: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(rel).and_then(Option::as_ref)
    }

    pub fn is_failed(&self, rel: &str) -> bool {
        matches!(self.textures.get(rel), Some(None))
    }
}
