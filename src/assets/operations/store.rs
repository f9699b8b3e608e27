// Texture cache with per-asset fallbacks

use crate::assets::operations::load::decode_asset;
use crate::assets::types::Asset;

use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Textures for every asset that loaded, `None` for those that did not.
///
/// Each file is read once; a failure is remembered so the screen that wanted
/// the image draws its fallback instead.
pub struct AssetStore {
    dir: PathBuf,
    textures: HashMap<Asset, Option<egui::TextureHandle>>,
}

impl AssetStore {
    pub fn load_all(ctx: &egui::Context, dir: &Path) -> Self {
        let mut textures = HashMap::new();
        for asset in Asset::ALL {
            let path = dir.join(asset.file_name());
            let texture = match decode_asset(&path) {
                Ok(image) => {
                    tracing::debug!("loaded {}", path.display());
                    Some(ctx.load_texture(asset.file_name(), image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    tracing::warn!("{}. Using fallback.", e);
                    None
                }
            };
            textures.insert(asset, texture);
        }

        Self {
            dir: dir.to_path_buf(),
            textures,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn get(&self, asset: Asset) -> Option<&egui::TextureHandle> {
        self.textures.get(&asset).and_then(Option::as_ref)
    }

    /// Help and about icons, only when both loaded.
    ///
    /// If either image is missing both buttons switch to their "?" and "i"
    /// glyphs, so the status area never mixes an image with text.
    pub fn status_icons(&self) -> Option<(&egui::TextureHandle, &egui::TextureHandle)> {
        Some((self.get(Asset::Help)?, self.get(Asset::About)?))
    }

    /// Key, mic and OTP card icons, only when all three loaded
    pub fn card_icons(&self) -> Option<[&egui::TextureHandle; 3]> {
        Some([
            self.get(Asset::Key)?,
            self.get(Asset::Mic)?,
            self.get(Asset::Otp)?,
        ])
    }

    pub fn missing(&self) -> Vec<Asset> {
        Asset::ALL
            .into_iter()
            .filter(|asset| self.get(*asset).is_none())
            .collect()
    }
}
