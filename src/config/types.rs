use serde::Deserialize;
use std::path::PathBuf;

/// Window and asset settings. Every field is optional in the file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub resizable: bool,
    pub fullscreen: bool,
    pub zoom: f32,
    /// Directory holding logo.png and the icon images (None = working directory)
    pub asset_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1000.0,
            window_height: 600.0,
            resizable: false,
            fullscreen: false,
            zoom: 1.0,
            asset_dir: None,
        }
    }
}

impl Settings {
    pub fn asset_dir(&self) -> PathBuf {
        self.asset_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Zoom factor clamped to a usable range
    pub fn effective_zoom(&self) -> f32 {
        if self.zoom.is_finite() {
            self.zoom.clamp(0.5, 3.0)
        } else {
            1.0
        }
    }

    pub fn inner_size(&self) -> [f32; 2] {
        let default = Settings::default();
        let width = if self.window_width >= 320.0 {
            self.window_width
        } else {
            default.window_width
        };
        let height = if self.window_height >= 240.0 {
            self.window_height
        } else {
            default.window_height
        };
        [width, height]
    }
}
