// Decode image files into egui color images

use crate::assets::types::AssetError;

use eframe::egui;
use std::path::Path;

/// Read and decode an image file.
///
/// The format is sniffed from the bytes, so a renamed JPEG still loads.
pub fn decode_asset(path: &Path) -> Result<egui::ColorImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_decode_png() {
        let dir = scratch_dir("decode-png");
        write_png(&dir, "logo.png", 3, 2);

        let image = decode_asset(&dir.join("logo.png")).unwrap();
        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.pixels[0], egui::Color32::from_rgb(231, 84, 128));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = scratch_dir("decode-missing");
        let err = decode_asset(&dir.join("help.png")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("help.png"));
    }

    #[test]
    fn test_garbage_file_is_decode_error() {
        let dir = scratch_dir("decode-garbage");
        std::fs::write(dir.join("mic.png"), b"definitely not a png").unwrap();
        let err = decode_asset(&dir.join("mic.png")).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
