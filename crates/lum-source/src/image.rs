use std::path::Path;

use anyhow::{Context, Result};
use lum_core::frame::PixelFrame;

/// Load and decode an image from disk.
///
/// Any format the linked decoder supports (PNG, JPEG, BMP, GIF) is
/// accepted; pixels are converted to RGBA8.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded. The error
/// carries the path so the caller can report it verbatim.
///
/// # Example
/// ```no_run
/// use lum_source::image::load_image;
/// let frame = load_image(std::path::Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<PixelFrame> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("Image chargée : {} ({width}×{height})", path.display());

    let frame = PixelFrame::from_raw(rgba.into_raw(), width, height)?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_errors_with_path() {
        let err = load_image(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/photo.png"));
    }

    #[test]
    fn png_round_trips_dimensions_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]));
        img.save(&path).unwrap();

        let frame = load_image(&path).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.pixel(2, 1), (255, 0, 0, 255));
    }

    #[test]
    fn non_image_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"plain text").unwrap();
        assert!(load_image(&path).is_err());
    }
}
