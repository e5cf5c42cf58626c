//! Conversions between the codec's images and the `image` crate
//!
//! File formats are chosen by the `image` crate from the path extension.

use std::path::Path;
use vq_core::{RgbImage, VqError, VqResult};

/// Extensions accepted as training or test images
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// True if `path` has one of [`IMAGE_EXTENSIONS`], ignoring case
pub fn has_image_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

/// Convert any decoded image to 8-bit RGB, dropping alpha
pub fn from_dynamic(image: &image::DynamicImage) -> VqResult<RgbImage> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    RgbImage::from_raw(width as usize, height as usize, rgb.into_raw())
}

/// Convert to an `image` crate buffer
pub fn to_image_buffer(image: &RgbImage) -> VqResult<image::RgbImage> {
    image::RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.as_raw().to_vec(),
    )
    .ok_or(VqError::InvalidDimensions {
        width: image.width(),
        height: image.height(),
    })
}

/// Decode an image file
///
/// Files that exist but cannot be decoded yield `UndecodableImage`, so batch
/// callers can skip them.
pub fn load_image<P: AsRef<Path>>(path: P) -> VqResult<RgbImage> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => VqError::IoError(io),
        other => VqError::UndecodableImage(format!("{}: {other}", path.display())),
    })?;
    from_dynamic(&decoded)
}

/// Encode an image file, format chosen by extension
pub fn save_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> VqResult<()> {
    to_image_buffer(image)?
        .save(path.as_ref())
        .map_err(|e| match e {
            image::ImageError::IoError(io) => VqError::IoError(io),
            other => VqError::IoError(std::io::Error::other(other)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_filter() {
        assert!(has_image_extension("a/b/photo.JPG"));
        assert!(has_image_extension("x.bmp"));
        assert!(!has_image_extension("notes.txt"));
        assert!(!has_image_extension("no_extension"));
    }

    #[test]
    fn test_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        let image = RgbImage::from_fn(7, 3, |x, y| [x as u8 * 30, y as u8 * 60, 5]).unwrap();
        save_image(&image, &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), image);
    }

    #[test]
    fn test_garbage_is_undecodable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_image(&path),
            Err(VqError::UndecodableImage(_))
        ));
    }
}
