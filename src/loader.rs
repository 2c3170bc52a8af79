//! Splash image loading.
//!
//! The source image is decoded once and stretched to the window size, so every
//! region crop afterwards is a plain slice of the same buffer.

use std::fs;

use image::RgbImage;
use image::imageops::FilterType;
use splash_common::ImageSource;
use tracing::debug;

use crate::error::{Result, SplashError};

/// Decode `source` and resize it to exactly `width` x `height`.
pub fn load_image(
    source: &ImageSource,
    width: u32,
    height: u32,
) -> Result<RgbImage> {
    let decoded = match source {
        ImageSource::Path(path) => {
            let bytes = fs::read(path).map_err(|source| SplashError::ImageRead { path: path.clone(), source })?;
            image::load_from_memory(&bytes)?
        }
        ImageSource::Bytes(bytes) => image::load_from_memory(bytes)?,
    };

    debug!(
        original_width = decoded.width(),
        original_height = decoded.height(),
        width,
        height,
        "splash image decoded"
    );

    Ok(decoded.resize_exact(width, height, FilterType::Triangle).into_rgb8())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use image::{ImageFormat, Rgb};

    use super::*;

    fn png_bytes(
        width: u32,
        height: u32,
    ) -> Vec<u8> {
        let image = RgbImage::from_pixel(width, height, Rgb([200, 100, 50]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_bytes_resized_to_window() {
        let image = load_image(&ImageSource::Bytes(png_bytes(32, 16)), 90, 45).unwrap();
        assert_eq!(image.dimensions(), (90, 45));
        assert_eq!(image.get_pixel(45, 20), &Rgb([200, 100, 50]));
    }

    #[test]
    fn test_path_source() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&png_bytes(10, 10)).unwrap();
        let image = load_image(&ImageSource::Path(file.path().to_path_buf()), 30, 20).unwrap();
        assert_eq!(image.dimensions(), (30, 20));
    }

    #[test]
    fn test_missing_file() {
        let err = load_image(&ImageSource::from("definitely/not/here.png"), 10, 10).unwrap_err();
        assert!(matches!(err, SplashError::ImageRead { .. }), "got {err:?}");
    }

    #[test]
    fn test_garbage_bytes() {
        let err = load_image(&ImageSource::Bytes(b"not an image".to_vec()), 10, 10).unwrap_err();
        assert!(matches!(err, SplashError::ImageDecode(_)), "got {err:?}");
    }
}
