// SPDX-License-Identifier: MPL-2.0
//! Image decoding from disk and the display handle produced by rendering.

use crate::domain::media::ColorMode;
use crate::error::{Error, Result};
use image_rs::codecs::png::PngEncoder;
use image_rs::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Display-ready snapshot of an image: dimensions plus RGBA8 pixels.
///
/// Built fresh by every render; the pixels are shared through an `Arc` so
/// cloning the handle is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba_bytes: Arc::new(pixels),
        }
    }

    /// Returns a reference to the RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Encodes the pixels as a PNG stream, for front ends that display
    /// encoded bytes rather than raw buffers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the encoder rejects the buffer.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut encoded = Vec::new();
        PngEncoder::new(&mut encoded)
            .write_image(
                &self.rgba_bytes,
                self.width,
                self.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|err| Error::Io(format!("Failed to encode preview: {err}")))?;
        Ok(encoded)
    }
}

/// Decodes the image at `path`.
///
/// The format is guessed from the file content, not the extension.
///
/// # Errors
///
/// Returns [`Error::Load`] if the file cannot be read or is not a decodable
/// raster.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let img_bytes = fs::read(path).map_err(|err| Error::load(path, err))?;
    image_rs::load_from_memory(&img_bytes).map_err(|err| Error::load(path, err))
}

/// Classifies the pixel layout of a decoded image.
#[must_use]
pub fn color_mode(image: &DynamicImage) -> ColorMode {
    match image {
        DynamicImage::ImageLuma8(_) => ColorMode::Luma,
        DynamicImage::ImageLumaA8(_) => ColorMode::LumaAlpha,
        DynamicImage::ImageRgb8(_) => ColorMode::Rgb,
        DynamicImage::ImageRgba8(_) => ColorMode::Rgba,
        _ => ColorMode::Other,
    }
}

/// Converts a decoded image into a display handle.
#[must_use]
pub fn to_image_data(image: &DynamicImage) -> ImageData {
    let (width, height) = image.dimensions();
    ImageData::from_rgba(width, height, image.to_rgba8().into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn decode_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let decoded = decode_image(&image_path).expect("png should load successfully");
        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(color_mode(&decoded), ColorMode::Rgba);
    }

    #[test]
    fn decode_ignores_misleading_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("really_png.jpg");
        let png_path = temp_dir.path().join("source.png");
        RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]))
            .save(&png_path)
            .expect("write png");
        fs::copy(&png_path, &image_path).expect("copy png");

        let decoded = decode_image(&image_path).expect("content sniffing should succeed");
        assert_eq!(color_mode(&decoded), ColorMode::Rgb);
    }

    #[test]
    fn decode_missing_image_returns_load_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match decode_image(&missing_path) {
            Err(Error::Load { path, .. }) => assert_eq!(path, missing_path),
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn decode_invalid_png_bytes_returns_load_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match decode_image(&bad_path) {
            Err(Error::Load { reason, .. }) => assert!(!reason.is_empty()),
            other => panic!("expected Load error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn image_data_expands_grayscale_to_rgba() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 1, Luma([7])));
        let data = to_image_data(&gray);

        assert_eq!((data.width, data.height), (2, 1));
        assert_eq!(data.rgba_bytes(), &[7, 7, 7, 255, 7, 7, 7, 255]);
    }

    #[test]
    fn encode_png_produces_decodable_stream() {
        let data = ImageData::from_rgba(2, 2, vec![10; 16]);
        let encoded = data.encode_png().expect("encode");

        let decoded = image_rs::load_from_memory(&encoded).expect("decode");
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.to_rgba8().into_vec(), vec![10; 16]);
    }
}
