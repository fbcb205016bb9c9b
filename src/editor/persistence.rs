// SPDX-License-Identifier: MPL-2.0
//! Writing the edited image next to its source.

use super::ImageState;
use crate::error::{Error, Result};
use image_rs::{DynamicImage, ImageFormat};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

impl ImageState {
    /// Path [`ImageState::save`] writes to, or `None` with no image loaded.
    #[must_use]
    pub fn destination(&self) -> Option<PathBuf> {
        self.source.as_ref().map(|source| source.modified_destination())
    }

    /// Save the current image to `<source folder>/Modified/<source file name>`.
    ///
    /// The `Modified` folder is created when missing and an existing file of
    /// the same name is overwritten. The encoder is picked from the file
    /// extension. History is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`] before any load, and [`Error::Write`]
    /// if the folder cannot be created or the file cannot be encoded or
    /// written.
    pub fn save(&self) -> Result<PathBuf> {
        let (Some(image), Some(source)) = (&self.current, &self.source) else {
            return Err(Error::NoImageLoaded);
        };

        let directory = source.modified_dir();
        fs::create_dir_all(&directory).map_err(|err| Error::write(&directory, err))?;

        let destination = source.modified_destination();
        write_image(image, &destination)?;

        tracing::info!(path = %destination.display(), "saved edited image");
        Ok(destination)
    }
}

fn write_image(image: &DynamicImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|err| Error::write(path, err))?;
    encodable_for(format, image)
        .save_with_format(path, format)
        .map_err(|err| Error::write(path, err))
}

/// Converts pixel layouts an encoder cannot take.
///
/// JPEG has no alpha channel and the GIF encoder only takes RGBA frames.
fn encodable_for(format: ImageFormat, image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match (format, image) {
        (ImageFormat::Jpeg, DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_)) => {
            Cow::Borrowed(image)
        }
        (ImageFormat::Jpeg, DynamicImage::ImageLumaA8(_)) => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        (ImageFormat::Jpeg, _) => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        (ImageFormat::Gif, DynamicImage::ImageRgba8(_)) => Cow::Borrowed(image),
        (ImageFormat::Gif, _) => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        _ => Cow::Borrowed(image),
    }
}
