// SPDX-License-Identifier: MPL-2.0
//! Editing state for a single in-memory image.
//!
//! [`ImageState`] owns the decoded image, where it came from, and a linear
//! undo history. Every edit snapshots the image it replaces before mutating,
//! and the source file is never touched: [`ImageState::save`] writes to a
//! `Modified` folder next to it.
//!
//! The state is either *empty* (nothing loaded yet) or *loaded*. A successful
//! [`ImageState::load`] is the only way in, and there is no way back.

mod history;
mod persistence;

pub use history::History;

use crate::domain::editing::EnhanceFactor;
use crate::domain::media::{ColorMode, SourceRef};
use crate::error::Result;
use crate::media::{self, image_transform, ImageData};
use image_rs::DynamicImage;
use std::ffi::OsStr;
use std::path::Path;

/// One edit that can be applied to the current image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transformation {
    /// Single-channel luminance conversion.
    Grayscale,
    /// Left-right flip.
    Mirror,
    /// Gaussian blur on the RGB-coerced image.
    Blur { sigma: f32 },
    /// Brightness pass, then contrast pass over the brightened image.
    BrightnessContrast {
        brightness: EnhanceFactor,
        contrast: EnhanceFactor,
    },
}

impl Transformation {
    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::Grayscale => "grayscale",
            Transformation::Mirror => "mirror",
            Transformation::Blur { .. } => "blur",
            Transformation::BrightnessContrast { .. } => "brightness-contrast",
        }
    }

    /// Produces the edited image, leaving `image` untouched.
    #[must_use]
    pub fn apply(&self, image: &DynamicImage) -> DynamicImage {
        match *self {
            Transformation::Grayscale => image_transform::to_grayscale(image),
            Transformation::Mirror => image_transform::flip_horizontal(image),
            Transformation::Blur { sigma } => image_transform::gaussian_blur(image, sigma),
            Transformation::BrightnessContrast {
                brightness,
                contrast,
            } => image_transform::adjust_brightness_contrast(image, brightness, contrast),
        }
    }
}

/// The active image, its origin, and its undo history.
#[derive(Debug, Clone, Default)]
pub struct ImageState {
    current: Option<DynamicImage>,
    source: Option<SourceRef>,
    history: History,
}

impl ImageState {
    /// Creates an empty state with no image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `folder/file_name`, replacing any image and discarding its history.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Load`] if the file is missing,
    /// unreadable, or not a decodable image. The state is unchanged in that
    /// case.
    pub fn load(&mut self, folder: &Path, file_name: impl AsRef<OsStr>) -> Result<()> {
        let source = SourceRef::new(folder, file_name.as_ref());
        let image = media::decode_image(source.path()).inspect_err(|err| {
            tracing::warn!(error = %err, "image load failed");
        })?;

        tracing::debug!(
            path = %source.path().display(),
            width = image.width(),
            height = image.height(),
            "image loaded"
        );

        self.history.reset(image.clone());
        self.current = Some(image);
        self.source = Some(source);
        Ok(())
    }

    /// Convert to single-channel luminance. Returns `false` with no image.
    pub fn grayscale(&mut self) -> bool {
        self.apply(Transformation::Grayscale)
    }

    /// Flip left-right. Returns `false` with no image.
    pub fn mirror(&mut self) -> bool {
        self.apply(Transformation::Mirror)
    }

    /// Gaussian blur with radius [`image_transform::BLUR_RADIUS`]. Returns
    /// `false` with no image.
    pub fn blur(&mut self) -> bool {
        self.apply(Transformation::Blur {
            sigma: image_transform::BLUR_RADIUS,
        })
    }

    /// Brightness then contrast. Factors of `1.0` keep pixels as they are
    /// but still record a history entry. Returns `false` with no image.
    pub fn adjust_brightness_contrast(
        &mut self,
        brightness: EnhanceFactor,
        contrast: EnhanceFactor,
    ) -> bool {
        self.apply(Transformation::BrightnessContrast {
            brightness,
            contrast,
        })
    }

    /// Snapshot the current image, then replace it with the edited one.
    ///
    /// Silent no-op returning `false` when nothing is loaded.
    pub fn apply(&mut self, transformation: Transformation) -> bool {
        let Some(current) = self.current.as_mut() else {
            tracing::debug!(edit = transformation.name(), "no image loaded, edit ignored");
            return false;
        };

        let edited = transformation.apply(current);
        self.history.push(std::mem::replace(current, edited));
        tracing::debug!(
            edit = transformation.name(),
            history = self.history.len(),
            "edit applied"
        );
        true
    }

    /// Step back through the history.
    ///
    /// With more than one snapshot, drops the newest one and makes a copy of
    /// the snapshot left on top the current image. Returns `false` and
    /// changes nothing otherwise.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.current = Some(snapshot.clone());
                true
            }
            None => false,
        }
    }

    /// Fresh display handle for the current image, `None` when empty.
    #[must_use]
    pub fn render(&self) -> Option<ImageData> {
        self.current.as_ref().map(media::to_image_data)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&DynamicImage> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn source(&self) -> Option<&SourceRef> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn color_mode(&self) -> Option<ColorMode> {
        self.current.as_ref().map(media::color_mode)
    }
}
