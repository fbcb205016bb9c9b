// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Name of the sibling folder that receives edited images.
pub const MODIFIED_DIR_NAME: &str = "Modified";

/// Pixel layout of a decoded raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Single-channel luminance.
    Luma,
    /// Luminance with alpha.
    LumaAlpha,
    /// Three-channel color.
    Rgb,
    /// Three-channel color with alpha.
    Rgba,
    /// Anything else the decoder may produce (16-bit, float).
    Other,
}

impl ColorMode {
    /// Short label used in summaries and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Luma => "L",
            ColorMode::LumaAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Other => "other",
        }
    }
}

/// Where the active image was loaded from: a folder and a file name inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    folder: PathBuf,
    file_name: OsString,
}

impl SourceRef {
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>, file_name: impl Into<OsString>) -> Self {
        Self {
            folder: folder.into(),
            file_name: file_name.into(),
        }
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[must_use]
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Full path of the source file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }

    /// Folder that receives the edited copy (`<folder>/Modified`).
    #[must_use]
    pub fn modified_dir(&self) -> PathBuf {
        self.folder.join(MODIFIED_DIR_NAME)
    }

    /// Path the edited copy is written to (`<folder>/Modified/<file_name>`).
    #[must_use]
    pub fn modified_destination(&self) -> PathBuf {
        self.modified_dir().join(&self.file_name)
    }
}
