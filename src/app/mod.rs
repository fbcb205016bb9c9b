// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the folder listing and
//! the image being edited.
//!
//! The `App` struct owns the working folder as an explicit field, the listing
//! scanned from it, the [`ImageState`] and the brightness/contrast presets.
//! Front ends drive it with [`Message`]s and render the returned [`Event`]s;
//! nothing here is global.

pub mod config;
mod message;
pub mod paths;
pub mod shell;
mod update;

pub use message::{Flags, Message};

use crate::directory_scanner::ImageList;
use crate::domain::media::ColorMode;
use crate::editor::ImageState;
use crate::media::ImageData;
use config::Config;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of one [`App::update`] call, for the front end to display.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The listing of the working folder.
    FilesListed {
        directory: PathBuf,
        files: Vec<String>,
    },
    /// The current image changed (or was asked for), with a fresh preview.
    ImageUpdated(ImageSummary),
    /// Nothing to do, typically because no image is loaded.
    Unchanged,
    /// The edited image was written to this path.
    Saved(PathBuf),
    /// New presets were stored in the settings file.
    PresetsSaved { brightness: f32, contrast: f32 },
}

/// What a front end needs to redraw the current image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSummary {
    pub file_name: String,
    pub color_mode: ColorMode,
    pub history_len: usize,
    pub preview: ImageData,
}

impl ImageSummary {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.preview.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.preview.height
    }

    /// Number of edits [`Message::Undo`] can still step back through.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history_len.saturating_sub(1)
    }
}

impl fmt::Display for ImageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{} {} (undo: {})",
            self.file_name,
            self.width(),
            self.height(),
            self.color_mode.label(),
            self.undo_depth()
        )
    }
}

/// Root application state shared by every front end.
pub struct App {
    config: Config,
    /// Folder that `SelectFile` loads from.
    directory: PathBuf,
    files: ImageList,
    image: ImageState,
    /// Where `SavePresets` writes; `None` uses the resolved config directory.
    settings_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.directory)
            .field("files", &self.files.len())
            .field("has_image", &self.image.is_loaded())
            .finish()
    }
}

impl App {
    /// Creates the application with `directory` as working folder.
    ///
    /// An unreadable folder leaves the listing empty; the error is logged and
    /// the user can pick another folder.
    pub fn new(config: Config, directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        let files = ImageList::scan(&directory, config.sort_order()).unwrap_or_else(|err| {
            tracing::warn!(directory = %directory.display(), error = %err, "initial scan failed");
            ImageList::empty(&directory)
        });

        Self {
            config,
            directory,
            files,
            image: ImageState::new(),
            settings_dir: None,
        }
    }

    /// Writes presets into `settings_dir` instead of the resolved config
    /// directory.
    #[must_use]
    pub fn with_settings_dir(mut self, settings_dir: impl Into<PathBuf>) -> Self {
        self.settings_dir = Some(settings_dir.into());
        self
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn files(&self) -> &ImageList {
        &self.files
    }

    #[must_use]
    pub fn image(&self) -> &ImageState {
        &self.image
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Summary of the current image, `None` when nothing is loaded.
    #[must_use]
    pub fn summary(&self) -> Option<ImageSummary> {
        let preview = self.image.render()?;
        let color_mode = self.image.color_mode()?;
        let file_name = self
            .image
            .source()
            .map(|source| source.file_name().to_string_lossy().into_owned())
            .unwrap_or_default();

        Some(ImageSummary {
            file_name,
            color_mode,
            history_len: self.image.history_len(),
            preview,
        })
    }
}
