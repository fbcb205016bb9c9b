// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{config, App, Event, Message};
use crate::directory_scanner::ImageList;
use crate::domain::editing::EnhanceFactor;
use crate::error::Result;
use std::path::PathBuf;

impl App {
    /// Apply one message and report what changed.
    ///
    /// # Errors
    ///
    /// Folder scans, file selection, loading and saving propagate their
    /// errors. The application keeps its previous state when they fail.
    pub fn update(&mut self, message: Message) -> Result<Event> {
        match message {
            Message::SelectFolder(path) => self.handle_select_folder(path),
            Message::Refresh => self.handle_select_folder(self.directory.clone()),
            Message::ListFiles => Ok(self.files_listed()),
            Message::SelectFile(selector) => self.handle_select_file(&selector),
            Message::Grayscale => Ok(self.edited(|image| image.grayscale())),
            Message::Mirror => Ok(self.edited(|image| image.mirror())),
            Message::Blur => Ok(self.edited(|image| image.blur())),
            Message::BrightnessContrast {
                brightness,
                contrast,
            } => {
                let brightness =
                    brightness.map_or_else(|| self.config.editing.brightness(), EnhanceFactor::new);
                let contrast =
                    contrast.map_or_else(|| self.config.editing.contrast(), EnhanceFactor::new);
                Ok(self.edited(|image| image.adjust_brightness_contrast(brightness, contrast)))
            }
            Message::Undo => Ok(self.edited(|image| image.undo())),
            Message::Save => self.image.save().map(Event::Saved),
            Message::SavePresets {
                brightness,
                contrast,
            } => self.handle_save_presets(brightness, contrast),
            Message::Info => Ok(self.summary().map_or(Event::Unchanged, Event::ImageUpdated)),
        }
    }

    fn handle_select_folder(&mut self, path: PathBuf) -> Result<Event> {
        let files = ImageList::scan(&path, self.config.sort_order()).inspect_err(|err| {
            tracing::warn!(directory = %path.display(), error = %err, "folder scan failed");
        })?;

        tracing::debug!(directory = %path.display(), count = files.len(), "folder scanned");
        self.directory = path;
        self.files = files;
        Ok(self.files_listed())
    }

    fn handle_select_file(&mut self, selector: &str) -> Result<Event> {
        let file_name = self.files.resolve(selector)?;
        self.image.load(&self.directory, file_name)?;
        Ok(self.summary().map_or(Event::Unchanged, Event::ImageUpdated))
    }

    fn handle_save_presets(&mut self, brightness: f32, contrast: f32) -> Result<Event> {
        let mut updated = self.config.clone();
        updated.editing.brightness_factor = Some(brightness);
        updated.editing.contrast_factor = Some(contrast);

        config::save_with_override(&updated, self.settings_dir.clone()).inspect_err(|err| {
            tracing::warn!(error = %err, "saving presets failed");
        })?;

        self.config = updated;
        Ok(Event::PresetsSaved {
            brightness,
            contrast,
        })
    }

    fn files_listed(&self) -> Event {
        Event::FilesListed {
            directory: self.directory.clone(),
            files: self.files.file_names(),
        }
    }

    /// Runs an edit and turns its "did anything happen" flag into an event.
    fn edited(&mut self, edit: impl FnOnce(&mut crate::editor::ImageState) -> bool) -> Event {
        if edit(&mut self.image) {
            self.summary().map_or(Event::Unchanged, Event::ImageUpdated)
        } else {
            Event::Unchanged
        }
    }
}
