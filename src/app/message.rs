// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::path::PathBuf;

/// Messages consumed by `App::update`, one per user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Make `path` the working folder and list its images.
    SelectFolder(PathBuf),
    /// Rescan the working folder.
    Refresh,
    /// Report the current listing without rescanning.
    ListFiles,
    /// Load a listed file, by 1-based index or exact name.
    SelectFile(String),
    Grayscale,
    Mirror,
    Blur,
    /// Factors left as `None` fall back to the configured presets.
    BrightnessContrast {
        brightness: Option<f32>,
        contrast: Option<f32>,
    },
    Undo,
    Save,
    /// Store new brightness/contrast presets in `settings.toml`.
    SavePresets { brightness: f32, contrast: f32 },
    /// Describe the current image without changing it.
    Info,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional working folder to open on startup.
    pub directory: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `RETOUCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
