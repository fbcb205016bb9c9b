// SPDX-License-Identifier: MPL-2.0
//! User settings stored in `settings.toml`.
//!
//! Two sections are recognized:
//! - `[general]` - startup folder and listing order
//! - `[editing]` - brightness/contrast presets used when no factor is given
//!
//! Every field is optional; anything missing takes its default. Where the
//! file lives is decided by [`paths`](crate::app::paths), and the
//! `*_to_path` / `*_from_path` functions bypass that lookup entirely.
//!
//! ```no_run
//! use retouch::app::config;
//!
//! let (mut settings, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! settings.editing.brightness_factor = Some(1.3);
//! config::save_with_override(&settings, None).expect("settings should be writable");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::editing::EnhanceFactor;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Order in which the files of a folder are listed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// `[general]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Folder opened at startup when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_directory: Option<PathBuf>,

    /// Image file sorting order in a folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Editing presets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditingConfig {
    /// Brightness factor used when the action is invoked without one.
    #[serde(
        default = "default_brightness_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub brightness_factor: Option<f32>,

    /// Contrast factor used when the action is invoked without one.
    #[serde(
        default = "default_contrast_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub contrast_factor: Option<f32>,
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            brightness_factor: default_brightness_factor(),
            contrast_factor: default_contrast_factor(),
        }
    }
}

impl EditingConfig {
    /// Brightness preset, validated.
    pub fn brightness(&self) -> EnhanceFactor {
        EnhanceFactor::new(self.brightness_factor.unwrap_or(DEFAULT_BRIGHTNESS_FACTOR))
    }

    /// Contrast preset, validated.
    pub fn contrast(&self) -> EnhanceFactor {
        EnhanceFactor::new(self.contrast_factor.unwrap_or(DEFAULT_CONTRAST_FACTOR))
    }
}

// =============================================================================
// Settings File
// =============================================================================

/// Whole settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// `[general]` section.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Editing presets.
    #[serde(default)]
    pub editing: EditingConfig,
}

impl Config {
    /// Sort order with the default applied.
    pub fn sort_order(&self) -> SortOrder {
        self.general.sort_order.unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_brightness_factor() -> Option<f32> {
    Some(DEFAULT_BRIGHTNESS_FACTOR)
}

fn default_contrast_factor() -> Option<f32> {
    Some(DEFAULT_CONTRAST_FACTOR)
}

// =============================================================================
// Location
// =============================================================================

/// `settings.toml` inside the resolved config directory.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Reads the settings file from the resolved config directory.
///
/// A missing file silently yields defaults. An unreadable or invalid one also
/// yields defaults, together with a message the caller should show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Like [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default config"
                    );
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Parses the settings file at `path`.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read, [`Error::Config`] when it is
/// not valid settings TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes the settings file into `base_dir`, or into the resolved config
/// directory when `None`.
///
/// # Errors
///
/// [`Error::Io`] when the folder or file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Serializes `config` to `path`, creating missing parent folders.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
