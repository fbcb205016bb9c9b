// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors carry rendered messages instead of source errors so they stay
//! `Clone` and can travel inside controller events.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The image file is missing, unreadable, or not a decodable raster.
    #[error("Load Error: {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    /// An operation that needs an image was invoked before any load.
    #[error("No image loaded")]
    NoImageLoaded,

    /// The destination directory or file could not be created or written.
    #[error("Write Error: {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Shell input that does not parse into a command.
    #[error("Invalid command: {0}")]
    Command(String),

    /// A file selector that matches nothing in the current listing.
    #[error("No such file in list: {0}")]
    Selection(String),
}

impl Error {
    /// Builds a [`Error::Load`] from any displayable cause.
    pub fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Builds a [`Error::Write`] from any displayable cause.
    pub fn write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Write {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn load_error_names_the_path() {
        let err = Error::load("/photos/a.png", "No such file or directory");
        let message = format!("{}", err);
        assert!(message.starts_with("Load Error: "));
        assert!(message.contains("a.png"));
        assert!(message.contains("No such file"));
    }

    #[test]
    fn write_error_names_the_path() {
        let err = Error::write("/photos/Modified/a.png", "permission denied");
        assert!(format!("{}", err).contains("Modified"));
        assert!(matches!(err, Error::Write { .. }));
    }

    #[test]
    fn no_image_loaded_display() {
        assert_eq!(format!("{}", Error::NoImageLoaded), "No image loaded");
    }
}
