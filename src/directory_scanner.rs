// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module scans a directory for supported image formats, filters them,
//! and sorts them according to the configured sort order.

use crate::app::config::SortOrder;
use crate::error::{Error, Result};
use crate::media;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// The image files of one directory, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageList {
    directory: PathBuf,
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// Creates an empty list rooted at `directory`.
    pub fn empty(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            image_files: Vec::new(),
        }
    }

    /// Scans a directory for supported image files and sorts them.
    ///
    /// Only regular files are listed; subdirectories (including the
    /// `Modified` output folder) are skipped.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files, sort_order);

        Ok(Self {
            directory: directory.to_path_buf(),
            image_files,
        })
    }

    /// The scanned directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the total number of image files in the list.
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(|p| p.as_path())
    }

    /// File names in display order, lossily decoded for display.
    pub fn file_names(&self) -> Vec<String> {
        self.image_files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    /// Index of the file called `name`, if listed.
    pub fn position(&self, name: impl AsRef<OsStr>) -> Option<usize> {
        let name = name.as_ref();
        self.image_files
            .iter()
            .position(|p| p.file_name() == Some(name))
    }

    /// Resolves a selector to a listed file name, exactly as stored on disk.
    ///
    /// A selector is either a 1-based list index or an exact file name.
    pub fn resolve(&self, selector: &str) -> Result<&OsStr> {
        let index = match selector.parse::<usize>() {
            Ok(number) if number >= 1 && number <= self.len() => number - 1,
            _ => self
                .position(selector)
                .ok_or_else(|| Error::Selection(selector.to_string()))?,
        };

        self.get(index)
            .and_then(Path::file_name)
            .ok_or_else(|| Error::Selection(selector.to_string()))
    }
}

/// Sorts a list of image file paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}
