// SPDX-License-Identifier: MPL-2.0
//! Image handling: decoding, display handles, and transformations.

pub mod image;
pub mod image_transform;

use std::path::Path;

// Re-export commonly used types
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{color_mode, decode_image, to_image_data, ImageData};

/// Supported file extensions
pub mod extensions {
    /// Image file extensions listed in a folder, compared case-insensitively.
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];
}

/// Returns `true` if the file name ends with `.` and one of the
/// [`IMAGE_EXTENSIONS`] (case-insensitive).
///
/// The whole name is matched, so a file called `.png` counts.
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    let Some(name) = path.as_ref().file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|extension| {
        name.strip_suffix(extension)
            .is_some_and(|stem| stem.ends_with('.'))
    })
}
