// SPDX-License-Identifier: MPL-2.0
//! `retouch` is a small photo touch-up tool.
//!
//! Pick a folder, select one of its images, apply grayscale, mirror, blur or
//! brightness/contrast edits with undo, and save the result to a `Modified`
//! folder next to the source. The editing core lives in [`editor`]; [`app`]
//! wires it to a folder listing, user settings and a command shell.

pub mod app;
pub mod directory_scanner;
pub mod domain;
pub mod editor;
pub mod error;
pub mod logging;
pub mod media;
