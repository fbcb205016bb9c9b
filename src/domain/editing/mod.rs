// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for image editing operations:
//! - [`EnhanceFactor`]: Brightness/contrast enhancement multiplier

pub mod newtypes;

pub use newtypes::EnhanceFactor;
