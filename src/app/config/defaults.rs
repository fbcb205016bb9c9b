// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Editing**: Brightness/contrast presets applied when no factor is given

// ==========================================================================
// Editing Defaults
// ==========================================================================

/// Default brightness factor for the brightness/contrast action.
pub const DEFAULT_BRIGHTNESS_FACTOR: f32 = 1.5;

/// Default contrast factor for the brightness/contrast action.
pub const DEFAULT_CONTRAST_FACTOR: f32 = 1.2;
