// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always finite.

/// Enhancement factor that leaves pixels unchanged.
const NEUTRAL_FACTOR: f32 = 1.0;

// =============================================================================
// EnhanceFactor
// =============================================================================

/// Linear enhancement multiplier for brightness and contrast passes.
///
/// An enhancement pass blends each channel between a degenerate value and the
/// original: `degenerate + (value - degenerate) * factor`. A factor of `1.0`
/// returns the input untouched, lower values move toward the degenerate image
/// and higher values move away from it.
///
/// Any finite value is kept as given, including negative factors and factors
/// above ten; the per-channel result is clamped to `0..=255` by the pass
/// itself. Non-finite input (NaN, ±∞) is replaced by the neutral factor.
///
/// # Example
///
/// ```
/// use retouch::domain::editing::EnhanceFactor;
///
/// assert!(EnhanceFactor::new(1.0).is_neutral());
/// assert_eq!(EnhanceFactor::new(20.0).value(), 20.0);
/// assert_eq!(EnhanceFactor::new(f32::NAN).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhanceFactor(f32);

impl EnhanceFactor {
    /// Creates a new factor; non-finite input becomes neutral.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        Self(factor)
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether this factor leaves pixels unchanged.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        (self.0 - NEUTRAL_FACTOR).abs() < f32::EPSILON
    }
}

impl Default for EnhanceFactor {
    fn default() -> Self {
        Self(NEUTRAL_FACTOR)
    }
}

impl From<f32> for EnhanceFactor {
    fn from(factor: f32) -> Self {
        Self::new(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enhance_factor_keeps_any_finite_value() {
        assert_eq!(EnhanceFactor::new(-0.5).value(), -0.5);
        assert_eq!(EnhanceFactor::new(50.0).value(), 50.0);
        assert!((EnhanceFactor::new(1.5).value() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn enhance_factor_default_is_neutral() {
        assert!(EnhanceFactor::default().is_neutral());
        assert!(!EnhanceFactor::new(1.2).is_neutral());
    }

    #[test]
    fn enhance_factor_rejects_non_finite_input() {
        assert!(EnhanceFactor::new(f32::NAN).is_neutral());
        assert!(EnhanceFactor::new(f32::INFINITY).is_neutral());
        assert!(EnhanceFactor::new(f32::NEG_INFINITY).is_neutral());
    }

    #[test]
    fn enhance_factor_from_f32() {
        let factor: EnhanceFactor = 0.75_f32.into();
        assert!((factor.value() - 0.75).abs() < f32::EPSILON);
    }
}
