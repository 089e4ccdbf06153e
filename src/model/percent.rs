//! Brightness percentage (pure Rust, no FFI).

use std::fmt;

/// A brightness percentage, always within [0, 100].
///
/// The only way to build one is through [`Percent::new`] (or the fraction
/// helpers), which clamp, so every value in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f64);

impl Percent {
    pub const MIN: Percent = Percent(0.0);
    pub const MAX: Percent = Percent(100.0);

    /// Clamp `value` into [0, 100]. NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Percent(value.clamp(0.0, 100.0))
    }

    /// Convert from the [0, 1] scale used by the display APIs.
    pub fn from_fraction(fraction: f32) -> Self {
        Self::new(fraction as f64 * 100.0)
    }

    /// Value on the [0, 1] scale used by the display APIs.
    pub fn as_fraction(self) -> f32 {
        (self.0 / 100.0) as f32
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Move by `delta` percentage points, clamped.
    pub fn step(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Rounded whole-number value for labels.
    pub fn rounded(self) -> u8 {
        self.0.round() as u8
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_both_ends() {
        assert_eq!(Percent::new(-5.0), Percent::MIN);
        assert_eq!(Percent::new(150.0), Percent::MAX);
        assert_eq!(Percent::new(42.0).value(), 42.0);
    }

    #[test]
    fn test_nan_maps_to_zero() {
        assert_eq!(Percent::new(f64::NAN), Percent::MIN);
    }

    #[test]
    fn test_fraction_conversion() {
        assert!((Percent::from_fraction(0.25).value() - 25.0).abs() < 1e-4);
        assert!((Percent::new(75.0).as_fraction() - 0.75).abs() < 1e-6);
        assert_eq!(Percent::from_fraction(1.7), Percent::MAX);
    }

    #[test]
    fn test_display_rounds() {
        assert_eq!(Percent::new(41.6).to_string(), "42%");
        assert_eq!(Percent::MIN.to_string(), "0%");
    }
}
