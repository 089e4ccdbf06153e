//! Runtime configuration (pure Rust, no FFI).
//!
//! Defaults come from `model::constants`. On macOS a few of them can be
//! overridden with `defaults write <bundle-id> <key> <value>`; the app only
//! reads these, it never writes them back.

use crate::model::constants::*;

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Seconds between brightness polls.
    pub poll_interval: f64,
    /// Width of the status bar slider in points.
    pub slider_width: f64,
    /// Whether to offer the Night Shift toggle at all.
    pub show_night_shift: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL_SECS,
            slider_width: DEFAULT_SLIDER_WIDTH,
            show_night_shift: true,
        }
    }
}

impl AppConfig {
    /// Clamp values to their valid ranges. Non-finite values fall back to defaults.
    pub fn validate(&mut self) {
        let defaults = Self::default();
        if !self.poll_interval.is_finite() {
            self.poll_interval = defaults.poll_interval;
        }
        if !self.slider_width.is_finite() {
            self.slider_width = defaults.slider_width;
        }
        self.poll_interval = self
            .poll_interval
            .clamp(MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS);
        self.slider_width = self.slider_width.clamp(MIN_SLIDER_WIDTH, MAX_SLIDER_WIDTH);
    }
}
