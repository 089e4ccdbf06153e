//! Configuration constants and default values.
//!
//! This module contains all application constants including timing,
//! slider geometry, NSUserDefaults keys, and validation limits.

// === Timing ===

/// Default interval between brightness polls, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: f64 = 1.0;

/// Shortest poll interval accepted from user defaults.
pub const MIN_POLL_INTERVAL_SECS: f64 = 0.25;

/// Longest poll interval accepted from user defaults.
pub const MAX_POLL_INTERVAL_SECS: f64 = 10.0;

// === Slider Geometry ===

/// Default slider width in points.
pub const DEFAULT_SLIDER_WIDTH: f64 = 120.0;

/// Minimum slider width in points.
pub const MIN_SLIDER_WIDTH: f64 = 60.0;

/// Maximum slider width in points.
pub const MAX_SLIDER_WIDTH: f64 = 300.0;

/// Height of the status bar view in points.
pub const SLIDER_HEIGHT: f64 = 22.0;

/// Thickness of the slider track in points.
pub const TRACK_THICKNESS: f64 = 4.0;

/// Radius of the slider knob in points.
pub const KNOB_RADIUS: f64 = 7.0;

/// Alpha applied to the whole control while brightness is unavailable.
pub const DISABLED_ALPHA: f64 = 0.3;

// === Input ===

/// Percentage change per scroll-wheel notch.
pub const SCROLL_STEP: f64 = 2.0;

/// Trackpad scroll distance, in points, worth one `SCROLL_STEP`.
pub const PRECISE_SCROLL_POINTS_PER_STEP: f64 = 10.0;

// === Night Shift ===

/// Strength written when enabling Night Shift with no usable current strength.
pub const DEFAULT_NIGHT_SHIFT_STRENGTH: f32 = 0.5;

// === NSUserDefaults Keys (read-only overrides) ===

/// Key for the poll interval override, in seconds.
pub const PREF_POLL_INTERVAL: &str = "pollInterval";

/// Key for the slider width override, in points.
pub const PREF_SLIDER_WIDTH: &str = "sliderWidth";

/// Key for hiding or showing the Night Shift menu item.
pub const PREF_SHOW_NIGHT_SHIFT: &str = "showNightShift";
