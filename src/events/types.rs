//! Application events for inter-module communication.
//!
//! These events represent actions requested by menu items and system
//! observers. They are handled by the dispatcher on the next poll tick.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (status menu, observers) through the EventBus
/// to the dispatcher, which executes the appropriate actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Menu Events ===
    /// Flip Night Shift on or off
    ToggleNightShift,

    /// Show the standard About panel
    ShowAbout,

    // === System Events ===
    /// Re-read brightness immediately instead of waiting for the next tick
    RefreshBrightness,

    /// Screen configuration changed or the machine woke up; re-resolve the display
    DisplaysChanged,
}

impl AppEvent {
    /// Returns true if handling this event ends with a brightness re-read.
    pub fn requires_refresh(&self) -> bool {
        matches!(self, AppEvent::RefreshBrightness | AppEvent::DisplaysChanged)
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleNightShift => "Toggle Night Shift",
            AppEvent::ShowAbout => "Show about panel",
            AppEvent::RefreshBrightness => "Refresh brightness",
            AppEvent::DisplaysChanged => "Displays changed",
        }
    }
}
