//! Cached slider state (pure Rust, no FFI).
//!
//! The display owns the real brightness value; the UI only keeps the last
//! value it read so it can draw between polls.

use super::percent::Percent;

/// Last known brightness plus interaction state of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderState {
    /// Last value read from (or written to) the display. `None` = unavailable.
    pub percent: Option<Percent>,
    /// True while the user holds the mouse button on the slider.
    pub dragging: bool,
}

impl SliderState {
    /// The control accepts input only while brightness is readable.
    pub fn is_enabled(&self) -> bool {
        self.percent.is_some()
    }

    /// Record the result of a poll. Returns true if the enabled state flipped.
    pub fn apply_read(&mut self, percent: Option<Percent>) -> bool {
        let was_enabled = self.is_enabled();
        self.percent = percent;
        was_enabled != self.is_enabled()
    }

    /// Polls are skipped while dragging so the knob doesn't jump under the cursor.
    pub fn should_poll(&self) -> bool {
        !self.dragging
    }

    /// Header text for the status menu.
    pub fn label(&self) -> String {
        match self.percent {
            Some(p) => format!("Brightness: {}", p),
            None => "Brightness: unavailable".to_string(),
        }
    }
}
