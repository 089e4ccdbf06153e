//! Brightness controller (pure Rust, no FFI).
//!
//! Glue between the accessor and the cached [`SliderState`]: a poll reads
//! and caches, a user gesture writes and caches, and any total failure
//! leaves the control disabled until a later poll succeeds.

use crate::brightness::BrightnessAccessor;
use crate::display::DisplayId;
use crate::model::{Percent, SliderState};

pub struct BrightnessController {
    accessor: BrightnessAccessor,
    state: SliderState,
}

impl BrightnessController {
    pub fn new(accessor: BrightnessAccessor) -> Self {
        Self {
            accessor,
            state: SliderState::default(),
        }
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn accessor(&self) -> &BrightnessAccessor {
        &self.accessor
    }

    /// Read the hardware value into the cache.
    ///
    /// Returns true when the cached value or availability changed, i.e. the
    /// view needs a redraw.
    pub fn refresh(&mut self) -> bool {
        let before = self.state.percent;
        let read = match self.accessor.read() {
            Ok(p) => Some(p),
            Err(e) => {
                if before.is_some() {
                    log::warn!("Brightness unavailable: {}", e);
                }
                None
            }
        };
        if self.state.apply_read(read) && read.is_some() {
            log::info!(
                "Brightness available via {}",
                self.accessor.last_backend().unwrap_or("?")
            );
        }
        before != self.state.percent
    }

    /// Poll unless the user is dragging.
    pub fn poll(&mut self) -> bool {
        if !self.state.should_poll() {
            return false;
        }
        self.refresh()
    }

    /// Apply a value chosen by the user. Ignored while the control is disabled.
    pub fn set(&mut self, percent: Percent) {
        if !self.state.is_enabled() {
            return;
        }
        match self.accessor.write(percent) {
            Ok(()) => self.state.percent = Some(percent),
            Err(e) => {
                log::warn!("Failed to set brightness to {}: {}", percent, e);
                self.state.apply_read(None);
            }
        }
    }

    /// Move the current value by `delta` percentage points.
    pub fn step(&mut self, delta: f64) {
        if let Some(p) = self.state.percent {
            self.set(p.step(delta));
        }
    }

    pub fn begin_drag(&mut self) {
        self.state.dragging = true;
    }

    /// End a drag and re-read so the knob settles on the real hardware value.
    pub fn end_drag(&mut self) -> bool {
        self.state.dragging = false;
        self.refresh()
    }

    /// Retarget after a screen configuration change.
    pub fn set_display(&mut self, display: DisplayId) {
        self.accessor.set_display(display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brightness::BrightnessBackend;
    use crate::error::{BrightnessError, Result};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Backend whose availability can be flipped from the test.
    struct Switchable {
        value: Rc<Cell<f32>>,
        up: Rc<Cell<bool>>,
    }

    impl BrightnessBackend for Switchable {
        fn name(&self) -> &'static str {
            "switchable"
        }
        fn get(&self, _display: DisplayId) -> Result<f32> {
            if self.up.get() {
                Ok(self.value.get())
            } else {
                Err(BrightnessError::CallFailed { api: "get", code: 1 })
            }
        }
        fn set(&self, _display: DisplayId, value: f32) -> Result<()> {
            if self.up.get() {
                self.value.set(value);
                Ok(())
            } else {
                Err(BrightnessError::CallFailed { api: "set", code: 1 })
            }
        }
    }

    fn controller(initial: f32) -> (BrightnessController, Rc<Cell<f32>>, Rc<Cell<bool>>) {
        let value = Rc::new(Cell::new(initial));
        let up = Rc::new(Cell::new(true));
        let backend = Switchable {
            value: value.clone(),
            up: up.clone(),
        };
        let acc = BrightnessAccessor::new(DisplayId(1), vec![Box::new(backend)]);
        (BrightnessController::new(acc), value, up)
    }

    #[test]
    fn test_refresh_reports_change_once() {
        let (mut c, _, _) = controller(0.5);
        assert!(c.refresh());
        assert!(!c.refresh());
        assert!(c.state().is_enabled());
    }

    #[test]
    fn test_set_writes_through_and_caches() {
        let (mut c, value, _) = controller(0.5);
        c.refresh();
        c.set(Percent::new(80.0));
        assert!((value.get() - 0.8).abs() < 1e-6);
        assert_eq!(c.state().percent, Some(Percent::new(80.0)));
    }

    #[test]
    fn test_set_ignored_while_disabled() {
        let (mut c, value, _) = controller(0.5);
        c.set(Percent::new(10.0));
        assert_eq!(value.get(), 0.5);
    }

    #[test]
    fn test_failed_write_disables_control() {
        let (mut c, _, up) = controller(0.5);
        c.refresh();
        up.set(false);
        c.set(Percent::new(20.0));
        assert!(!c.state().is_enabled());
    }

    #[test]
    fn test_poll_skipped_while_dragging() {
        let (mut c, value, _) = controller(0.5);
        c.refresh();
        c.begin_drag();
        value.set(0.1);
        assert!(!c.poll());
        assert!(c.end_drag());
        assert!((c.state().percent.unwrap().value() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_step_clamps_at_top() {
        let (mut c, value, _) = controller(0.99);
        c.refresh();
        c.step(5.0);
        assert_eq!(value.get(), 1.0);
    }
}
