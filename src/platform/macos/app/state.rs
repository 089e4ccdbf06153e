//! State shared by the view callbacks, the poll timer and the dispatcher.
//!
//! Objective-C callbacks can't carry Rust values, so the state lives in a
//! thread-local owned by the main thread. Never call into AppKit while
//! holding the borrow: menus and modal loops re-enter the timer.

use std::cell::RefCell;

use crate::controller::BrightnessController;
use crate::night_shift::NightShift;
use crate::platform::macos::night_shift::CoreBrightnessClient;
use crate::slider::ScrollAccumulator;

pub struct AppState {
    pub brightness: BrightnessController,
    pub night_shift: Option<NightShift<CoreBrightnessClient>>,
    pub scroll: ScrollAccumulator,
}

impl AppState {
    pub fn new(
        brightness: BrightnessController,
        mut night_shift: Option<NightShift<CoreBrightnessClient>>,
    ) -> Self {
        if let Some(ns) = night_shift.as_mut() {
            ns.refresh();
        }
        Self {
            brightness,
            night_shift,
            scroll: ScrollAccumulator::new(),
        }
    }

    /// Re-read Night Shift so the checkmark follows schedule changes.
    pub fn refresh_night_shift(&mut self) {
        if let Some(ns) = self.night_shift.as_mut() {
            ns.refresh();
        }
    }

    /// Whether the Night Shift item should be checked, from the last read.
    pub fn night_shift_active(&self) -> bool {
        self.night_shift
            .as_ref()
            .is_some_and(|ns| ns.last_status().active)
    }

    /// Toggle Night Shift if available.
    pub fn toggle_night_shift(&mut self) {
        let Some(ns) = self.night_shift.as_mut() else {
            return;
        };
        if let Err(e) = ns.toggle() {
            log::warn!("Night Shift toggle failed: {}", e);
        }
    }
}

thread_local! {
    static APP_STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
}

/// Install the state. Called once from `run()` before the run loop starts.
pub fn install_state(state: AppState) {
    APP_STATE.with(|cell| *cell.borrow_mut() = Some(state));
}

/// Run `f` with the state, or return `None` if it isn't installed yet (or
/// is already borrowed by an outer callback).
pub fn with_state<R>(f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
    APP_STATE.with(|cell| {
        let mut guard = cell.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}
