//! Event dispatcher for handling application events.
//!
//! Called at the start of every poll tick and straight after a menu action.
//! Drains the event bus and runs the corresponding actions on the main thread.
//!
//! ```text
//! drain_events() → dispatch_events() → state / AppKit actions
//! ```

use crate::events::{drain_events, AppEvent};
use crate::platform::macos::app::with_state;
use crate::platform::macos::display::resolve_display;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSApp, YES};
use crate::platform::macos::ui::update_status_menu;

/// Dispatch all pending events from the global event bus.
///
/// # Safety
///
/// Must be called from the main thread. The view pointer must be a
/// BrightnessSliderView.
pub unsafe fn dispatch_events(view: id) {
    let events = drain_events();
    if events.is_empty() {
        return;
    }

    let mut refresh = false;
    for event in &events {
        log::debug!("Dispatching: {}", event.description());
        refresh |= event.requires_refresh();
        dispatch_single_event(event);
    }

    if refresh {
        with_state(|s| s.brightness.refresh());
        let _: () = msg_send![view, setNeedsDisplay: YES];
    }
    update_status_menu(view);
}

/// Dispatch a single event.
///
/// # Safety
///
/// Must be called from the main thread.
unsafe fn dispatch_single_event(event: &AppEvent) {
    match event {
        AppEvent::ToggleNightShift => {
            with_state(|s| s.toggle_night_shift());
        }

        AppEvent::ShowAbout => {
            let app: id = NSApp();
            let _: () = msg_send![app, activateIgnoringOtherApps: YES];
            let _: () = msg_send![app, orderFrontStandardAboutPanel: nil];
        }

        AppEvent::DisplaysChanged => {
            let display = resolve_display();
            with_state(|s| s.brightness.set_display(display));
        }

        // Handled by the refresh after the loop
        AppEvent::RefreshBrightness => {}
    }
}
