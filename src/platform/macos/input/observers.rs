//! System observers that keep the slider pointed at the right display.
//!
//! Watches for:
//! - Screen configuration changes (display attached/detached, lid closed)
//! - Wake from sleep
//! - Screens waking (brightness may have been changed by the system)

use block2::RcBlock;

use crate::events::{publisher, AppEvent, EventPublisher};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};

/// Subscribe `center` to `name`, publishing `event` every time it fires.
unsafe fn observe(center: id, name: &std::ffi::CStr, events: &EventPublisher, event: AppEvent) {
    let name: id = msg_send![get_class("NSString"), stringWithUTF8String: name.as_ptr()];
    let events = events.clone();
    let block = RcBlock::new(move |_note: id| {
        events.publish(event.clone());
    });
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Install the observers. Events are handled on the next poll tick.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_display_observers() {
    let Some(events) = publisher() else {
        log::warn!("Event bus not initialized, display observers not installed");
        return;
    };

    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    observe(
        center,
        c"NSApplicationDidChangeScreenParametersNotification",
        &events,
        AppEvent::DisplaysChanged,
    );

    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let ws_center: id = msg_send![ws, notificationCenter];
    observe(
        ws_center,
        c"NSWorkspaceDidWakeNotification",
        &events,
        AppEvent::DisplaysChanged,
    );
    observe(
        ws_center,
        c"NSWorkspaceScreensDidWakeNotification",
        &events,
        AppEvent::RefreshBrightness,
    );
}
