//! Global access to the application event bus.
//!
//! The bus is initialized once in `main`; Objective-C callbacks (menu
//! actions, notification blocks) can't carry Rust state, so they reach the
//! bus through these statics.
//!
//! - The [`EventPublisher`] lives in a `OnceLock`; it is `Send + Sync`
//! - The [`EventBus`] (and its receiver) lives in a `Mutex`, only ever
//!   locked from the main thread

use std::sync::{Mutex, OnceLock};

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();

static BUS: OnceLock<Mutex<EventBus>> = OnceLock::new();

/// Initialize the global event bus.
///
/// Returns false (and leaves the existing bus in place) if it was already
/// initialized.
pub fn init_event_bus() -> bool {
    let bus = EventBus::new();
    if PUBLISHER.set(bus.publisher()).is_err() {
        return false;
    }
    BUS.set(Mutex::new(bus)).is_ok()
}

/// Get a publisher handle for the global event bus.
///
/// Returns `None` before `init_event_bus()`.
pub fn publisher() -> Option<EventPublisher> {
    PUBLISHER.get().cloned()
}

/// Publish an event to the global event bus.
///
/// Events published before initialization are dropped with a warning.
pub fn publish(event: AppEvent) {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => log::warn!("Event bus not initialized, dropping {:?}", event),
    }
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(bus) = BUS.get() else {
        return Vec::new();
    };
    match bus.lock() {
        Ok(bus) => bus.drain(),
        Err(_) => Vec::new(),
    }
}
