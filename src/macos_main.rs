//! macOS entry point: builds the state, installs the status item and runs
//! the AppKit loop.

use brightbar::controller::BrightnessController;
use brightbar::night_shift::NightShift;
use brightbar::platform::macos::app::{install_state, AppState};
use brightbar::platform::macos::brightness::build_accessor;
use brightbar::platform::macos::display::resolve_display;
use brightbar::platform::macos::ffi::bridge::{autoreleasepool, msg_send, nil, NSApp};
use brightbar::platform::macos::input::install_display_observers;
use brightbar::platform::macos::night_shift::CoreBrightnessClient;
use brightbar::platform::macos::storage::load_config;
use brightbar::platform::macos::ui::{install_status_bar, schedule_poll_timer};

/// Main entry point for macOS.
pub fn run() {
    autoreleasepool(|| {
        unsafe {
            let app = NSApp();
            // NSApplicationActivationPolicyAccessory = 1
            let _: bool = msg_send![app, setActivationPolicy: 1i64];

            let config = load_config();

            let display = resolve_display();
            let accessor = build_accessor(display);

            let night_shift = if config.show_night_shift {
                CoreBrightnessClient::load().map(NightShift::new)
            } else {
                None
            };
            if night_shift.is_none() {
                log::info!("Night Shift toggle disabled");
            }

            let mut brightness = BrightnessController::new(accessor);
            log::info!(
                "Controlling {} via {:?}",
                brightness.accessor().display(),
                brightness.accessor().backend_names()
            );
            if !brightness.refresh() {
                log::warn!("Brightness unavailable at startup; slider disabled");
            }
            install_state(AppState::new(brightness, night_shift));

            let view = install_status_bar(&config);
            if view == nil {
                return;
            }
            schedule_poll_timer(view, config.poll_interval);
            install_display_observers();
            log::debug!("Polling every {:.2}s", config.poll_interval);

            let _: () = msg_send![app, run];
        }
    });
}
