//! Configuration overrides from NSUserDefaults.

use crate::config::AppConfig;
use crate::model::constants::*;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};

/// Reads a double from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str, default: f64) -> f64 {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        msg_send![ud, doubleForKey: k]
    }
}

/// Reads a boolean from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str, default: bool) -> bool {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        msg_send![ud, boolForKey: k]
    }
}

/// Loads the configuration, applying any overrides found in NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_config() -> AppConfig {
    let defaults = AppConfig::default();
    let mut config = AppConfig {
        poll_interval: prefs_get_double(PREF_POLL_INTERVAL, defaults.poll_interval),
        slider_width: prefs_get_double(PREF_SLIDER_WIDTH, defaults.slider_width),
        show_night_shift: prefs_get_bool(PREF_SHOW_NIGHT_SHIFT, defaults.show_night_shift),
    };
    config.validate();
    if config != defaults {
        log::info!("Configuration overrides: {:?}", config);
    }
    config
}
