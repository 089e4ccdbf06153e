//! macOS implementation using Cocoa/AppKit via objc2.
//!
//! - FFI: objc2 bridge, private framework lookup, IOKit
//! - Hardware shims: brightness backends, display resolution, Night Shift
//! - UI: status item with the slider view and its menu
//! - Storage: read-only NSUserDefaults overrides

pub mod app;
pub mod brightness;
pub mod display;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod night_shift;
pub mod storage;
pub mod ui;

pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use storage::*;
pub use ui::*;
