#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Brightness slider for the macOS menu bar.
//!
//! Everything outside `platform` is pure Rust with no FFI so it can run as
//! normal unit and integration tests on any host. `platform::macos` holds
//! the AppKit view, the status menu and the hardware shims.

pub mod brightness;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod events;
pub mod model;
pub mod night_shift;
pub mod platform;
pub mod slider;

pub use brightness::{BrightnessAccessor, BrightnessBackend};
pub use config::AppConfig;
pub use controller::BrightnessController;
pub use display::DisplayId;
pub use error::{BrightnessError, NightShiftError};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{Percent, SliderState};
pub use night_shift::{BlueLightClient, BlueLightStatus, NightShift};
pub use slider::{ScrollAccumulator, SliderGeometry};
