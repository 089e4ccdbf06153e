//! User interface module.
//!
//! ## slider/
//! - view.rs: BrightnessSliderView class, input handling, poll timer
//! - drawing.rs: track, fill and knob painting
//!
//! ## status_bar.rs
//! - install_status_bar, update_status_menu

pub mod slider;
pub mod status_bar;

pub use slider::{create_slider_view, schedule_poll_timer};
pub use status_bar::{install_status_bar, update_status_menu};
