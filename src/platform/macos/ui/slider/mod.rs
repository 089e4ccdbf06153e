//! The brightness slider shown in the status bar.
//!
//! - view.rs: `BrightnessSliderView` class registration, mouse handling,
//!   poll timer and menu actions
//! - drawing.rs: track/fill/knob painting

pub mod drawing;
pub mod view;

pub use drawing::{draw_slider, SliderPaint};
pub use view::{create_slider_view, schedule_poll_timer};
