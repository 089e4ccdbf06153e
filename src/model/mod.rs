//! Application domain model.
//!
//! This module contains pure state definitions (no FFI dependencies):
//! the clamped brightness percentage, the cached slider state and the
//! configuration constants.

pub mod constants;
pub mod percent;
pub mod slider_state;

pub use constants::*;
pub use percent::Percent;
pub use slider_state::SliderState;
