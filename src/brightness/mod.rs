//! Brightness access through an ordered chain of backends.
//!
//! Platform code supplies the backends (private DisplayServices symbols,
//! their linear variant, the IOKit display parameter); this module owns the
//! fallback order and the clamping, and is pure Rust so it can be tested
//! with fake backends.

pub mod accessor;

pub use accessor::{BrightnessAccessor, BrightnessBackend};
