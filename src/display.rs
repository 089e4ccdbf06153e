//! Display selection (pure Rust, no FFI).
//!
//! The brightness APIs address a display by its `CGDirectDisplayID`. We want
//! the built-in panel when there is one, otherwise the main display.

use std::fmt;

/// A CoreGraphics display identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayId(pub u32);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "display#{}", self.0)
    }
}

/// Pick the first built-in display among `active`, falling back to `main`.
pub fn resolve<F>(active: &[DisplayId], is_builtin: F, main: DisplayId) -> DisplayId
where
    F: Fn(DisplayId) -> bool,
{
    active
        .iter()
        .copied()
        .find(|&d| is_builtin(d))
        .unwrap_or(main)
}
