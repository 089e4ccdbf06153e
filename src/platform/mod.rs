//! Platform-specific implementations.
//!
//! Only macOS is supported: the brightness and Night Shift shims depend on
//! private macOS frameworks.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
