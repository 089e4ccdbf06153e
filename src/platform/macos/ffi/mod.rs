//! FFI bindings for macOS frameworks.
//!
//! - `bridge`: objc2 re-exports and message-sending helpers
//! - `dylib`: `dlopen`/`dlsym` access to private frameworks
//! - `iokit`: IOKit display parameter API

pub mod bridge;
pub mod dylib;
pub mod iokit;

pub use dylib::Library;
