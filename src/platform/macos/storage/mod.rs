//! Read-only access to NSUserDefaults.
//!
//! Lets users tune the app with `defaults write`; nothing is ever saved.

pub mod preferences;

pub use preferences::*;
