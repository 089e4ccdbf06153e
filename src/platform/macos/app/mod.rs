//! Main-thread application state.

pub mod state;

pub use state::*;
