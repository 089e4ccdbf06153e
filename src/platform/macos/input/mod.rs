//! System notification observers.

pub mod observers;

pub use observers::install_display_observers;
