//! Error types for the hardware shims.
//!
//! Every failure here ends up as "control disabled" or "feature hidden" in
//! the UI; the variants exist so the logs can say which API failed and why.

use thiserror::Error;

/// Failure of one brightness backend or of the whole fallback chain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrightnessError {
    /// A dynamic symbol could not be resolved.
    #[error("symbol {0} not found")]
    SymbolMissing(&'static str),

    /// The underlying call returned a non-zero status code.
    #[error("{api} returned status {code}")]
    CallFailed { api: &'static str, code: i32 },

    /// No display service answered the request.
    #[error("no display service available for display {0}")]
    NoService(u32),

    /// The chain was built without any usable backend.
    #[error("no brightness backend available")]
    NoBackend,

    /// Every backend in the chain was tried and failed.
    #[error("all brightness backends failed: {}", format_failures(.0))]
    AllBackendsFailed(Vec<(&'static str, BrightnessError)>),
}

/// Failure talking to the Night Shift service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NightShiftError {
    /// CoreBrightness or its client class is not present on this system.
    #[error("Night Shift client unavailable")]
    Unavailable,

    /// A client call reported failure.
    #[error("Night Shift call {0} failed")]
    CallFailed(&'static str),
}

fn format_failures(failures: &[(&'static str, BrightnessError)]) -> String {
    failures
        .iter()
        .map(|(name, err)| format!("{}: {}", name, err))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for brightness operations
pub type Result<T> = std::result::Result<T, BrightnessError>;
