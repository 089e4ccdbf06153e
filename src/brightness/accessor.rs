//! Ordered fallback over brightness backends.

use crate::display::DisplayId;
use crate::error::{BrightnessError, Result};
use crate::model::Percent;

/// One way of reading and writing a display's brightness.
///
/// Values are on the [0, 1] scale the system APIs use.
pub trait BrightnessBackend {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn get(&self, display: DisplayId) -> Result<f32>;

    fn set(&self, display: DisplayId, value: f32) -> Result<()>;
}

/// Reads and writes the brightness of one display, trying each backend in
/// order until one succeeds. A single attempt per call, no retries.
pub struct BrightnessAccessor {
    display: DisplayId,
    backends: Vec<Box<dyn BrightnessBackend>>,
    last_backend: Option<&'static str>,
}

impl BrightnessAccessor {
    pub fn new(display: DisplayId, backends: Vec<Box<dyn BrightnessBackend>>) -> Self {
        Self {
            display,
            backends,
            last_backend: None,
        }
    }

    pub fn display(&self) -> DisplayId {
        self.display
    }

    /// Point the accessor at another display (after a screen change).
    pub fn set_display(&mut self, display: DisplayId) {
        if display != self.display {
            log::info!("Brightness target changed: {} -> {}", self.display, display);
            self.display = display;
            self.last_backend = None;
        }
    }

    /// Names of the backends in fallback order.
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Backend that served the most recent successful call.
    pub fn last_backend(&self) -> Option<&'static str> {
        self.last_backend
    }

    /// Current brightness, or an error if no backend could read it.
    pub fn read(&mut self) -> Result<Percent> {
        let display = self.display;
        self.try_each(|b| b.get(display)).map(Percent::from_fraction)
    }

    /// Set brightness. The value is already clamped by [`Percent`].
    pub fn write(&mut self, percent: Percent) -> Result<()> {
        let display = self.display;
        let value = percent.as_fraction();
        self.try_each(|b| b.set(display, value))
    }

    fn try_each<T, F>(&mut self, mut op: F) -> Result<T>
    where
        F: FnMut(&dyn BrightnessBackend) -> Result<T>,
    {
        if self.backends.is_empty() {
            return Err(BrightnessError::NoBackend);
        }

        let mut failures = Vec::new();
        for backend in &self.backends {
            match op(backend.as_ref()) {
                Ok(v) => {
                    let name = backend.name();
                    if self.last_backend != Some(name) {
                        log::debug!("Brightness served by {}", name);
                        self.last_backend = Some(name);
                    }
                    return Ok(v);
                }
                Err(e) => {
                    log::debug!("{} failed: {}", backend.name(), e);
                    failures.push((backend.name(), e));
                }
            }
        }

        self.last_backend = None;
        Err(BrightnessError::AllBackendsFailed(failures))
    }
}
