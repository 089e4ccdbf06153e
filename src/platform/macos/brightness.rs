//! Brightness backends for macOS.
//!
//! Fallback order:
//! 1. `DisplayServicesGetBrightness` / `DisplayServicesSetBrightness`
//! 2. `DisplayServicesGetLinearBrightness` / `DisplayServicesSetLinearBrightness`
//! 3. IOKit `IODisplayGetFloatParameter` / `IODisplaySetFloatParameter`
//!
//! The first two come from the private DisplayServices framework and work on
//! Apple Silicon; the IOKit path covers older Intel machines.

use std::ffi::{c_void, CStr};

use crate::brightness::{BrightnessAccessor, BrightnessBackend};
use crate::display::DisplayId;
use crate::error::{BrightnessError, Result};
use crate::platform::macos::ffi::bridge::{nsstring, NSString, Retained};
use crate::platform::macos::ffi::iokit::*;
use crate::platform::macos::ffi::dylib::{Library, DISPLAY_SERVICES_PATH};

type GetBrightnessFn = unsafe extern "C" fn(display: u32, value: *mut f32) -> i32;
type SetBrightnessFn = unsafe extern "C" fn(display: u32, value: f32) -> i32;

/// Which pair of DisplayServices symbols to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServicesVariant {
    Perceptual,
    Linear,
}

impl DisplayServicesVariant {
    fn symbols(self) -> (&'static CStr, &'static CStr) {
        match self {
            Self::Perceptual => (
                c"DisplayServicesGetBrightness",
                c"DisplayServicesSetBrightness",
            ),
            Self::Linear => (
                c"DisplayServicesGetLinearBrightness",
                c"DisplayServicesSetLinearBrightness",
            ),
        }
    }

    /// Symbol names as plain strings, for error reporting.
    fn api_names(self) -> (&'static str, &'static str) {
        let (get, set) = self.symbols();
        (symbol_name(get), symbol_name(set))
    }
}

fn symbol_name(symbol: &'static CStr) -> &'static str {
    symbol.to_str().unwrap_or("DisplayServices")
}

/// Brightness through the private DisplayServices symbols.
pub struct DisplayServicesBackend {
    variant: DisplayServicesVariant,
    get: GetBrightnessFn,
    set: SetBrightnessFn,
}

impl DisplayServicesBackend {
    /// Resolve both symbols of `variant`; `None` if either is missing.
    pub fn load(lib: &Library, variant: DisplayServicesVariant) -> Option<Self> {
        let (get_name, set_name) = variant.symbols();
        unsafe {
            let get = lib.symbol::<GetBrightnessFn>(get_name)?;
            let set = lib.symbol::<SetBrightnessFn>(set_name)?;
            Some(Self { variant, get, set })
        }
    }
}

impl BrightnessBackend for DisplayServicesBackend {
    fn name(&self) -> &'static str {
        match self.variant {
            DisplayServicesVariant::Perceptual => "display-services",
            DisplayServicesVariant::Linear => "display-services-linear",
        }
    }

    fn get(&self, display: DisplayId) -> Result<f32> {
        let mut value: f32 = 0.0;
        let code = unsafe { (self.get)(display.0, &mut value) };
        if code != 0 {
            return Err(BrightnessError::CallFailed {
                api: self.variant.api_names().0,
                code,
            });
        }
        Ok(value)
    }

    fn set(&self, display: DisplayId, value: f32) -> Result<()> {
        let code = unsafe { (self.set)(display.0, value) };
        if code != 0 {
            return Err(BrightnessError::CallFailed {
                api: self.variant.api_names().1,
                code,
            });
        }
        Ok(())
    }
}

/// Brightness through the IOKit `brightness` display parameter.
///
/// IOKit has no mapping from a `CGDirectDisplayID` that works on current
/// systems, so the first `IODisplayConnect` service that answers is used.
pub struct IoKitBackend {
    key: Retained<NSString>,
}

impl IoKitBackend {
    pub fn new() -> Self {
        Self {
            key: nsstring(DISPLAY_BRIGHTNESS_KEY),
        }
    }

    /// NSString is toll-free bridged with CFString.
    fn key_ptr(&self) -> *const c_void {
        Retained::as_ptr(&self.key) as *const c_void
    }

    /// Run `op` on each display service until one returns `KERN_SUCCESS`.
    fn with_services<F>(&self, display: DisplayId, api: &'static str, mut op: F) -> Result<()>
    where
        F: FnMut(IoObject) -> IoReturn,
    {
        let mut iterator: IoObject = 0;
        let code = unsafe {
            let matching = IOServiceMatching(DISPLAY_CONNECT_CLASS.as_ptr());
            if matching.is_null() {
                return Err(BrightnessError::NoService(display.0));
            }
            IOServiceGetMatchingServices(IO_MAIN_PORT_DEFAULT, matching, &mut iterator)
        };
        if code != KERN_SUCCESS {
            return Err(BrightnessError::CallFailed {
                api: "IOServiceGetMatchingServices",
                code,
            });
        }

        let mut last_error = None;
        let mut found = false;
        loop {
            let service = unsafe { IOIteratorNext(iterator) };
            if service == 0 {
                break;
            }
            let code = op(service);
            unsafe { IOObjectRelease(service) };
            if code == KERN_SUCCESS {
                found = true;
                break;
            }
            last_error = Some(code);
        }
        unsafe { IOObjectRelease(iterator) };

        match (found, last_error) {
            (true, _) => Ok(()),
            (false, Some(code)) => Err(BrightnessError::CallFailed { api, code }),
            (false, None) => Err(BrightnessError::NoService(display.0)),
        }
    }
}

impl Default for IoKitBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl BrightnessBackend for IoKitBackend {
    fn name(&self) -> &'static str {
        "iokit"
    }

    fn get(&self, display: DisplayId) -> Result<f32> {
        let key = self.key_ptr();
        let mut value: f32 = 0.0;
        self.with_services(display, "IODisplayGetFloatParameter", |service| unsafe {
            IODisplayGetFloatParameter(service, 0, key, &mut value)
        })?;
        Ok(value)
    }

    fn set(&self, display: DisplayId, value: f32) -> Result<()> {
        let key = self.key_ptr();
        self.with_services(display, "IODisplaySetFloatParameter", |service| unsafe {
            IODisplaySetFloatParameter(service, 0, key, value)
        })
    }
}

/// Build the accessor with every backend available on this machine, in
/// fallback order.
pub fn build_accessor(display: DisplayId) -> BrightnessAccessor {
    let mut backends: Vec<Box<dyn BrightnessBackend>> = Vec::new();

    match Library::open(DISPLAY_SERVICES_PATH) {
        Some(lib) => {
            for variant in [
                DisplayServicesVariant::Perceptual,
                DisplayServicesVariant::Linear,
            ] {
                if let Some(backend) = DisplayServicesBackend::load(&lib, variant) {
                    backends.push(Box::new(backend));
                }
            }
        }
        None => log::info!("DisplayServices not available, using IOKit only"),
    }
    backends.push(Box::new(IoKitBackend::new()));

    BrightnessAccessor::new(display, backends)
}
