//! FFI bindings for the IOKit display parameter API.

use std::ffi::{c_char, c_void};

/// `io_object_t` / `io_iterator_t` / `io_service_t`
pub type IoObject = u32;

/// `IOReturn` / `kern_return_t`
pub type IoReturn = i32;

pub const KERN_SUCCESS: IoReturn = 0;

/// `kIOMainPortDefault`
pub const IO_MAIN_PORT_DEFAULT: u32 = 0;

/// Service class that carries display parameters on Intel Macs.
pub const DISPLAY_CONNECT_CLASS: &std::ffi::CStr = c"IODisplayConnect";

/// `kIODisplayBrightnessKey`
pub const DISPLAY_BRIGHTNESS_KEY: &str = "brightness";

#[link(name = "IOKit", kind = "framework")]
extern "C" {
    pub fn IOServiceMatching(name: *const c_char) -> *mut c_void;

    /// Consumes one reference to `matching`.
    pub fn IOServiceGetMatchingServices(
        main_port: u32,
        matching: *mut c_void,
        existing: *mut IoObject,
    ) -> IoReturn;

    pub fn IOIteratorNext(iterator: IoObject) -> IoObject;

    pub fn IOObjectRelease(object: IoObject) -> IoReturn;

    pub fn IODisplayGetFloatParameter(
        service: IoObject,
        options: u32,
        parameter_name: *const c_void,
        value: *mut f32,
    ) -> IoReturn;

    pub fn IODisplaySetFloatParameter(
        service: IoObject,
        options: u32,
        parameter_name: *const c_void,
        value: f32,
    ) -> IoReturn;
}
