//! Runtime symbol lookup in private frameworks.
//!
//! DisplayServices and CoreBrightness have no public headers or link stubs,
//! so they are opened with `dlopen` and their entry points resolved with
//! `dlsym`. A missing framework or symbol is a normal outcome on some
//! machines and is reported as `None`.

use std::ffi::{c_void, CStr};

/// Private framework holding the brightness entry points.
pub const DISPLAY_SERVICES_PATH: &CStr =
    c"/System/Library/PrivateFrameworks/DisplayServices.framework/DisplayServices";

/// Private framework holding the `CBBlueLightClient` class.
pub const CORE_BRIGHTNESS_PATH: &CStr =
    c"/System/Library/PrivateFrameworks/CoreBrightness.framework/CoreBrightness";

/// A `dlopen` handle. Never closed: symbols resolved from it stay valid for
/// the whole process.
pub struct Library {
    handle: *mut c_void,
    path: &'static CStr,
}

impl Library {
    pub fn open(path: &'static CStr) -> Option<Self> {
        let handle = unsafe { libc::dlopen(path.as_ptr(), libc::RTLD_LAZY) };
        if handle.is_null() {
            log::debug!("dlopen failed for {:?}", path);
            return None;
        }
        Some(Self { handle, path })
    }

    /// Resolve `name` and reinterpret it as `T`.
    ///
    /// # Safety
    /// `T` must be a function pointer type matching the real symbol's signature.
    pub unsafe fn symbol<T: Copy>(&self, name: &CStr) -> Option<T> {
        debug_assert_eq!(
            std::mem::size_of::<T>(),
            std::mem::size_of::<*mut c_void>()
        );
        let ptr = libc::dlsym(self.handle, name.as_ptr());
        if ptr.is_null() {
            log::debug!("{:?} not found in {:?}", name, self.path);
            return None;
        }
        Some(std::mem::transmute_copy::<*mut c_void, T>(&ptr))
    }
}
