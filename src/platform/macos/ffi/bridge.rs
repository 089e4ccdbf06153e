//! Thin layer over objc2 for message-sending code.
//!
//! AppKit objects are handled as raw `id` pointers, the way the view and
//! menu code talk to them through `msg_send!`. Typed `Retained<T>` is used
//! only where ownership matters (strings handed to CoreFoundation).

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CString;

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use objc2::rc::Retained;

use objc2::encode::Encode;
use objc2_app_kit::NSApplication;
use objc2::ClassType;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Create an autoreleased NSString and return it as a raw `id`.
///
/// Valid until the enclosing autorelease pool drains, which is enough for
/// passing straight into `msg_send!`.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    Retained::autorelease_ptr(NSString::from_str(s)) as id
}

/// Look up a class by name.
pub fn try_get_class(name: &str) -> Option<&'static AnyClass> {
    let c_name = CString::new(name).ok()?;
    AnyClass::get(&c_name)
}

/// Get an AppKit/Foundation class by name, panicking if not found.
///
/// Only for classes every supported macOS ships; use [`try_get_class`] for
/// anything private.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    try_get_class(name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Instance-variable access on objects of classes built with `ClassBuilder`.
pub trait ObjectExt {
    /// # Safety
    /// The ivar must exist and be of type T. Main thread only.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// # Safety
    /// The ivar must exist and be of type T. Main thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = CString::new(name).unwrap_or_default();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = CString::new(name).unwrap_or_default();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
