//! Night Shift through the private `CBBlueLightClient` class.
//!
//! The class lives in CoreBrightness, which isn't loaded by AppKit, so the
//! framework is opened first and the class looked up by name afterwards.

use crate::error::NightShiftError;
use crate::night_shift::{BlueLightClient, BlueLightStatus};
use crate::platform::macos::ffi::bridge::{id, msg_send, sel, try_get_class, Bool, Sel, YES};
use crate::platform::macos::ffi::dylib::{Library, CORE_BRIGHTNESS_PATH};

// Layout of the struct filled by `-getBlueLightStatus:`. Only the two
// flags are read, the rest just has to be the right size.
#[repr(C)]
#[allow(dead_code)]
struct BlueLightTime {
    hour: i32,
    minute: i32,
}

#[repr(C)]
#[allow(dead_code)]
struct BlueLightSchedule {
    from: BlueLightTime,
    to: BlueLightTime,
}

#[repr(C)]
#[allow(dead_code)]
struct StatusData {
    active: Bool,
    enabled: Bool,
    sun_schedule_permitted: Bool,
    mode: i32,
    schedule: BlueLightSchedule,
    disable_flags: u64,
    available: Bool,
}

/// `-getBlueLightStatus:` called through its IMP; the struct pointer has no
/// stable type encoding to check a `msg_send!` against.
type GetStatusFn = unsafe extern "C-unwind" fn(id, Sel, *mut StatusData) -> Bool;

/// A live `CBBlueLightClient` instance.
pub struct CoreBrightnessClient {
    client: id,
    get_status: GetStatusFn,
}

impl CoreBrightnessClient {
    /// Instantiate the client, or `None` if this Mac has no Night Shift.
    pub fn load() -> Option<Self> {
        Library::open(CORE_BRIGHTNESS_PATH)?;
        let cls = try_get_class("CBBlueLightClient")?;

        unsafe {
            let supports_sel = sel!(supportsBlueLightReduction);
            let responds: bool = msg_send![cls, respondsToSelector: supports_sel];
            if responds {
                let supported: bool = msg_send![cls, supportsBlueLightReduction];
                if !supported {
                    log::info!("Night Shift not supported on this Mac");
                    return None;
                }
            }

            let method = cls.instance_method(sel!(getBlueLightStatus:))?;
            let get_status: GetStatusFn = std::mem::transmute(method.implementation());

            // Owned for the lifetime of the process.
            let client: id = msg_send![cls, new];
            if client.is_null() {
                return None;
            }
            Some(Self { client, get_status })
        }
    }
}

impl BlueLightClient for CoreBrightnessClient {
    fn status(&self) -> Result<BlueLightStatus, NightShiftError> {
        let mut data: StatusData = unsafe { std::mem::zeroed() };
        let ok = unsafe { (self.get_status)(self.client, sel!(getBlueLightStatus:), &mut data) };
        if !ok.as_bool() {
            return Err(NightShiftError::CallFailed("getBlueLightStatus:"));
        }
        Ok(BlueLightStatus {
            enabled: data.enabled.as_bool(),
            active: data.active.as_bool(),
        })
    }

    fn strength(&self) -> Result<f32, NightShiftError> {
        let mut value: f32 = 0.0;
        let ok: bool = unsafe { msg_send![self.client, getStrength: &mut value as *mut f32] };
        if !ok {
            return Err(NightShiftError::CallFailed("getStrength:"));
        }
        Ok(value)
    }

    fn set_strength(&self, strength: f32) -> Result<(), NightShiftError> {
        let ok: bool = unsafe { msg_send![self.client, setStrength: strength, commit: YES] };
        if !ok {
            return Err(NightShiftError::CallFailed("setStrength:commit:"));
        }
        Ok(())
    }

    fn set_enabled(&self, enabled: bool) -> Result<(), NightShiftError> {
        let ok: bool = unsafe { msg_send![self.client, setEnabled: Bool::new(enabled)] };
        if !ok {
            return Err(NightShiftError::CallFailed("setEnabled:"));
        }
        Ok(())
    }
}
