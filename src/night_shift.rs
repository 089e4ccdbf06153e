//! Night Shift toggle logic (pure Rust, no FFI).
//!
//! The system service exposes two flags: `enabled` (the user preference) and
//! `active` (whether the warm tint is applied right now, which also depends
//! on the schedule). Toggling forces the active state: enabling writes an
//! intensity first, then the preference, and the status is re-read at the
//! end. Nothing guarantees the re-read agrees with the request.

use crate::error::NightShiftError;
use crate::model::constants::DEFAULT_NIGHT_SHIFT_STRENGTH;

/// Snapshot of the Night Shift service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlueLightStatus {
    /// User preference.
    pub enabled: bool,
    /// Tint currently applied.
    pub active: bool,
}

/// Minimal surface of the system's blue-light client.
pub trait BlueLightClient {
    fn status(&self) -> Result<BlueLightStatus, NightShiftError>;

    /// Current intensity in [0, 1].
    fn strength(&self) -> Result<f32, NightShiftError>;

    fn set_strength(&self, strength: f32) -> Result<(), NightShiftError>;

    fn set_enabled(&self, enabled: bool) -> Result<(), NightShiftError>;
}

/// Night Shift controller over any [`BlueLightClient`].
///
/// Keeps the last status it read so the menu can show a checkmark without
/// touching the service on every redraw. The schedule and System Settings
/// change the service behind our back, so call [`NightShift::refresh`]
/// before showing anything derived from it.
pub struct NightShift<C: BlueLightClient> {
    client: C,
    last: BlueLightStatus,
}

impl<C: BlueLightClient> NightShift<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            last: BlueLightStatus::default(),
        }
    }

    /// Status as of the last successful read.
    pub fn last_status(&self) -> BlueLightStatus {
        self.last
    }

    /// Re-read the service. A failed read keeps the previous status.
    pub fn refresh(&mut self) -> BlueLightStatus {
        match self.client.status() {
            Ok(status) => {
                if status != self.last {
                    log::debug!("Night Shift status changed: {:?}", status);
                }
                self.last = status;
            }
            Err(e) => log::debug!("Night Shift status unavailable: {}", e),
        }
        self.last
    }

    /// Flip the active state and return the status read back afterwards.
    pub fn toggle(&mut self) -> Result<BlueLightStatus, NightShiftError> {
        let current = self.client.status()?;
        self.last = current;
        if current.active {
            self.client.set_enabled(false)?;
        } else {
            let strength = match self.client.strength() {
                Ok(s) if s > 0.0 => s.min(1.0),
                _ => DEFAULT_NIGHT_SHIFT_STRENGTH,
            };
            self.client.set_strength(strength)?;
            self.client.set_enabled(true)?;
        }

        let after = self.client.status()?;
        self.last = after;
        if after.active == current.active {
            log::warn!("Night Shift toggle not confirmed (active={})", after.active);
        } else {
            log::info!("Night Shift active={}", after.active);
        }
        Ok(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeClient {
        status: RefCell<BlueLightStatus>,
        strength: RefCell<f32>,
        calls: RefCell<Vec<String>>,
        sticky: bool,
        status_fails: bool,
        strength_fails: bool,
    }

    impl BlueLightClient for FakeClient {
        fn status(&self) -> Result<BlueLightStatus, NightShiftError> {
            if self.status_fails {
                return Err(NightShiftError::CallFailed("getBlueLightStatus:"));
            }
            Ok(*self.status.borrow())
        }
        fn strength(&self) -> Result<f32, NightShiftError> {
            if self.strength_fails {
                return Err(NightShiftError::CallFailed("getStrength:"));
            }
            Ok(*self.strength.borrow())
        }
        fn set_strength(&self, strength: f32) -> Result<(), NightShiftError> {
            self.calls.borrow_mut().push(format!("strength {}", strength));
            *self.strength.borrow_mut() = strength;
            Ok(())
        }
        fn set_enabled(&self, enabled: bool) -> Result<(), NightShiftError> {
            self.calls.borrow_mut().push(format!("enabled {}", enabled));
            if !self.sticky {
                *self.status.borrow_mut() = BlueLightStatus {
                    enabled,
                    active: enabled,
                };
            }
            Ok(())
        }
    }

    #[test]
    fn test_enable_writes_strength_then_preference() {
        let mut ns = NightShift::new(FakeClient::default());
        let after = ns.toggle().unwrap();
        assert!(after.active);
        assert_eq!(
            *ns.client.calls.borrow(),
            vec!["strength 0.5".to_string(), "enabled true".to_string()]
        );
    }

    #[test]
    fn test_enable_keeps_existing_strength() {
        let client = FakeClient::default();
        *client.strength.borrow_mut() = 0.8;
        let mut ns = NightShift::new(client);
        ns.toggle().unwrap();
        assert_eq!(ns.client.calls.borrow()[0], "strength 0.8");
    }

    #[test]
    fn test_disable_only_clears_preference() {
        let client = FakeClient::default();
        *client.status.borrow_mut() = BlueLightStatus {
            enabled: true,
            active: true,
        };
        let mut ns = NightShift::new(client);
        let after = ns.toggle().unwrap();
        assert!(!after.active);
        assert_eq!(*ns.client.calls.borrow(), vec!["enabled false".to_string()]);
    }

    #[test]
    fn test_unconfirmed_toggle_returns_reread_status() {
        let client = FakeClient {
            sticky: true,
            ..Default::default()
        };
        let mut ns = NightShift::new(client);
        let after = ns.toggle().unwrap();
        assert!(!after.active);
    }

    #[test]
    fn test_strength_read_failure_uses_default() {
        let client = FakeClient {
            strength_fails: true,
            ..Default::default()
        };
        let mut ns = NightShift::new(client);
        let after = ns.toggle().unwrap();
        assert!(after.active);
        assert_eq!(ns.client.calls.borrow()[0], "strength 0.5");
    }

    #[test]
    fn test_status_failure_aborts_before_any_write() {
        let client = FakeClient {
            status_fails: true,
            ..Default::default()
        };
        let mut ns = NightShift::new(client);
        assert_eq!(
            ns.toggle(),
            Err(NightShiftError::CallFailed("getBlueLightStatus:"))
        );
        assert!(ns.client.calls.borrow().is_empty());
    }

    #[test]
    fn test_refresh_picks_up_external_change() {
        let mut ns = NightShift::new(FakeClient::default());
        assert!(!ns.refresh().active);

        // Schedule kicks in without going through toggle()
        *ns.client.status.borrow_mut() = BlueLightStatus {
            enabled: true,
            active: true,
        };
        assert!(!ns.last_status().active);
        assert!(ns.refresh().active);
        assert!(ns.last_status().active);
    }

    #[test]
    fn test_refresh_failure_keeps_last_status() {
        let mut ns = NightShift::new(FakeClient::default());
        *ns.client.status.borrow_mut() = BlueLightStatus {
            enabled: true,
            active: true,
        };
        ns.refresh();

        ns.client = FakeClient {
            status_fails: true,
            ..Default::default()
        };
        assert!(ns.refresh().active);
    }

    #[test]
    fn test_toggle_updates_last_status() {
        let mut ns = NightShift::new(FakeClient::default());
        ns.toggle().unwrap();
        assert!(ns.last_status().active);
        ns.toggle().unwrap();
        assert!(!ns.last_status().active);
    }
}
