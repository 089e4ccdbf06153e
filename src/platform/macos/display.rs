//! Display resolution through CoreGraphics.

use core_graphics::display::CGDisplay;

use crate::display::{resolve, DisplayId};

/// The built-in panel if one is active, otherwise the main display.
pub fn resolve_display() -> DisplayId {
    let active: Vec<DisplayId> = match CGDisplay::active_displays() {
        Ok(ids) => ids.into_iter().map(DisplayId).collect(),
        Err(code) => {
            log::warn!("CGGetActiveDisplayList failed ({}), using main display", code);
            Vec::new()
        }
    };
    let main = DisplayId(CGDisplay::main().id);
    resolve(&active, |d| CGDisplay::new(d.0).is_builtin(), main)
}
