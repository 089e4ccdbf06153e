//! Drawing for the status bar slider.
//!
//! Layout comes from [`SliderGeometry`]; this module only turns it into
//! AppKit rects and paints them with NSBezierPath.

use crate::model::constants::DISABLED_ALPHA;
use crate::model::Percent;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSPoint, NSRect, NSSize};
use crate::slider::{Rect, SliderGeometry};

fn ns_rect(r: Rect) -> NSRect {
    NSRect::new(NSPoint::new(r.x, r.y), NSSize::new(r.width, r.height))
}

/// What to paint for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPaint {
    pub track: NSRect,
    /// Filled part of the track; `None` while unavailable.
    pub fill: Option<NSRect>,
    /// Knob bounds; `None` while unavailable.
    pub knob: Option<NSRect>,
    /// Overall opacity multiplier.
    pub alpha: f64,
}

impl SliderPaint {
    pub fn new(geometry: &SliderGeometry, percent: Option<Percent>) -> Self {
        let track = ns_rect(geometry.track_rect());
        match percent {
            Some(p) => Self {
                track,
                fill: Some(ns_rect(geometry.fill_rect(p))),
                knob: Some(ns_rect(geometry.knob_rect(p))),
                alpha: 1.0,
            },
            None => Self {
                track,
                fill: None,
                knob: None,
                alpha: DISABLED_ALPHA,
            },
        }
    }
}

unsafe fn rounded(rect: NSRect) -> id {
    let radius = rect.size.height / 2.0;
    msg_send![
        get_class("NSBezierPath"),
        bezierPathWithRoundedRect: rect,
        xRadius: radius,
        yRadius: radius
    ]
}

unsafe fn label_color(alpha: f64) -> id {
    let base: id = msg_send![get_class("NSColor"), labelColor];
    msg_send![base, colorWithAlphaComponent: alpha]
}

/// Paint the slider.
///
/// # Safety
///
/// Must be called from the main thread within a valid drawing context.
pub unsafe fn draw_slider(paint: &SliderPaint) {
    let ns_color = get_class("NSColor");

    // Track
    let _: () = msg_send![label_color(0.25 * paint.alpha), set];
    let _: () = msg_send![rounded(paint.track), fill];

    // Filled part
    if let Some(fill) = paint.fill {
        if fill.size.width > 0.0 {
            let accent: id = msg_send![ns_color, controlAccentColor];
            let accent: id = msg_send![accent, colorWithAlphaComponent: paint.alpha];
            let _: () = msg_send![accent, set];
            let _: () = msg_send![rounded(fill), fill];
        }
    }

    // Knob
    if let Some(knob) = paint.knob {
        let circle: id = msg_send![get_class("NSBezierPath"), bezierPathWithOvalInRect: knob];
        let white: id = msg_send![ns_color, whiteColor];
        let _: () = msg_send![white, set];
        let _: () = msg_send![circle, fill];

        let _: () = msg_send![label_color(0.35 * paint.alpha), set];
        let _: () = msg_send![circle, setLineWidth: 0.5f64];
        let _: () = msg_send![circle, stroke];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> SliderGeometry {
        SliderGeometry {
            width: 120.0,
            height: 22.0,
            knob_radius: 10.0,
            track_thickness: 4.0,
        }
    }

    #[test]
    fn test_unavailable_paints_dimmed_track_only() {
        let paint = SliderPaint::new(&geom(), None);
        assert!(paint.fill.is_none());
        assert!(paint.knob.is_none());
        assert!((paint.alpha - DISABLED_ALPHA).abs() < 1e-9);
    }

    #[test]
    fn test_available_paints_knob_at_percent() {
        let paint = SliderPaint::new(&geom(), Some(Percent::new(50.0)));
        let knob = paint.knob.unwrap();
        assert!((knob.origin.x - 50.0).abs() < 1e-9);
        assert!((knob.size.width - 20.0).abs() < 1e-9);
        assert!((paint.fill.unwrap().size.width - 50.0).abs() < 1e-9);
    }
}
