//! Slider geometry (pure Rust, no FFI).
//!
//! The status bar view draws a horizontal track with a round knob. All
//! coordinates are in the view's own coordinate space, origin bottom-left.
//! The track is inset by the knob radius on both sides so the knob never
//! gets clipped at 0% or 100%.
//!
//! Scroll input is turned into steps here as well ([`ScrollAccumulator`]).

use crate::model::constants::{
    KNOB_RADIUS, PRECISE_SCROLL_POINTS_PER_STEP, SCROLL_STEP, TRACK_THICKNESS,
};
use crate::model::Percent;

/// Axis-aligned rectangle, independent of AppKit types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Layout of the slider inside a view of the given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub width: f64,
    pub height: f64,
    pub knob_radius: f64,
    pub track_thickness: f64,
}

impl SliderGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            knob_radius: KNOB_RADIUS,
            track_thickness: TRACK_THICKNESS,
        }
    }

    fn track_start(&self) -> f64 {
        self.knob_radius
    }

    /// Usable length of the track; never negative.
    pub fn track_length(&self) -> f64 {
        (self.width - 2.0 * self.knob_radius).max(0.0)
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Full track, vertically centered.
    pub fn track_rect(&self) -> Rect {
        Rect {
            x: self.track_start(),
            y: self.center_y() - self.track_thickness / 2.0,
            width: self.track_length(),
            height: self.track_thickness,
        }
    }

    /// Filled part of the track, from the left edge up to the knob.
    pub fn fill_rect(&self, percent: Percent) -> Rect {
        let track = self.track_rect();
        Rect {
            width: track.width * percent.value() / 100.0,
            ..track
        }
    }

    pub fn knob_center_x(&self, percent: Percent) -> f64 {
        self.track_start() + self.track_length() * percent.value() / 100.0
    }

    /// Bounding square of the knob.
    pub fn knob_rect(&self, percent: Percent) -> Rect {
        let r = self.knob_radius;
        Rect {
            x: self.knob_center_x(percent) - r,
            y: self.center_y() - r,
            width: 2.0 * r,
            height: 2.0 * r,
        }
    }

    /// Percentage for a click at horizontal position `x`, clamped to the track.
    pub fn percent_at(&self, x: f64) -> Percent {
        let len = self.track_length();
        if len <= 0.0 {
            return Percent::MIN;
        }
        Percent::new((x - self.track_start()) / len * 100.0)
    }
}

/// Turns scroll events into brightness steps.
///
/// Wheel notches map to one step each. Trackpad deltas are summed until they
/// cover `PRECISE_SCROLL_POINTS_PER_STEP`, and momentum events after the
/// fingers lift are dropped so a flick can't sweep the whole range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollAccumulator {
    pending: f64,
}

impl ScrollAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scroll event; returns the percentage delta to apply (may be 0).
    pub fn feed(&mut self, delta_y: f64, precise: bool, momentum: bool) -> f64 {
        if momentum || delta_y == 0.0 || !delta_y.is_finite() {
            return 0.0;
        }
        if !precise {
            self.pending = 0.0;
            return delta_y.signum() * SCROLL_STEP;
        }

        // Direction reversal discards the partial step
        if self.pending != 0.0 && self.pending.signum() != delta_y.signum() {
            self.pending = 0.0;
        }
        self.pending += delta_y;

        let steps = (self.pending / PRECISE_SCROLL_POINTS_PER_STEP).trunc();
        self.pending -= steps * PRECISE_SCROLL_POINTS_PER_STEP;
        steps * SCROLL_STEP
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
    fn test_track_is_inset_by_knob_radius() {
        let t = geom().track_rect();
        assert_eq!(t.x, 10.0);
        assert_eq!(t.width, 100.0);
        assert_eq!(t.y, 9.0);
        assert_eq!(t.height, 4.0);
    }

    #[test]
    fn test_knob_position_at_extremes() {
        let g = geom();
        assert_eq!(g.knob_center_x(Percent::MIN), 10.0);
        assert_eq!(g.knob_center_x(Percent::MAX), 110.0);
        assert_eq!(g.knob_center_x(Percent::new(50.0)), 60.0);
    }

    #[test]
    fn test_fill_width_follows_percent() {
        let g = geom();
        assert_eq!(g.fill_rect(Percent::new(25.0)).width, 25.0);
        assert_eq!(g.fill_rect(Percent::MIN).width, 0.0);
    }

    #[test]
    fn test_percent_at_clamps_outside_track() {
        let g = geom();
        assert_eq!(g.percent_at(-20.0), Percent::MIN);
        assert_eq!(g.percent_at(500.0), Percent::MAX);
        assert_eq!(g.percent_at(35.0).value(), 25.0);
    }

    #[test]
    fn test_degenerate_width_reads_as_zero() {
        let g = SliderGeometry {
            width: 5.0,
            ..geom()
        };
        assert_eq!(g.track_length(), 0.0);
        assert_eq!(g.percent_at(3.0), Percent::MIN);
    }

    #[test]
    fn test_wheel_notch_is_one_step() {
        let mut acc = ScrollAccumulator::new();
        assert_eq!(acc.feed(3.0, false, false), SCROLL_STEP);
        assert_eq!(acc.feed(-0.1, false, false), -SCROLL_STEP);
        assert_eq!(acc.feed(0.0, false, false), 0.0);
    }

    #[test]
    fn test_precise_deltas_accumulate() {
        let mut acc = ScrollAccumulator::new();
        assert_eq!(acc.feed(4.0, true, false), 0.0);
        assert_eq!(acc.feed(4.0, true, false), 0.0);
        assert_eq!(acc.feed(4.0, true, false), SCROLL_STEP);
        // 2 points carried over
        assert_eq!(acc.feed(8.0, true, false), SCROLL_STEP);
    }

    #[test]
    fn test_large_precise_delta_gives_several_steps() {
        let mut acc = ScrollAccumulator::new();
        assert_eq!(acc.feed(-35.0, true, false), -3.0 * SCROLL_STEP);
    }

    #[test]
    fn test_momentum_events_are_ignored() {
        let mut acc = ScrollAccumulator::new();
        let total: f64 = (0..50).map(|_| acc.feed(40.0, true, true)).sum();
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_direction_change_drops_partial_step() {
        let mut acc = ScrollAccumulator::new();
        assert_eq!(acc.feed(9.0, true, false), 0.0);
        assert_eq!(acc.feed(-9.0, true, false), 0.0);
        assert_eq!(acc.feed(-2.0, true, false), -SCROLL_STEP);
    }
}
