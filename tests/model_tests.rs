//! Tests for the model layer (Percent, SliderState) and AppConfig.
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use brightbar::config::AppConfig;
use brightbar::model::constants::*;
use brightbar::model::{Percent, SliderState};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Percent ===

#[test]
fn percent_is_always_in_range() {
    for v in [-1e9, -0.1, 0.0, 33.3, 100.0, 100.1, 1e9, f64::INFINITY, f64::NEG_INFINITY] {
        let p = Percent::new(v);
        assert!((0.0..=100.0).contains(&p.value()), "{} -> {}", v, p.value());
    }
}

#[test]
fn percent_step_clamps() {
    assert_eq!(Percent::new(99.0).step(5.0), Percent::MAX);
    assert_eq!(Percent::new(1.0).step(-5.0), Percent::MIN);
    assert!(approx_eq(Percent::new(50.0).step(2.0).value(), 52.0));
}

#[test]
fn percent_from_f64() {
    let p: Percent = 120.0_f64.into();
    assert_eq!(p, Percent::MAX);
}

// === SliderState ===

#[test]
fn slider_state_default_is_disabled() {
    let state = SliderState::default();
    assert!(!state.is_enabled());
    assert!(state.should_poll());
    assert_eq!(state.label(), "Brightness: unavailable");
}

#[test]
fn slider_state_apply_read_reports_availability_flip() {
    let mut state = SliderState::default();
    assert!(state.apply_read(Some(Percent::new(40.0))));
    assert!(!state.apply_read(Some(Percent::new(41.0))));
    assert!(state.apply_read(None));
    assert!(!state.is_enabled());
}

#[test]
fn slider_state_label_shows_rounded_percent() {
    let mut state = SliderState::default();
    state.apply_read(Some(Percent::new(66.6)));
    assert_eq!(state.label(), "Brightness: 67%");
}

#[test]
fn slider_state_no_poll_while_dragging() {
    let mut state = SliderState::default();
    state.dragging = true;
    assert!(!state.should_poll());
}

// === AppConfig ===

#[test]
fn config_defaults() {
    let config = AppConfig::default();
    assert!(approx_eq(config.poll_interval, DEFAULT_POLL_INTERVAL_SECS));
    assert!(approx_eq(config.slider_width, DEFAULT_SLIDER_WIDTH));
    assert!(config.show_night_shift);
}

#[test]
fn validate_clamps_poll_interval() {
    let mut config = AppConfig::default();
    config.poll_interval = 0.01;
    config.validate();
    assert!(approx_eq(config.poll_interval, MIN_POLL_INTERVAL_SECS));

    config.poll_interval = 3600.0;
    config.validate();
    assert!(approx_eq(config.poll_interval, MAX_POLL_INTERVAL_SECS));
}

#[test]
fn validate_clamps_slider_width() {
    let mut config = AppConfig::default();
    config.slider_width = 10.0;
    config.validate();
    assert!(approx_eq(config.slider_width, MIN_SLIDER_WIDTH));

    config.slider_width = 1000.0;
    config.validate();
    assert!(approx_eq(config.slider_width, MAX_SLIDER_WIDTH));
}

#[test]
fn validate_replaces_non_finite_values() {
    let mut config = AppConfig::default();
    config.poll_interval = f64::NAN;
    config.slider_width = f64::INFINITY;
    config.validate();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn validate_keeps_values_in_range() {
    let mut config = AppConfig::default();
    config.poll_interval = 2.5;
    config.slider_width = 150.0;
    config.validate();
    assert!(approx_eq(config.poll_interval, 2.5));
    assert!(approx_eq(config.slider_width, 150.0));
}
