//! Tests for the model layer (EyeConfig, EyeGeometry).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use xeyes_indicator::geometry::WidgetPosition;
use xeyes_indicator::model::constants::*;
use xeyes_indicator::model::{EyeColors, EyeConfig};
use xeyes_indicator::Color;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn config(width: f64, height: f64, spacing: f64, ratio: f64) -> EyeConfig {
    EyeConfig {
        eye_width: width,
        eye_height: height,
        eye_spacing: spacing,
        pupil_ratio: ratio,
    }
}

// === Default Values Tests ===

#[test]
fn eye_config_defaults() {
    let c = EyeConfig::default();
    assert!(approx_eq(c.eye_width, DEFAULT_EYE_WIDTH as f64));
    assert!(approx_eq(c.eye_height, DEFAULT_EYE_HEIGHT as f64));
    assert!(approx_eq(c.eye_spacing, DEFAULT_EYE_SPACING as f64));
    assert!(approx_eq(c.pupil_ratio, DEFAULT_PUPIL_RATIO));
}

#[test]
fn default_colors_are_white_eyes_black_pupils() {
    let colors = EyeColors::default();
    assert_eq!(colors.eye, Color::WHITE);
    assert_eq!(colors.pupil, Color::BLACK);
    assert_eq!(colors.outline, Color::BLACK);
}

// === Validation Tests ===

#[test]
fn validate_keeps_sizes_outside_editor_ranges() {
    let mut c = config(60.0, 2.0, 0.0, 0.9);
    c.validate();
    assert_eq!(c, config(60.0, 2.0, 0.0, 0.9));
}

#[test]
fn validate_replaces_non_positive_sizes() {
    let mut c = config(0.0, -3.0, -1.0, 0.3);
    c.validate();
    assert!(approx_eq(c.eye_width, DEFAULT_EYE_WIDTH as f64));
    assert!(approx_eq(c.eye_height, DEFAULT_EYE_HEIGHT as f64));
    assert!(approx_eq(c.eye_spacing, DEFAULT_EYE_SPACING as f64));
}

#[test]
fn validate_replaces_pupil_ratio_outside_unit_interval() {
    for ratio in [0.0, 1.0, 1.5, -0.2] {
        let mut c = EyeConfig::default();
        c.pupil_ratio = ratio;
        c.validate();
        assert!(approx_eq(c.pupil_ratio, DEFAULT_PUPIL_RATIO), "ratio {ratio}");
    }
}

#[test]
fn validate_replaces_non_finite_with_defaults() {
    let mut c = EyeConfig::default();
    c.eye_width = f64::NAN;
    c.pupil_ratio = f64::INFINITY;
    c.validate();
    assert!(approx_eq(c.eye_width, DEFAULT_EYE_WIDTH as f64));
    assert!(approx_eq(c.pupil_ratio, DEFAULT_PUPIL_RATIO));
}

#[test]
fn validate_keeps_values_in_range() {
    let mut c = config(20.0, 14.0, 6.0, 0.3);
    let before = c;
    c.validate();
    assert_eq!(c, before);
}

// === Derived Geometry Tests ===

#[test]
fn widget_size_is_two_eyes_plus_gap() {
    assert_eq!(config(20.0, 14.0, 6.0, 0.3).widget_size(), (46.0, 14.0));
}

#[test]
fn zero_spacing_puts_eyes_side_by_side() {
    let mut c = config(20.0, 14.0, 0.0, 0.3);
    c.validate();
    assert_eq!(c.widget_size(), (40.0, 14.0));
    assert!(approx_eq(c.geometry().right_center_local().x, 30.0));
}

#[test]
fn geometry_radii_and_pupil() {
    let g = config(20.0, 14.0, 6.0, 0.5).geometry();
    assert!(approx_eq(g.radius_x, 10.0));
    assert!(approx_eq(g.radius_y, 7.0));
    assert!(approx_eq(g.pupil_radius, 3.5));
    assert!(approx_eq(g.max_movement, 7.0 - 3.5 - 1.0));
}

#[test]
fn max_movement_floor_for_tiny_eyes() {
    let g = config(8.0, 8.0, 2.0, 0.5).geometry();
    assert!(approx_eq(g.pupil_radius, 2.0));
    assert!(approx_eq(g.max_movement, 1.0));
}

#[test]
fn max_movement_never_below_one() {
    for ratio in [0.1, 0.3, 0.5, 0.9, 0.99] {
        for size in [2.0, 4.0, 8.0, 40.0] {
            let g = config(size, size, 1.0, ratio).geometry();
            assert!(g.max_movement >= 1.0, "size {size} ratio {ratio}");
        }
    }
}

#[test]
fn eye_centers_local_and_global() {
    let g = config(20.0, 14.0, 6.0, 0.3).geometry();
    let left = g.left_center_local();
    let right = g.right_center_local();
    assert!(approx_eq(left.x, 10.0) && approx_eq(left.y, 7.0));
    assert!(approx_eq(right.x, 36.0) && approx_eq(right.y, 7.0));

    let origin = WidgetPosition { x: 100.0, y: 5.0 };
    let left = g.left_center(origin);
    let right = g.right_center(origin);
    assert!(approx_eq(left.x, 110.0) && approx_eq(left.y, 12.0));
    assert!(approx_eq(right.x, 136.0) && approx_eq(right.y, 12.0));
}

// === Clone and PartialEq Tests ===

#[test]
fn eye_config_equality() {
    let a = EyeConfig::default();
    let mut b = EyeConfig::default();
    assert_eq!(a, b);

    b.eye_spacing = 11.0;
    assert_ne!(a, b);
}
