#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Glow placement ---

#[test]
fn glow_center_at_zero_depth() {
    let (x, y) = glow_center(0.0, 1000.0, 500.0);
    assert!(approx_eq(x, 200.0));
    assert!(approx_eq(y, 400.0));
}

#[test]
fn glow_center_at_full_depth() {
    let (x, y) = glow_center(1.0, 1000.0, 500.0);
    assert!(approx_eq(x, 800.0));
    assert!(approx_eq(y, 100.0));
}

#[test]
fn deeper_glows_sit_further_right_and_higher() {
    let (x_near, y_near) = glow_center(0.25, 1200.0, 800.0);
    let (x_far, y_far) = glow_center(0.9, 1200.0, 800.0);
    assert!(x_far > x_near);
    assert!(y_far < y_near);
}

// --- Glow radius ---

#[test]
fn glow_radius_uses_longer_viewport_side() {
    // 1000 x 400: the radius is driven by the 1000px side.
    assert!(approx_eq(glow_radius(1.0, 1000.0, 400.0), 430.0));
    assert!(approx_eq(glow_radius(1.0, 400.0, 1000.0), 430.0));
}

#[test]
fn glow_radius_grows_with_depth() {
    let shallow = glow_radius(0.25, 800.0, 600.0);
    let deep = glow_radius(0.9, 800.0, 600.0);
    assert!(deep > shallow);
}

#[test]
fn glow_radius_has_floor_for_tiny_viewports() {
    assert!(approx_eq(glow_radius(0.5, 0.0, 0.0), 80.0));
}

// --- Palette ---

#[test]
fn glows_are_ordered_back_to_front() {
    assert!(GLOWS[0].depth < GLOWS[1].depth);
    assert!(GLOWS[1].depth < GLOWS[2].depth);
}

#[test]
fn glow_colors_carry_alpha() {
    for glow in GLOWS {
        assert_eq!(glow.color.len(), 9, "expected #rrggbbaa: {}", glow.color);
        assert!(glow.color.starts_with('#'));
    }
}
