#![allow(clippy::float_cmp)]

use super::*;

// --- DPR clamping ---

#[test]
fn clamp_dpr_passes_through_typical_values() {
    assert_eq!(clamp_dpr(1.0), 1.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
    assert_eq!(clamp_dpr(2.0), 2.0);
}

#[test]
fn clamp_dpr_caps_high_density_displays() {
    assert_eq!(clamp_dpr(3.0), 2.0);
    assert_eq!(clamp_dpr(4.0), 2.0);
}

#[test]
fn clamp_dpr_falls_back_on_nonsense() {
    assert_eq!(clamp_dpr(0.0), 1.0);
    assert_eq!(clamp_dpr(-2.0), 1.0);
}

// --- Physical sizing ---

#[test]
fn physical_size_scales_by_dpr() {
    assert_eq!(physical_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(physical_size(800.0, 600.0, 1.0), (800, 600));
}

#[test]
fn physical_size_rounds_fractional_pixels() {
    assert_eq!(physical_size(412.5, 915.2, 1.5), (619, 1373));
}

#[test]
fn physical_size_never_underflows() {
    assert_eq!(physical_size(0.0, 0.0, 2.0), (0, 0));
}
