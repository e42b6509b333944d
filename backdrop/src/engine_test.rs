#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{STAR_COUNT, WRAP_MARGIN};

#[test]
fn new_core_has_no_stars() {
    let core = BackdropCore::new(1);
    assert!(core.stars.is_empty());
    assert_eq!(core.width, 0.0);
    assert_eq!(core.height, 0.0);
}

#[test]
fn resize_spawns_full_field_within_bounds() {
    let mut core = BackdropCore::new(42);
    core.resize(1920.0, 1080.0);
    assert_eq!(core.stars.len(), STAR_COUNT);
    for star in core.stars.stars() {
        assert!(star.x >= 0.0 && star.x < 1920.0);
        assert!(star.y >= 0.0 && star.y < 1080.0);
    }
}

#[test]
fn resize_regenerates_for_the_new_bounds() {
    let mut core = BackdropCore::new(42);
    core.resize(1920.0, 1080.0);
    core.resize(320.0, 240.0);
    assert_eq!(core.stars.len(), STAR_COUNT);
    for star in core.stars.stars() {
        assert!(star.x >= 0.0 && star.x < 320.0);
        assert!(star.y >= 0.0 && star.y < 240.0);
    }
}

#[test]
fn same_seed_yields_same_field() {
    let mut a = BackdropCore::new(99);
    let mut b = BackdropCore::new(99);
    a.resize(640.0, 480.0);
    b.resize(640.0, 480.0);
    assert_eq!(a.stars.stars(), b.stars.stars());
}

#[test]
fn different_seeds_yield_different_fields() {
    let mut a = BackdropCore::new(1);
    let mut b = BackdropCore::new(2);
    a.resize(640.0, 480.0);
    b.resize(640.0, 480.0);
    assert_ne!(a.stars.stars(), b.stars.stars());
}

#[test]
fn advance_keeps_field_inside_wrap_bounds() {
    let mut core = BackdropCore::new(7);
    core.resize(200.0, 150.0);
    for _ in 0..5000 {
        core.advance();
    }
    assert_eq!(core.stars.len(), STAR_COUNT);
    for star in core.stars.stars() {
        assert!(star.x >= -WRAP_MARGIN && star.x <= 200.0 + WRAP_MARGIN);
    }
}
