//! Star particle set: spawn, drift, wrap, and twinkle.
//!
//! Pure simulation state — no browser types. Rendering lives in
//! [`crate::render`]; regeneration and per-frame stepping are driven by
//! [`crate::engine::BackdropCore`].

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::consts::{
    DEPTH_MIN, DEPTH_SPAN, RADIUS_MIN, RADIUS_SPAN, SPEED_MIN, SPEED_SPAN, STAR_COUNT,
    TWINKLE_RATE, WRAP_MARGIN,
};

/// A single drifting star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Position in CSS pixels.
    pub x: f64,
    pub y: f64,
    /// Depth factor in (0.2, 1.0]; scales speed, draw size, and twinkle rate.
    pub depth: f64,
    /// Base radius in CSS pixels before depth scaling.
    pub radius: f64,
    /// Accumulating twinkle phase in radians.
    pub twinkle: f64,
    /// Base horizontal speed in px/frame before depth scaling.
    pub speed: f64,
}

impl Star {
    fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            depth: DEPTH_MIN + rng.random::<f64>() * DEPTH_SPAN,
            radius: RADIUS_MIN + rng.random::<f64>() * RADIUS_SPAN,
            twinkle: rng.random::<f64>() * TAU,
            speed: SPEED_MIN + rng.random::<f64>() * SPEED_SPAN,
        }
    }

    /// Opacity for the current twinkle phase, always within [0, 1].
    #[must_use]
    pub fn alpha(&self) -> f64 {
        0.5 + 0.5 * self.twinkle.sin()
    }

    /// Radius after depth scaling — nearer stars draw larger.
    #[must_use]
    pub fn draw_radius(&self) -> f64 {
        self.radius * self.depth
    }
}

/// The full particle set.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all stars and spawn a fresh set within the given bounds.
    pub fn regenerate<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.stars.clear();
        for _ in 0..STAR_COUNT {
            self.stars.push(Star::spawn(rng, width, height));
        }
    }

    /// Advance one frame: drift right by `speed × depth`, wrap past the
    /// right edge back to the left, and accumulate the twinkle phase.
    pub fn advance(&mut self, width: f64) {
        for star in &mut self.stars {
            star.x += star.speed * star.depth;
            if star.x > width + WRAP_MARGIN {
                star.x = -WRAP_MARGIN;
            }
            star.twinkle += TWINKLE_RATE * star.depth;
        }
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
