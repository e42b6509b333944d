//! Background scene geometry: gradient stops and glow-blob placement.
//!
//! The three glows sit on the viewport diagonal at fixed relative depths;
//! deeper blobs sit further right, further up, and grow larger.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::consts::{GLOW_RADIUS_BASE, GLOW_RADIUS_FACTOR};

/// A soft circular glow, additively blended over the gradient.
#[derive(Debug, Clone, Copy)]
pub struct Glow {
    /// Relative depth in (0, 1]; positions the blob along the diagonal.
    pub depth: f64,
    /// Fill color with baked-in alpha.
    pub color: &'static str,
}

/// The three glows, back to front.
pub const GLOWS: [Glow; 3] = [
    Glow { depth: 0.25, color: "#60a5fa11" },
    Glow { depth: 0.6, color: "#a78bfa11" },
    Glow { depth: 0.9, color: "#34d39911" },
];

/// Center of a glow blob for the given viewport size.
#[must_use]
pub fn glow_center(depth: f64, width: f64, height: f64) -> (f64, f64) {
    (
        width * (0.2 + 0.6 * depth),
        height * (0.2 + 0.6 * (1.0 - depth)),
    )
}

/// Radius of a glow blob for the given viewport size.
#[must_use]
pub fn glow_radius(depth: f64, width: f64, height: f64) -> f64 {
    width.max(height) * GLOW_RADIUS_FACTOR * depth + GLOW_RADIUS_BASE
}
