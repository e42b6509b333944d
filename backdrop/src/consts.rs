//! Shared numeric constants for the backdrop crate.

// ── Starfield ───────────────────────────────────────────────────

/// Number of stars in the field.
pub const STAR_COUNT: usize = 220;

/// Horizontal margin in CSS pixels past the viewport edge before a star
/// wraps back to the left side.
pub const WRAP_MARGIN: f64 = 10.0;

/// Twinkle phase advance per frame, before depth scaling.
pub const TWINKLE_RATE: f64 = 0.03;

/// Star depth: `DEPTH_MIN + random * DEPTH_SPAN`.
pub const DEPTH_MIN: f64 = 0.2;
pub const DEPTH_SPAN: f64 = 0.8;

/// Star radius in CSS pixels: `RADIUS_MIN + random * RADIUS_SPAN`.
pub const RADIUS_MIN: f64 = 0.2;
pub const RADIUS_SPAN: f64 = 1.6;

/// Base horizontal speed in px/frame: `SPEED_MIN + random * SPEED_SPAN`.
pub const SPEED_MIN: f64 = 0.05;
pub const SPEED_SPAN: f64 = 0.3;

// ── Scene ───────────────────────────────────────────────────────

/// Background gradient stops, top-left to bottom-right.
pub const GRADIENT_START: &str = "rgba(10,12,22,0.95)";
pub const GRADIENT_END: &str = "rgba(12,18,36,0.95)";

/// Glow blob radius = `max(w, h) * GLOW_RADIUS_FACTOR * depth + GLOW_RADIUS_BASE`.
pub const GLOW_RADIUS_FACTOR: f64 = 0.35;
pub const GLOW_RADIUS_BASE: f64 = 80.0;

// ── Surface ─────────────────────────────────────────────────────

/// Device pixel ratio cap. High-DPI displays above this render at 2x.
pub const DPR_CAP: f64 = 2.0;
