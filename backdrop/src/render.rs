//! Rendering: paints one backdrop frame to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only simulation
//! state and produces pixels — it does not mutate the starfield.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Backdrop::frame`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GRADIENT_END, GRADIENT_START};
use crate::scene::{GLOWS, glow_center, glow_radius};
use crate::starfield::Starfield;

/// Draw the full scene: gradient background, additive glows, then stars.
///
/// `width` and `height` are in CSS pixels; the context transform is assumed
/// to already carry the device-pixel-ratio scale.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    stars: &Starfield,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);

    // Layer 1: diagonal two-stop gradient.
    let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
    gradient.add_color_stop(0.0, GRADIENT_START)?;
    gradient.add_color_stop(1.0, GRADIENT_END)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);

    // Layer 2: soft glows, additively blended.
    ctx.set_global_composite_operation("lighter")?;
    for glow in GLOWS {
        let (x, y) = glow_center(glow.depth, width, height);
        ctx.set_fill_style_str(glow.color);
        ctx.begin_path();
        ctx.arc(x, y, glow_radius(glow.depth, width, height), 0.0, 2.0 * PI)?;
        ctx.fill();
    }

    // Layer 3: stars, still blended additively so they sit over the glows.
    for star in stars.stars() {
        ctx.set_fill_style_str(&format!("rgba(255,255,255,{:.3})", star.alpha()));
        ctx.begin_path();
        ctx.arc(star.x, star.y, star.draw_radius(), 0.0, 2.0 * PI)?;
        ctx.fill();
    }

    ctx.set_global_composite_operation("source-over")?;
    Ok(())
}
