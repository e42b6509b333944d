//! Drawing-surface sizing: viewport measurement and pixel-density scaling.
//!
//! The canvas is styled to the CSS viewport size while its backing buffer is
//! scaled by the device pixel ratio, capped so high-DPI displays don't
//! allocate oversized buffers.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, Window};

use crate::consts::DPR_CAP;

/// Clamp a raw device pixel ratio into `[1, DPR_CAP]`.
///
/// Non-positive inputs (a misbehaving environment) fall back to 1.
#[must_use]
pub fn clamp_dpr(raw: f64) -> f64 {
    if raw > 0.0 { raw.min(DPR_CAP) } else { 1.0 }
}

/// Physical buffer size for a CSS size at the given pixel ratio.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn physical_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let width = (css_width * dpr).round().max(0.0);
    let height = (css_height * dpr).round().max(0.0);
    (width as u32, height as u32)
}

/// Current viewport size in CSS pixels, if the window exposes one.
#[must_use]
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
    let width = match window.inner_width() {
        Ok(value) => value.as_f64()?,
        Err(_) => return None,
    };
    let height = match window.inner_height() {
        Ok(value) => value.as_f64()?,
        Err(_) => return None,
    };
    Some((width, height))
}

/// Resize the canvas element: CSS size via inline style, buffer size scaled
/// by the pixel ratio.
///
/// # Errors
///
/// Returns `Err` if the inline style properties cannot be set.
pub fn fit(
    canvas: &HtmlCanvasElement,
    css_width: f64,
    css_height: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    let style = canvas.style();
    style.set_property("width", &format!("{css_width}px"))?;
    style.set_property("height", &format!("{css_height}px"))?;

    let (width, height) = physical_size(css_width, css_height, dpr);
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(())
}
