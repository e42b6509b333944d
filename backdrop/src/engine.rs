//! Backdrop engine: pure simulation core plus the browser-facing wrapper.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render;
use crate::starfield::Starfield;
use crate::surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core state — everything that doesn't depend on the canvas element.
///
/// Separated from [`Backdrop`] so it can be tested without WASM/browser
/// dependencies.
pub struct BackdropCore {
    pub stars: Starfield,
    /// Viewport size in CSS pixels.
    pub width: f64,
    pub height: f64,
    rng: SmallRng,
}

impl BackdropCore {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stars: Starfield::new(),
            width: 0.0,
            height: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Adopt new bounds and respawn the whole particle set — there is no
    /// interpolation between old and new layouts.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.stars.regenerate(width, height, &mut self.rng);
    }

    /// Advance the simulation by one frame.
    pub fn advance(&mut self) {
        self.stars.advance(self.width);
    }
}

/// The browser-facing backdrop. Wraps [`BackdropCore`] and owns the canvas
/// element and its 2D context.
pub struct Backdrop {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: BackdropCore,
    dpr: f64,
}

impl Backdrop {
    /// Bind to a canvas element, size it to the viewport, and spawn the
    /// initial star set.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or the surface cannot
    /// be sized.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = js_sys::Date::now() as u64;
        let mut backdrop = Self {
            canvas,
            ctx,
            core: BackdropCore::new(seed),
            dpr: 1.0,
        };
        backdrop.resize()?;
        Ok(backdrop)
    }

    /// Re-measure the viewport, resize the drawing surface, and respawn the
    /// star set within the new bounds.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the window is unavailable or the canvas cannot be
    /// resized.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let (css_width, css_height) = surface::viewport_size(&window)
            .ok_or_else(|| JsValue::from_str("viewport size unavailable"))?;

        self.dpr = surface::clamp_dpr(window.device_pixel_ratio());
        surface::fit(&self.canvas, css_width, css_height, self.dpr)?;
        // Setting width/height reset the context; restore the DPR scale.
        self.ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;

        self.core.resize(css_width, css_height);
        Ok(())
    }

    /// Advance the simulation and paint one frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.advance();
        render::draw(&self.ctx, &self.core.stars, self.core.width, self.core.height)
    }
}
