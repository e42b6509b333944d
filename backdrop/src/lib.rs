//! Animated starfield backdrop for the portfolio site.
//!
//! This crate is compiled to WebAssembly and driven by the host UI crate. It
//! owns the full lifecycle of the backdrop canvas: sizing the drawing surface
//! to the viewport, maintaining the drifting star particle set, and painting
//! the gradient/glow/star scene once per animation frame. The simulation
//! state is plain Rust with no browser dependencies so it can be tested
//! natively; only [`render`] and the [`engine::Backdrop`] wrapper touch the
//! DOM canvas.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-facing [`engine::Backdrop`] and testable [`engine::BackdropCore`] |
//! | [`starfield`] | Star particle set: spawn, drift, wrap, twinkle |
//! | [`scene`] | Gradient stops and glow-blob geometry |
//! | [`surface`] | Viewport measurement and pixel-density scaling |
//! | [`ticker`] | Scoped requestAnimationFrame loop |
//! | [`render`] | Paints one frame to the 2D context |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod engine;
pub mod render;
pub mod scene;
pub mod starfield;
pub mod surface;
pub mod ticker;
