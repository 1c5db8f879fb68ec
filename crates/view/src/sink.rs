//! Draw sink abstraction.
//!
//! The viewport emits three kinds of primitive and nothing else: filled
//! rectangles, monospace text runs, and a camera transform update. How
//! those become pixels — rasterization, font rendering, GPU batching — is
//! the sink's business. Keeping emission separate from rasterization is
//! what makes every geometry decision in this crate testable with a
//! recording sink instead of a window.

use crate::camera::CameraTransform;

/// RGBA color with components in `[0.0, 1.0]`.
pub type Color = [f32; 4];

/// Receives the viewport's draw primitives.
///
/// Object-safe; the viewport takes `&mut dyn DrawSink` per frame.
///
/// The sink owns the loaded font: text runs name only a size, a color, and
/// the characters. Positions are in document pixel space; the sink applies
/// the camera transform set at the start of the frame.
pub trait DrawSink {
    /// Applies the camera transform for subsequent draws.
    fn set_camera(&mut self, transform: &CameraTransform);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Draws a run of monospace text with its top-left corner at (x, y).
    fn draw_text(&mut self, x: f32, y: f32, size_pt: u32, color: Color, text: &str);
}
