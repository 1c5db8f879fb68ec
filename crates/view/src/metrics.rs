//! Font metrics for monospace text layout.
//!
//! Under the monospace assumption, layout is trivial:
//! - x = column * char_width
//! - y = line * line_height
//!
//! The advance width is measured once per font-size change by asking the
//! rasterizer for the width of a single wide reference glyph; every
//! character in every line then consumes that same horizontal advance.
//! Font loading and rasterization stay outside this crate, behind
//! [`GlyphRuler`].

/// The glyph measured to derive the uniform advance width.
///
/// A wide glyph, so the measured advance covers the full cell even for
/// fonts whose narrow glyphs under-report.
pub const REFERENCE_GLYPH: char = '_';

/// Measures glyph advance widths for a loaded font.
///
/// Implemented by the host on top of whatever rasterizer it uses. A font
/// that fails to load is the host's failure to report; by the time a ruler
/// exists, measurement is infallible.
pub trait GlyphRuler {
    /// Returns the horizontal advance of `ch` rendered at `size_pt`, in
    /// pixels.
    fn advance_width(&self, ch: char, size_pt: u32) -> f32;
}

/// Metrics derived from a font at a fixed point size.
///
/// Mutated only by an explicit font-size change; otherwise immutable for
/// the session. Every render and mapping computation derives its geometry
/// from these two numbers.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Uniform horizontal advance of one character cell, in pixels.
    char_width: f32,
    /// Height of one line, in pixels. Equal to the font size in points.
    line_height: f32,
    /// The font size in points.
    font_size_pt: u32,
}

impl TextMetrics {
    /// Derives metrics for the given font size.
    ///
    /// Construction measures immediately, so there is no unconfigured state
    /// to call render or mapping code from.
    pub fn new(size_pt: u32, ruler: &dyn GlyphRuler) -> Self {
        let mut metrics = Self {
            char_width: 0.0,
            line_height: 0.0,
            font_size_pt: 0,
        };
        metrics.set_font_size(size_pt, ruler);
        metrics
    }

    /// Recomputes line height and advance width for a new font size.
    ///
    /// This is the only way metrics change.
    pub fn set_font_size(&mut self, size_pt: u32, ruler: &dyn GlyphRuler) {
        self.font_size_pt = size_pt;
        self.line_height = size_pt as f32;
        self.char_width = ruler.advance_width(REFERENCE_GLYPH, size_pt);
        log::debug!(
            "font size {}pt: char width {:.2}px, line height {:.0}px",
            size_pt,
            self.char_width,
            self.line_height
        );
    }

    /// Returns the uniform character advance width in pixels.
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    /// Returns the line height in pixels.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Returns the font size in points.
    pub fn font_size_pt(&self) -> u32 {
        self.font_size_pt
    }
}
