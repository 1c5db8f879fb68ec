//! Document extent measurement.
//!
//! The camera's scroll limits derive from how much space the document
//! occupies. The extent is measured fresh from the live document on every
//! render pass and on every guarded scroll — the document may mutate
//! between frames, so caching a measurement would let the scroll stops
//! drift from the content.

use slateview_doc::DocumentSource;

use crate::metrics::TextMetrics;

/// The pixel-space footprint of the document under the current metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentExtent {
    /// Total number of lines.
    pub line_count: usize,
    /// Width of the longest line in pixels.
    pub max_line_width_px: f32,
    /// Total height of all lines in pixels.
    pub total_height_px: f32,
}

impl DocumentExtent {
    /// Measures the document's extent under the given metrics.
    ///
    /// Walks every line to find the longest; O(line count) with O(1) work
    /// per line since `line_len` is a count, not a scan of this crate's
    /// making.
    pub fn measure(doc: &dyn DocumentSource, metrics: &TextMetrics) -> Self {
        let line_count = doc.line_count();
        let mut longest_chars = 0;
        for line in 0..line_count {
            longest_chars = longest_chars.max(doc.line_len(line));
        }

        Self {
            line_count,
            max_line_width_px: longest_chars as f32 * metrics.char_width(),
            total_height_px: line_count as f32 * metrics.line_height(),
        }
    }
}
