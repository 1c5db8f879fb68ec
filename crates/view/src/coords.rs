//! Screen ↔ document coordinate mapping.
//!
//! Pointer positions arrive in the camera-transformed document space and
//! map to (line, column) positions; caret drawing maps back. Both
//! directions are pure arithmetic over the monospace metrics.
//!
//! The clamp policy is deliberately asymmetric and must stay that way:
//!
//! - Above the document, everything snaps to the document start `(0, 0)`.
//! - Below the document, everything snaps to the end of the last line.
//! - Within the document, the line is kept and only the column clamps to
//!   the line's length.
//!
//! This matches how drag-selection feels at the document edges: dragging
//! above selects back to the very start, dragging below selects through
//! the very end, and the two cases are intentionally not mirror images.

use slateview_doc::{DocumentSource, Position};

use crate::metrics::TextMetrics;

/// Maps a point in document pixel space to a document position.
///
/// Total function: every input, however far out of range, produces a
/// position with `line <= last line` and `col <= line_len(line)`. Clamping
/// is the error policy here; there is no failure path.
pub fn screen_to_document(
    x: f32,
    y: f32,
    metrics: &TextMetrics,
    doc: &dyn DocumentSource,
) -> Position {
    if doc.line_count() == 0 {
        return Position::new(0, 0);
    }
    let last_line = doc.line_count() - 1;

    // floor, not truncation: y in (-line_height, 0) belongs above the
    // document, and the float-to-int cast saturates wild values.
    let line = (y / metrics.line_height()).floor() as i64;
    let col = (x / metrics.char_width()).round() as i64;

    if line < 0 {
        Position::new(0, 0)
    } else if line as usize > last_line {
        Position::new(last_line, doc.line_len(last_line))
    } else {
        let line = line as usize;
        let col = col.clamp(0, doc.line_len(line) as i64) as usize;
        Position::new(line, col)
    }
}

/// Maps a document position to its pixel-space origin.
///
/// The inverse of `screen_to_document` for in-range positions: the
/// top-left corner of the position's character cell.
pub fn document_to_screen(pos: Position, metrics: &TextMetrics) -> (f32, f32) {
    (
        pos.col as f32 * metrics.char_width(),
        pos.line as f32 * metrics.line_height(),
    )
}
