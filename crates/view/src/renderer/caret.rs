//! Caret emission.
//!
//! One vertical bar at the cursor's cell. Blink timing is a host concern
//! layered over a per-frame draw/no-draw decision; this emitter always
//! draws when called.

use slateview_doc::Position;

use crate::config::ViewConfig;
use crate::coords;
use crate::metrics::TextMetrics;
use crate::sink::DrawSink;

use super::constants::CARET_COLOR;

/// Emits the caret bar at the given document position.
pub(crate) fn render_caret(
    pos: Position,
    metrics: &TextMetrics,
    config: &ViewConfig,
    sink: &mut dyn DrawSink,
) {
    let (x, y) = coords::document_to_screen(pos, metrics);
    sink.fill_rect(
        x,
        y + config.caret_v_offset_px,
        config.caret_width_px,
        metrics.line_height(),
        CARET_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{FixedRuler, RecordingSink};

    fn metrics() -> TextMetrics {
        TextMetrics::new(16, &FixedRuler)
    }

    #[test]
    fn caret_sits_at_its_cell_with_vertical_nudge() {
        let mut sink = RecordingSink::new();
        render_caret(
            Position::new(2, 5),
            &metrics(),
            &ViewConfig::default(),
            &mut sink,
        );

        let (x, y, w, h) = sink.rects()[0];
        assert_eq!(x, 40.0); // col 5 * 8px
        assert_eq!(y, 34.0); // line 2 * 16px + 2px nudge
        assert_eq!(w, 2.0);
        assert_eq!(h, 16.0);
    }

    #[test]
    fn caret_width_follows_config() {
        let mut sink = RecordingSink::new();
        let config = ViewConfig {
            caret_width_px: 3.0,
            ..ViewConfig::default()
        };
        render_caret(Position::new(0, 0), &metrics(), &config, &mut sink);

        let (_, _, w, _) = sink.rects()[0];
        assert_eq!(w, 3.0);
    }
}
