//! Line-number gutter emission.
//!
//! The gutter is a fixed-width strip left of the text origin: one
//! background rectangle and one number per line, 1-indexed for display.
//! One display row per line — variable-height lines are out of scope.

use crate::config::ViewConfig;
use crate::metrics::TextMetrics;
use crate::sink::DrawSink;

use super::constants::{GUTTER_BACKGROUND_COLOR, GUTTER_TEXT_COLOR};

/// Gap between the gutter background's right edge and the text origin.
const GUTTER_TEXT_GAP_PX: f32 = 5.0;

/// How much smaller the line numbers render than the body text, in points.
const NUMBER_SIZE_DROP_PT: u32 = 1;

/// Emits the gutter background and line number for every line.
pub(crate) fn render_gutter(
    line_count: usize,
    metrics: &TextMetrics,
    config: &ViewConfig,
    sink: &mut dyn DrawSink,
) {
    let number_size_pt = metrics.font_size_pt().saturating_sub(NUMBER_SIZE_DROP_PT);

    for display in 1..=line_count {
        let y = metrics.line_height() * (display - 1) as f32;

        sink.fill_rect(
            -config.margin_width_px,
            y,
            config.margin_width_px - GUTTER_TEXT_GAP_PX,
            metrics.line_height(),
            GUTTER_BACKGROUND_COLOR,
        );
        sink.draw_text(
            -config.margin_width_px,
            y,
            number_size_pt,
            GUTTER_TEXT_COLOR,
            &display.to_string(),
        );
    }
}
