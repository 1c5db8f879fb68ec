//! Line body emission with run batching.
//!
//! A line is walked once, merging contiguous characters that share a
//! selection state into runs. Each run becomes at most two draws: a
//! highlight rectangle (selected runs only) under one text draw. Selection
//! changes are sparse in practice, so the draw-call count tracks the number
//! of selection transitions on the line, not the line length.
//!
//! Offsets are pure metrics arithmetic — there is no separate layout pass.
//! The vertical offset is `line * line_height`; each flushed run advances
//! the horizontal offset by its character count times the advance width.

use crate::metrics::TextMetrics;
use crate::sink::DrawSink;

use super::constants::{SELECTION_COLOR, TEXT_COLOR};

/// Emits one line's text and selection highlights, returning the number of
/// draw calls made.
///
/// `is_selected` is queried once per character position. The walk visits
/// positions `0..=len`; the position at `len` is a sentinel that forces the
/// final run to flush. An empty line emits nothing.
pub(crate) fn render_line<F>(
    line: usize,
    text: &str,
    metrics: &TextMetrics,
    sink: &mut dyn DrawSink,
    is_selected: F,
) -> usize
where
    F: Fn(usize, usize) -> bool,
{
    let y = line as f32 * metrics.line_height();
    let len = text.chars().count();

    let mut run = String::new();
    let mut run_len = 0usize;
    let mut run_selected = false;
    let mut offset_x = 0.0;
    let mut draw_calls = 0;

    for (pos, ch) in text
        .chars()
        .map(Some)
        .chain(std::iter::once(None))
        .enumerate()
    {
        // The sentinel has no state of its own; it only terminates the run.
        let selected = match ch {
            Some(_) => is_selected(line, pos),
            None => run_selected,
        };
        if pos == 0 {
            run_selected = selected;
        }

        if pos == len || selected != run_selected {
            if run_len > 0 {
                let run_width = run_len as f32 * metrics.char_width();
                if run_selected {
                    sink.fill_rect(offset_x, y, run_width, metrics.line_height(), SELECTION_COLOR);
                    draw_calls += 1;
                }
                sink.draw_text(offset_x, y, metrics.font_size_pt(), TEXT_COLOR, &run);
                draw_calls += 1;

                offset_x += run_width;
                run.clear();
                run_len = 0;
            }
            run_selected = selected;
        }

        if let Some(c) = ch {
            run.push(c);
            run_len += 1;
        }
    }

    draw_calls
}
