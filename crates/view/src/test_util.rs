//! Shared test scaffolding: a deterministic ruler and a recording sink.

use crate::camera::CameraTransform;
use crate::metrics::GlyphRuler;
use crate::sink::{Color, DrawSink};

/// A ruler whose advance is always half the point size: 16pt text gets
/// 8px cells, matching the cell geometry used throughout the tests.
pub(crate) struct FixedRuler;

impl GlyphRuler for FixedRuler {
    fn advance_width(&self, _ch: char, size_pt: u32) -> f32 {
        size_pt as f32 / 2.0
    }
}

/// One recorded draw-sink call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Camera(CameraTransform),
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        size_pt: u32,
        color: Color,
        text: String,
    },
}

/// A sink that records every call for assertion.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub calls: Vec<DrawCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns (x, y, width, height) of each recorded rectangle, in order.
    pub fn rects(&self) -> Vec<(f32, f32, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect {
                    x, y, width, height, ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    /// Returns (x, text) of each recorded text draw, in order.
    pub fn texts(&self) -> Vec<(f32, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { x, text, .. } => Some((*x, text.clone())),
                _ => None,
            })
            .collect()
    }

    /// Returns the point size of each recorded text draw, in order.
    pub fn text_sizes(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { size_pt, .. } => Some(*size_pt),
                _ => None,
            })
            .collect()
    }
}

impl DrawSink for RecordingSink {
    fn set_camera(&mut self, transform: &CameraTransform) {
        self.calls.push(DrawCall::Camera(*transform));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_text(&mut self, x: f32, y: f32, size_pt: u32, color: Color, text: &str) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            size_pt,
            color,
            text: text.to_string(),
        });
    }
}
