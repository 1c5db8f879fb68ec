//! slateview: the viewport layer of a text editor.
//!
//! This crate renders a document's text, caret, line-number gutter, and
//! selection highlighting through a camera-transformed draw sink, and maps
//! pointer coordinates back to document positions. It owns none of the
//! state it displays: the document, selection, and cursor arrive through
//! the `slateview-doc` traits, and rasterization sits behind [`DrawSink`]
//! and [`GlyphRuler`].
//!
//! # Overview
//!
//! - [`TextMetrics`]: monospace cell geometry from a font size
//! - [`screen_to_document`] / [`document_to_screen`]: pointer mapping with
//!   boundary clamping
//! - [`Camera`]: pan/zoom/rotate with document-extent scroll limits
//! - [`EditorView`]: per-frame orchestration and pointer entry points
//! - [`ViewConfig`]: every tunable constant, loadable from TOML
//!
//! # Error policy
//!
//! The core has no recoverable errors of its own: out-of-range pointer
//! coordinates clamp, out-of-bounds scrolls no-op, and collaborator
//! failures (font loading, document access) stay with the collaborator.
//! Only the config loader returns a [`ConfigError`].
//!
//! # Concurrency
//!
//! Single-threaded and frame-driven. Collaborators are borrowed for the
//! duration of each call; a host that parallelizes input and rendering
//! serializes access itself.

mod camera;
mod config;
mod coords;
mod editor_view;
mod extent;
mod metrics;
mod renderer;
mod sink;

#[cfg(test)]
mod test_util;

pub use camera::{Camera, CameraTransform};
pub use config::{ConfigError, ViewConfig};
pub use coords::{document_to_screen, screen_to_document};
pub use editor_view::EditorView;
pub use extent::DocumentExtent;
pub use metrics::{GlyphRuler, TextMetrics, REFERENCE_GLYPH};
pub use sink::{Color, DrawSink};
