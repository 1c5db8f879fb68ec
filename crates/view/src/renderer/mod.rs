//! Frame emission: line bodies, gutter, and caret.
//!
//! Each submodule is a pure emitter: geometry in, draw-sink calls out. The
//! orchestration (which lines, in what order, under which camera) lives in
//! `EditorView`; nothing here looks at the camera or the document, only at
//! what it is handed.

mod caret;
mod constants;
mod content;
mod gutter;

pub(crate) use caret::render_caret;
pub(crate) use content::render_line;
pub(crate) use gutter::render_gutter;
