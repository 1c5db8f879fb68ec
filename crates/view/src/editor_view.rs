//! Top-level viewport orchestration.
//!
//! `EditorView` owns the metrics, the camera, and the configuration, and
//! composes the frame emitters once per frame. The document, selection, and
//! cursor collaborators are passed into each call rather than stored: the
//! whole pipeline runs on one logical thread per frame, and taking the
//! references at the call site is what guarantees exclusive access for the
//! duration of the call.
//!
//! Every frame walks every line; there is no camera-visibility culling at
//! this layer, so a sink always sees the full document's draws and may cull
//! itself. For very large documents this is the known scaling limit.

use log::trace;
use slateview_doc::{CursorStore, DocumentSource, SelectionStore};

use crate::camera::{Camera, CameraTransform};
use crate::config::ViewConfig;
use crate::coords;
use crate::extent::DocumentExtent;
use crate::metrics::{GlyphRuler, TextMetrics};
use crate::renderer;
use crate::sink::DrawSink;

/// The viewport layer: rendering, pointer mapping, and camera control.
pub struct EditorView {
    metrics: TextMetrics,
    camera: Camera,
    config: ViewConfig,
}

impl EditorView {
    /// Creates a viewport with the given view size and font size.
    ///
    /// Metrics are measured immediately through `ruler`; the camera starts
    /// anchored at the gutter margin with the document top at the view top.
    pub fn new(
        config: ViewConfig,
        view_width: f32,
        view_height: f32,
        font_size_pt: u32,
        ruler: &dyn GlyphRuler,
    ) -> Self {
        let metrics = TextMetrics::new(font_size_pt, ruler);
        let camera = Camera::new(
            view_width,
            view_height,
            config.margin_width_px,
            config.overscroll_px,
        );
        Self {
            metrics,
            camera,
            config,
        }
    }

    /// Returns the current text metrics.
    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns the camera transform for the current frame.
    pub fn camera_transform(&self) -> CameraTransform {
        self.camera.transform()
    }

    /// Re-measures metrics for a new font size. The only way font metrics
    /// change after construction.
    pub fn set_font_size(&mut self, size_pt: u32, ruler: &dyn GlyphRuler) {
        self.metrics.set_font_size(size_pt, ruler);
    }

    /// Resets the camera rectangle on window resize.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        log::debug!("camera reset to {}x{}", width, height);
        self.camera.set_bounds(width, height);
    }

    // ==================== Frame rendering ====================

    /// Renders one frame: line bodies, gutter, caret, under the camera
    /// transform.
    ///
    /// The document extent is measured fresh from `doc` and returned so
    /// hosts can drive scrollbars without a second walk. Draw order is
    /// line bodies, then gutter (which paints over text panned left of the
    /// origin), then caret.
    pub fn render(
        &self,
        doc: &dyn DocumentSource,
        selections: &dyn SelectionStore,
        cursor: &dyn CursorStore,
        sink: &mut dyn DrawSink,
    ) -> DocumentExtent {
        let extent = DocumentExtent::measure(doc, &self.metrics);
        sink.set_camera(&self.camera.transform());

        let mut draw_calls = 0;
        for line in 0..doc.line_count() {
            let text = doc.line_text(line);
            draw_calls += renderer::render_line(line, &text, &self.metrics, sink, |l, c| {
                selections.is_selected(l, c)
            });
        }

        renderer::render_gutter(doc.line_count(), &self.metrics, &self.config, sink);
        draw_calls += doc.line_count() * 2;

        renderer::render_caret(cursor.position(), &self.metrics, &self.config, sink);
        draw_calls += 1;

        trace!(
            "frame: {} lines, {} draw calls, extent {:.0}x{:.0}px",
            extent.line_count,
            draw_calls,
            extent.max_line_width_px,
            extent.total_height_px
        );
        extent
    }

    // ==================== Pointer interaction ====================

    /// Starts a selection at the pointer: maps the position and begins a
    /// new one-character selection there.
    pub fn pointer_to_selection_anchor(
        &self,
        x: f32,
        y: f32,
        doc: &dyn DocumentSource,
        selections: &mut dyn SelectionStore,
    ) {
        let pos = coords::screen_to_document(x, y, &self.metrics, doc);
        selections.start_selection(pos);
    }

    /// Drags to the pointer: moves the cursor there, records the column as
    /// the rightmost reached, and extends the active selection.
    pub fn pointer_drag(
        &self,
        x: f32,
        y: f32,
        doc: &dyn DocumentSource,
        cursor: &mut dyn CursorStore,
        selections: &mut dyn SelectionStore,
    ) {
        let pos = coords::screen_to_document(x, y, &self.metrics, doc);
        cursor.set_position(pos);
        cursor.set_max_col_reached(pos.col);
        selections.extend_selection(pos);
    }

    /// Starts a fresh selection covering the cursor's character.
    pub fn selection_from_cursor(
        &self,
        cursor: &dyn CursorStore,
        selections: &mut dyn SelectionStore,
    ) {
        selections.clear_selections();
        selections.start_selection(cursor.position());
    }

    /// Removes all selections.
    pub fn clear_selections(&self, selections: &mut dyn SelectionStore) {
        selections.clear_selections();
    }

    // ==================== Camera control ====================

    /// Pans up one step if the guard admits it.
    pub fn scroll_up(&mut self) {
        self.camera.scroll_up(self.config.scroll_step_px);
    }

    /// Pans down one step if the guard admits it, measuring the document
    /// extent fresh for the limit.
    pub fn scroll_down(&mut self, doc: &dyn DocumentSource) {
        let extent = DocumentExtent::measure(doc, &self.metrics);
        self.camera.scroll_down(self.config.scroll_step_px, &extent);
    }

    /// Pans left one step if the guard admits it.
    pub fn scroll_left(&mut self) {
        self.camera.scroll_left(self.config.scroll_step_px);
    }

    /// Pans right one step if the guard admits it, measuring the document
    /// extent fresh for the limit.
    pub fn scroll_right(&mut self, doc: &dyn DocumentSource) {
        let extent = DocumentExtent::measure(doc, &self.metrics);
        self.camera.scroll_right(self.config.scroll_step_px, &extent);
    }

    /// Rotates one step counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.camera.rotate_left(self.config.rotation_step_deg);
    }

    /// Rotates one step clockwise.
    pub fn rotate_right(&mut self) {
        self.camera.rotate_right(self.config.rotation_step_deg);
    }

    /// Zooms in one step (shrinks the visible rectangle).
    pub fn zoom_in(&mut self) {
        self.camera.zoom(self.config.zoom_in_factor);
    }

    /// Zooms out one step (grows the visible rectangle).
    pub fn zoom_out(&mut self) {
        self.camera.zoom(self.config.zoom_out_factor);
    }
}
