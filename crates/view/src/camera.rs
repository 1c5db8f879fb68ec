//! Camera state and guarded pan/zoom/rotate arithmetic.
//!
//! The camera is the rectangle of document space currently visible: a
//! center, a size, and a rotation about that center. Panning is guarded by
//! scroll limits; zoom and rotation are unconditional.
//!
//! The guards check the **resulting** rectangle, and a failed guard is a
//! silent no-op, never an error:
//!
//! - Top/left: the moved rectangle's near edge must not cross the reserved
//!   gutter margin, so the line-number strip and the coordinate origin stay
//!   reachable.
//! - Bottom/right: the moved rectangle's far edge must stay within
//!   `max(document extent, view size) + overscroll`. The overscroll slack
//!   keeps the last line and column from sitting flush against the view
//!   edge at full scroll.
//!
//! Zoom has no minimum or maximum. That is a deliberate simplification:
//! callers wanting limits add them outside. This is a pure data structure
//! with no drawing dependencies, fully testable on its own.

use crate::extent::DocumentExtent;

/// The camera state handed to the draw sink each frame.
///
/// The sink applies this as its view transform: translate so `center` maps
/// to the middle of the output surface, scale by `output / view` size, and
/// rotate by `rotation_deg` about the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub center_x: f32,
    pub center_y: f32,
    pub view_width: f32,
    pub view_height: f32,
    pub rotation_deg: f32,
}

/// The visible rectangle of document space, with its scroll limits.
///
/// Created anchored at the reserved gutter margin with the top edge at
/// document top; mutated only by the pan/zoom/rotate/resize operations
/// below.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    center_x: f32,
    center_y: f32,
    view_width: f32,
    view_height: f32,
    rotation_deg: f32,
    /// Width of the reserved gutter margin; the left scroll limit is
    /// `-margin_width_px` and the top limit is 0.
    margin_width_px: f32,
    /// Additive slack past the document's far edges at full scroll.
    overscroll_px: f32,
}

impl Camera {
    /// Creates a camera anchored at the gutter margin.
    ///
    /// The initial rectangle has its left edge at `-margin_width_px` (so
    /// the gutter region is visible) and its top edge at document top.
    pub fn new(view_width: f32, view_height: f32, margin_width_px: f32, overscroll_px: f32) -> Self {
        Self {
            center_x: -margin_width_px + view_width / 2.0,
            center_y: view_height / 2.0,
            view_width,
            view_height,
            rotation_deg: 0.0,
            margin_width_px,
            overscroll_px,
        }
    }

    /// Returns the camera center's x coordinate.
    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    /// Returns the camera center's y coordinate.
    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    /// Returns the visible rectangle's width.
    pub fn view_width(&self) -> f32 {
        self.view_width
    }

    /// Returns the visible rectangle's height.
    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    /// Returns the rotation in degrees.
    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    /// Returns the transform to hand to the draw sink.
    pub fn transform(&self) -> CameraTransform {
        CameraTransform {
            center_x: self.center_x,
            center_y: self.center_y,
            view_width: self.view_width,
            view_height: self.view_height,
            rotation_deg: self.rotation_deg,
        }
    }

    /// The far scroll stop below the document.
    fn bottom_limit(&self, extent: &DocumentExtent) -> f32 {
        extent.total_height_px.max(self.view_height) + self.overscroll_px
    }

    /// The far scroll stop right of the document.
    fn right_limit(&self, extent: &DocumentExtent) -> f32 {
        extent.max_line_width_px.max(self.view_width) + self.overscroll_px
    }

    /// Pans up by `delta` if the moved top edge stays at or below document
    /// top. No-op otherwise.
    pub fn scroll_up(&mut self, delta: f32) {
        let moved_top = self.center_y - delta - self.view_height / 2.0;
        if moved_top >= 0.0 {
            self.center_y -= delta;
        }
    }

    /// Pans down by `delta` if the moved bottom edge stays within the
    /// document's bottom scroll stop. No-op otherwise.
    pub fn scroll_down(&mut self, delta: f32, extent: &DocumentExtent) {
        let moved_bottom = self.center_y + delta + self.view_height / 2.0;
        if moved_bottom <= self.bottom_limit(extent) {
            self.center_y += delta;
        }
    }

    /// Pans left by `delta` if the moved left edge stays at or right of the
    /// reserved gutter margin. No-op otherwise.
    pub fn scroll_left(&mut self, delta: f32) {
        let moved_left = self.center_x - delta - self.view_width / 2.0;
        if moved_left >= -self.margin_width_px {
            self.center_x -= delta;
        }
    }

    /// Pans right by `delta` if the moved right edge stays within the
    /// document's right scroll stop. No-op otherwise.
    pub fn scroll_right(&mut self, delta: f32, extent: &DocumentExtent) {
        let moved_right = self.center_x + delta + self.view_width / 2.0;
        if moved_right <= self.right_limit(extent) {
            self.center_x += delta;
        }
    }

    /// Rotates counter-clockwise by `step` degrees about the current
    /// center. Unconditional; rotation has no scroll-limit concept.
    pub fn rotate_left(&mut self, step: f32) {
        self.rotation_deg += step;
    }

    /// Rotates clockwise by `step` degrees about the current center.
    pub fn rotate_right(&mut self, step: f32) {
        self.rotation_deg -= step;
    }

    /// Scales the visible rectangle's dimensions by `factor`.
    ///
    /// A factor below 1 zooms in (less document visible), above 1 zooms
    /// out. The center does not move. No limits are enforced.
    pub fn zoom(&mut self, factor: f32) {
        self.view_width *= factor;
        self.view_height *= factor;
    }

    /// Replaces the camera rectangle outright, re-anchored at the gutter
    /// margin with the top edge at document top. Used on window resize.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.center_x = -self.margin_width_px + width / 2.0;
        self.center_y = height / 2.0;
        self.view_width = width;
        self.view_height = height;
        self.rotation_deg = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARGIN: f32 = 45.0;
    const OVERSCROLL: f32 = 20.0;

    fn camera(view_width: f32, view_height: f32) -> Camera {
        Camera::new(view_width, view_height, MARGIN, OVERSCROLL)
    }

    fn extent(width_px: f32, height_px: f32) -> DocumentExtent {
        DocumentExtent {
            line_count: 0,
            max_line_width_px: width_px,
            total_height_px: height_px,
        }
    }

    // ==================== Construction ====================

    #[test]
    fn new_anchors_left_edge_at_gutter_margin() {
        let cam = camera(200.0, 100.0);
        assert_eq!(cam.center_x() - cam.view_width() / 2.0, -MARGIN);
        assert_eq!(cam.center_y() - cam.view_height() / 2.0, 0.0);
        assert_eq!(cam.rotation_deg(), 0.0);
    }

    // ==================== Vertical panning ====================

    #[test]
    fn scroll_up_at_document_top_is_noop() {
        let mut cam = camera(200.0, 100.0);
        let before = cam.transform();
        cam.scroll_up(20.0);
        assert_eq!(cam.transform(), before);
    }

    #[test]
    fn scroll_down_then_up_round_trips() {
        let mut cam = camera(200.0, 100.0);
        let ext = extent(0.0, 300.0);

        cam.scroll_down(20.0, &ext);
        assert_eq!(cam.center_y(), 70.0);
        cam.scroll_up(20.0);
        assert_eq!(cam.center_y(), 50.0);
    }

    #[test]
    fn scroll_down_stops_at_document_bottom_plus_overscroll() {
        // view height 100, document height 300, overscroll 20:
        // the bottom stop is 320, so the center may reach 270 at most.
        let mut cam = camera(200.0, 100.0);
        let ext = extent(0.0, 300.0);

        for _ in 0..1000 {
            cam.scroll_down(20.0, &ext);
        }

        let limit = ext.total_height_px.max(cam.view_height()) + OVERSCROLL;
        assert!(cam.center_y() <= limit - cam.view_height() / 2.0);
        assert_eq!(cam.center_y(), 270.0);
    }

    #[test]
    fn scroll_down_past_limit_leaves_state_unchanged() {
        let mut cam = camera(200.0, 100.0);
        let ext = extent(0.0, 300.0);
        for _ in 0..1000 {
            cam.scroll_down(20.0, &ext);
        }

        let before = cam.transform();
        cam.scroll_down(20.0, &ext);
        assert_eq!(cam.transform(), before);
    }

    #[test]
    fn short_document_allows_only_the_overscroll_slack() {
        // When the document is shorter than the view, the stop is the view
        // height plus overscroll, so only the overscroll slack is pannable.
        let mut cam = camera(200.0, 100.0);
        let ext = extent(0.0, 40.0);

        cam.scroll_down(20.0, &ext);
        assert_eq!(cam.center_y(), 70.0);
        cam.scroll_down(20.0, &ext);
        assert_eq!(cam.center_y(), 70.0); // 90 + 50 > 120
    }

    // ==================== Horizontal panning ====================

    #[test]
    fn scroll_left_at_gutter_anchor_is_noop() {
        let mut cam = camera(200.0, 100.0);
        let before = cam.transform();
        cam.scroll_left(20.0);
        assert_eq!(cam.transform(), before);
    }

    #[test]
    fn scroll_right_then_left_round_trips() {
        let mut cam = camera(200.0, 100.0);
        let ext = extent(400.0, 0.0);

        cam.scroll_right(20.0, &ext);
        cam.scroll_left(20.0);
        assert_eq!(cam.center_x() - cam.view_width() / 2.0, -MARGIN);
    }

    #[test]
    fn scroll_right_stops_at_longest_line_plus_overscroll() {
        let mut cam = camera(200.0, 100.0);
        let ext = extent(400.0, 0.0);

        for _ in 0..1000 {
            cam.scroll_right(20.0, &ext);
        }

        let limit = ext.max_line_width_px.max(cam.view_width()) + OVERSCROLL;
        assert!(cam.center_x() + cam.view_width() / 2.0 <= limit);

        let before = cam.transform();
        cam.scroll_right(20.0, &ext);
        assert_eq!(cam.transform(), before);
    }

    #[test]
    fn narrow_document_uses_view_width_as_limit() {
        // max(document width, view width) keeps a window of scroll even for
        // a document narrower than the view.
        let mut cam = camera(200.0, 100.0);
        let ext = extent(10.0, 0.0);

        // Right edge starts at -45 + 200 = 155; the stop is 200 + 20 = 220.
        cam.scroll_right(20.0, &ext);
        assert_eq!(cam.center_x(), 75.0);
        cam.scroll_right(20.0, &ext);
        assert_eq!(cam.center_x(), 95.0);
        cam.scroll_right(20.0, &ext);
        assert_eq!(cam.center_x(), 115.0); // right edge lands exactly short of 220
        cam.scroll_right(20.0, &ext);
        assert_eq!(cam.center_x(), 115.0); // 135 + 100 > 220
    }

    // ==================== Rotation ====================

    #[test]
    fn rotation_accumulates_and_is_unconditional() {
        let mut cam = camera(200.0, 100.0);
        for _ in 0..100 {
            cam.rotate_left(2.0);
        }
        assert_eq!(cam.rotation_deg(), 200.0);

        cam.rotate_right(2.0);
        assert_eq!(cam.rotation_deg(), 198.0);
    }

    #[test]
    fn rotation_does_not_move_center() {
        let mut cam = camera(200.0, 100.0);
        let (cx, cy) = (cam.center_x(), cam.center_y());
        cam.rotate_left(45.0);
        assert_eq!((cam.center_x(), cam.center_y()), (cx, cy));
    }

    // ==================== Zoom ====================

    #[test]
    fn zoom_scales_dimensions_without_moving_center() {
        let mut cam = camera(200.0, 100.0);
        let (cx, cy) = (cam.center_x(), cam.center_y());

        cam.zoom(0.8);
        assert_eq!(cam.view_width(), 160.0);
        assert_eq!(cam.view_height(), 80.0);
        assert_eq!((cam.center_x(), cam.center_y()), (cx, cy));
    }

    #[test]
    fn reciprocal_zoom_restores_dimensions() {
        let mut cam = camera(200.0, 100.0);
        cam.zoom(0.8);
        cam.zoom(1.0 / 0.8);

        assert!((cam.view_width() - 200.0).abs() < 0.001);
        assert!((cam.view_height() - 100.0).abs() < 0.001);
    }

    #[test]
    fn zoom_is_unbounded() {
        let mut cam = camera(200.0, 100.0);
        for _ in 0..50 {
            cam.zoom(0.5);
        }
        assert!(cam.view_width() > 0.0);

        for _ in 0..100 {
            cam.zoom(2.0);
        }
        assert!(cam.view_width().is_finite());
    }

    // ==================== Resize ====================

    #[test]
    fn set_bounds_replaces_rectangle_and_re_anchors() {
        let mut cam = camera(200.0, 100.0);
        let ext = extent(800.0, 800.0);
        cam.scroll_down(20.0, &ext);
        cam.scroll_right(20.0, &ext);
        cam.rotate_left(30.0);
        cam.zoom(0.5);

        cam.set_bounds(640.0, 480.0);

        assert_eq!(cam.view_width(), 640.0);
        assert_eq!(cam.view_height(), 480.0);
        assert_eq!(cam.center_x() - cam.view_width() / 2.0, -MARGIN);
        assert_eq!(cam.center_y() - cam.view_height() / 2.0, 0.0);
        assert_eq!(cam.rotation_deg(), 0.0);
    }
}
