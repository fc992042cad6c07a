// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom, pan, and scroll planning.
//!
//! Every operation here follows the same shape: validate inputs, possibly
//! snapshot the history, mutate the viewport, request a redraw. They
//! differ only in which steps they skip; pan and scroll are not
//! undo-tracked, and a failed validation skips everything.

use kurbo::{Point, Size};

use planview_style::EntityKind;
use planview_transform::{MAX_SCALE, TOLERANCE};

use crate::traits::{Document, Entity};
use crate::view::GraphicView;

/// Zoom factors below this are rejected as invalid parameters.
const ZOOM_FACTOR_MIN: f64 = 1.0e-6;

/// Fixed scroll step in device pixels.
const SCROLL_STEP: i32 = 50;

/// Fallback scales for a zoom window that is degenerate on one axis.
const DEFAULT_WINDOW_SCALE_X: f64 = 480.0;
const DEFAULT_WINDOW_SCALE_Y: f64 = 640.0;

/// Cardinal scroll directions for [`GraphicView::zoom_scroll`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Shift the view content to the left.
    Left,
    /// Shift the view content to the right.
    Right,
    /// Shift the view content up.
    Up,
    /// Shift the view content down.
    Down,
}

impl GraphicView {
    /// Zooms in by `factor` around `center` (graph space).
    ///
    /// Without an explicit center the last pointer position is used, or
    /// the viewport midpoint if none was ever reported. Factors below the
    /// validity threshold are reported and change nothing.
    pub fn zoom_in(&mut self, factor: f64, center: Option<Point>) {
        if factor < ZOOM_FACTOR_MIN {
            log::warn!("zoom in: invalid factor {factor}");
            self.message("Invalid zoom factor. Zooming not changed");
            return;
        }
        let center = center.or(self.pointer).unwrap_or_else(|| {
            let mid = Point::new(
                f64::from(self.viewport.width()) / 2.0,
                f64::from(self.viewport.height()) / 2.0,
            );
            self.viewport.to_graph(mid)
        });

        // Shrink the visible window toward the center and fit it again.
        let inverse = 1.0 / factor;
        let corner1 = scale_about(self.viewport.to_graph(Point::ZERO), center, inverse);
        let corner2 = scale_about(
            self.viewport.to_graph(Point::new(
                f64::from(self.viewport.width()),
                f64::from(self.viewport.height()),
            )),
            center,
            inverse,
        );
        self.zoom_window(corner1, corner2, true);
    }

    /// Zooms out by `factor` around `center`; equivalent to zooming in by
    /// the reciprocal.
    pub fn zoom_out(&mut self, factor: f64, center: Option<Point>) {
        if factor < ZOOM_FACTOR_MIN {
            log::warn!("zoom out: invalid factor {factor}");
            self.message("Invalid zoom factor. Zooming not changed");
            return;
        }
        self.zoom_in(1.0 / factor, center);
    }

    /// Zooms in along X only, keeping the viewport midpoint fixed.
    pub fn zoom_in_x(&mut self, factor: f64) {
        let mid = self.viewport.width() / 2;
        let scaled = self.viewport.factor().x * factor;
        self.viewport.set_factor_x(scaled);
        let offset = f64::from(self.viewport.offset_x() - mid) * factor;
        self.viewport.set_offset_x(round(offset) + mid);
        self.request_redraw();
    }

    /// Zooms in along Y only, keeping the viewport midpoint fixed.
    pub fn zoom_in_y(&mut self, factor: f64) {
        let mid = self.viewport.height() / 2;
        let scaled = self.viewport.factor().y * factor;
        self.viewport.set_factor_y(scaled);
        let offset = f64::from(self.viewport.offset_y() - mid) * factor;
        self.viewport.set_offset_y(round(offset) + mid);
        self.request_redraw();
    }

    /// Zooms out along X only.
    pub fn zoom_out_x(&mut self, factor: f64) {
        if factor < ZOOM_FACTOR_MIN {
            log::warn!("zoom out x: invalid factor {factor}");
            self.message("Invalid zoom factor. Zooming not changed");
            return;
        }
        let scaled = self.viewport.factor().x / factor;
        self.viewport.set_factor_x(scaled);
        let offset = f64::from(self.viewport.offset_x()) / factor;
        self.viewport.set_offset_x(offset as i32);
        self.request_redraw();
    }

    /// Zooms out along Y only.
    pub fn zoom_out_y(&mut self, factor: f64) {
        if factor < ZOOM_FACTOR_MIN {
            log::warn!("zoom out y: invalid factor {factor}");
            self.message("Invalid zoom factor. Zooming not changed");
            return;
        }
        let scaled = self.viewport.factor().y / factor;
        self.viewport.set_factor_y(scaled);
        let offset = f64::from(self.viewport.offset_y()) / factor;
        self.viewport.set_offset_y(offset as i32);
        self.request_redraw();
    }

    /// Zooms to the graph-space window spanned by `corner1` and `corner2`.
    ///
    /// With `keep_aspect` the limiting axis sets both scales. A window
    /// that is degenerate on an axis falls back to a fixed default scale
    /// for that axis. If the window's device-pixel edges would leave the
    /// representable integer range, the request is reported and nothing
    /// changes.
    pub fn zoom_window(&mut self, corner1: Point, corner2: Point, keep_aspect: bool) {
        let mut v1 = corner1;
        let mut v2 = corner2;
        if v1.x > v2.x {
            std::mem::swap(&mut v1.x, &mut v2.x);
        }
        if v1.y > v2.y {
            std::mem::swap(&mut v1.y, &mut v2.y);
        }

        let width = f64::from(self.viewport.width());
        let height = f64::from(self.viewport.height());

        let mut zoom_x = DEFAULT_WINDOW_SCALE_X;
        let mut zoom_y = DEFAULT_WINDOW_SCALE_Y;
        if v2.x - v1.x > ZOOM_FACTOR_MIN {
            zoom_x = width / (v2.x - v1.x);
        }
        if v2.y - v1.y > ZOOM_FACTOR_MIN {
            zoom_y = height / (v2.y - v1.y);
        }
        if keep_aspect {
            let limiting = zoom_x.min(zoom_y);
            zoom_x = limiting;
            zoom_y = limiting;
        }
        zoom_x = zoom_x.abs();
        zoom_y = zoom_y.abs();

        // Window edges in device pixels under the new scale.
        let edges = [
            v1.x * zoom_x,
            v2.y * zoom_y,
            v2.x * zoom_x,
            v1.y * zoom_y,
        ];
        let [Some(pix_left), Some(pix_top), Some(pix_right), Some(pix_bottom)] =
            edges.map(device_pixel)
        else {
            self.message("Requested zooming factor out of range. Zooming not changed");
            return;
        };

        self.save_view();

        // Center the window; its left/top edge moves to the leftover half.
        let width = self.viewport.width();
        let height = self.viewport.height();
        self.viewport.set_offset(
            -pix_left + (width - pix_right + pix_left) / 2,
            -pix_top + (height - pix_bottom + pix_top) / 2,
        );
        self.viewport.set_factor_x(zoom_x);
        self.viewport.set_factor_y(zoom_y);
        self.request_redraw();
    }

    /// Fits the document bounds into the viewport.
    ///
    /// `include_origin` clamps the extents to include the axis origin;
    /// `keep_aspect_ratio` applies the limiting axis's scale to both. A
    /// document degenerate on one axis inherits the other axis's scale; a
    /// document degenerate on both is left alone.
    pub fn zoom_auto(
        &mut self,
        doc: &mut dyn Document,
        include_origin: bool,
        keep_aspect_ratio: bool,
    ) {
        doc.recalculate_bounds();

        let (sx, sy) = if include_origin {
            let extent = doc.max() - doc.min();
            (extent.x.max(0.0), extent.y.max(0.0))
        } else {
            let size = doc.size();
            (size.width, size.height)
        };

        let mut fx = 1.0;
        let mut fy = 1.0;
        let mut invalid_x = false;
        let mut invalid_y = false;
        if sx > TOLERANCE {
            fx = f64::from(self.viewport.inner_width()) / sx;
        } else {
            invalid_x = true;
        }
        if sy > TOLERANCE {
            fy = f64::from(self.viewport.inner_height()) / sy;
        } else {
            invalid_y = true;
        }

        match (invalid_x, invalid_y) {
            (true, true) => return,
            (true, false) => fx = fy,
            (false, true) => fy = fx,
            (false, false) if keep_aspect_ratio => {
                let limiting = fx.min(fy);
                fx = limiting;
                fy = limiting;
            }
            _ => {}
        }

        // Exclude factors outside the representable zoom range.
        let mut rejected_x = false;
        let mut rejected_y = false;
        if fx < TOLERANCE || fx > MAX_SCALE {
            fx = 1.0;
            rejected_x = true;
        }
        if fy < TOLERANCE || fy > MAX_SCALE {
            fy = 1.0;
            rejected_y = true;
        }
        if rejected_x && rejected_y {
            log::warn!("zoom auto: abandoned, factors out of range");
            return;
        }

        self.save_view();
        self.viewport.set_factor_x(fx);
        self.viewport.set_factor_y(fy);

        let min = doc.min();
        let size = doc.size();
        self.viewport.center_offset_x(min.x, size.width);
        self.viewport.center_offset_y(min.y, size.height);
        self.request_redraw();
    }

    /// Fits the vertical extent of the visible straight lines.
    ///
    /// Only straight line segments whose device X span touches the
    /// viewport are considered; arcs, circles, and text inside the visible
    /// window are ignored. Known limitation, kept as-is.
    pub fn zoom_auto_y(&mut self, doc: &dyn Document, include_origin: bool) {
        let mut min_y = f64::MAX;
        let mut max_y = -f64::MAX;
        let width = f64::from(self.viewport.width());
        let viewport = &self.viewport;
        doc.each_entity(&mut |e: &dyn Entity| {
            if e.kind() != EntityKind::Line {
                return;
            }
            let Some((start, end)) = e.endpoints() else {
                return;
            };
            let x1 = viewport.to_device_x(start.x);
            let x2 = viewport.to_device_x(end.x);
            if (x1 > 0.0 && x1 < width) || (x2 > 0.0 && x2 < width) {
                min_y = min_y.min(start.y).min(end.y);
                max_y = max_y.max(start.y).max(end.y);
            }
        });

        let visible_height = if include_origin {
            max_y.max(0.0) - min_y.min(0.0)
        } else {
            max_y - min_y
        };

        let mut no_change = visible_height < 1.0;
        let mut fy = 1.0;
        if visible_height > ZOOM_FACTOR_MIN {
            fy = f64::from(self.viewport.inner_height()) / visible_height;
            if self.viewport.factor().y < ZOOM_FACTOR_MIN {
                no_change = true;
            }
        }
        if no_change {
            return;
        }

        self.viewport.set_factor_y(fy);
        let factor_y = self.viewport.factor().y;
        let offset = (f64::from(self.viewport.inner_height()) - visible_height * factor_y) / 2.0
            - min_y * factor_y;
        self.viewport
            .set_offset_y(offset as i32 + self.viewport.borders().bottom);
        self.request_redraw();
    }

    /// Fits the print area into the viewport, centered on the document
    /// bounds.
    pub fn zoom_page(&mut self, doc: &dyn Document) {
        let paper_scale = doc.paper_scale();
        let area = doc.print_area_size(false);
        let in_view = if paper_scale > TOLERANCE {
            Size::new(area.width / paper_scale, area.height / paper_scale)
        } else {
            Size::ZERO
        };

        let fx = if in_view.width > TOLERANCE {
            f64::from(self.viewport.inner_width()) / in_view.width
        } else {
            1.0
        };
        let fy = if in_view.height > TOLERANCE {
            f64::from(self.viewport.inner_height()) / in_view.height
        } else {
            1.0
        };
        let mut uniform = fx.min(fy);
        if uniform < TOLERANCE {
            uniform = 1.0;
        }

        self.viewport.set_factor_x(uniform);
        self.viewport.set_factor_y(uniform);

        let min = doc.min();
        let size = doc.size();
        self.viewport.center_offset_x(min.x, size.width);
        self.viewport.center_offset_y(min.y, size.height);
        self.request_redraw();
    }

    /// Fits the print area (margins included) into the viewport, honoring
    /// the paper insertion base precisely instead of centering on the
    /// document.
    pub fn zoom_page_ex(&mut self, doc: &dyn Document) {
        let paper_scale = doc.paper_scale();
        if paper_scale < TOLERANCE {
            return;
        }

        let unit_factor = doc.unit_factor();
        let margins = doc.margins();
        let margins_width = (margins.left + margins.right) * unit_factor;
        let margins_height = (margins.top + margins.bottom) * unit_factor;
        let area = doc.print_area_size(true);
        let in_view = Size::new(
            (area.width + margins_width) / paper_scale,
            (area.height + margins_height) / paper_scale,
        );

        let fx = if in_view.width > TOLERANCE {
            f64::from(self.viewport.inner_width()) / in_view.width
        } else {
            1.0
        };
        let fy = if in_view.height > TOLERANCE {
            f64::from(self.viewport.inner_height()) / in_view.height
        } else {
            1.0
        };
        let mut uniform = fx.min(fy);
        if uniform < TOLERANCE {
            uniform = 1.0;
        }

        self.viewport.set_factor_x(uniform);
        self.viewport.set_factor_y(uniform);

        let base = doc.paper_insertion_base();
        let factor = self.viewport.factor();
        let borders = self.viewport.borders();
        let offset_x = ((f64::from(self.viewport.inner_width()) - in_view.width * factor.x) / 2.0
            + base.x * factor.x / paper_scale) as i32
            + borders.left;
        let offset_y = ((f64::from(self.viewport.inner_height()) - in_view.height * factor.y)
            / 2.0
            + base.y * factor.y / paper_scale) as i32
            + borders.bottom;
        self.viewport.set_offset(offset_x, offset_y);
        self.request_redraw();
    }

    /// Pans by a device-space delta. Not undo-tracked.
    pub fn zoom_pan(&mut self, dx: i32, dy: i32) {
        self.viewport
            .set_offset_x(self.viewport.offset_x() + dx);
        self.viewport
            .set_offset_y(self.viewport.offset_y() - dy);
        self.request_redraw();
    }

    /// Scrolls a fixed step in a cardinal direction. Not undo-tracked.
    pub fn zoom_scroll(&mut self, direction: ScrollDirection) {
        match direction {
            ScrollDirection::Up => {
                self.viewport
                    .set_offset_y(self.viewport.offset_y() - SCROLL_STEP);
            }
            ScrollDirection::Down => {
                self.viewport
                    .set_offset_y(self.viewport.offset_y() + SCROLL_STEP);
            }
            ScrollDirection::Right => {
                self.viewport
                    .set_offset_x(self.viewport.offset_x() + SCROLL_STEP);
            }
            ScrollDirection::Left => {
                self.viewport
                    .set_offset_x(self.viewport.offset_x() - SCROLL_STEP);
            }
        }
        self.request_redraw();
    }
}

/// Scales `p` toward `center` by `s`.
fn scale_about(p: Point, center: Point, s: f64) -> Point {
    center + (p - center) * s
}

/// Round half away from zero.
fn round(v: f64) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}

/// Converts a device-pixel edge to `i32`, refusing values outside the
/// representable range.
fn device_pixel(v: f64) -> Option<i32> {
    if v.is_finite() && v.abs() < f64::from(i32::MAX) {
        Some(v as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollDirection;
    use crate::fixtures::{RecordingObserver, TestDocument, TestEntity, ViewEvent};
    use crate::view::GraphicView;
    use kurbo::{Point, Size};
    use planview_style::ViewConfig;

    fn view() -> GraphicView {
        GraphicView::new(800, 600, ViewConfig::default())
    }

    #[test]
    fn window_scenario_fits_and_centers() {
        let mut v = view();
        v.zoom_window(Point::new(0.0, 0.0), Point::new(100.0, 100.0), true);

        // min(800/100, 600/100) = 6 on both axes.
        assert_eq!(v.viewport().factor().x, 6.0);
        assert_eq!(v.viewport().factor().y, 6.0);
        // The window center maps to the viewport center.
        assert_eq!(v.viewport().to_device_x(50.0), 400.0);
        assert_eq!(v.viewport().to_device_y(50.0), 300.0);
    }

    #[test]
    fn window_aspect_lock_equalizes_scales() {
        let mut v = view();
        v.zoom_window(Point::new(-3.0, 10.0), Point::new(121.0, 17.0), true);
        assert_eq!(v.viewport().factor().x, v.viewport().factor().y);
    }

    #[test]
    fn window_without_aspect_lock_stretches() {
        let mut v = view();
        v.zoom_window(Point::new(0.0, 0.0), Point::new(100.0, 100.0), false);
        assert_eq!(v.viewport().factor().x, 8.0);
        assert_eq!(v.viewport().factor().y, 6.0);
    }

    #[test]
    fn degenerate_window_axis_falls_back_to_default_scale() {
        let mut v = view();
        v.zoom_window(Point::new(0.0, 5.0), Point::new(100.0, 5.0), false);
        assert_eq!(v.viewport().factor().x, 8.0);
        assert_eq!(v.viewport().factor().y, 640.0);
    }

    #[test]
    fn window_overflow_is_reported_and_harmless() {
        let (observer, events) = RecordingObserver::new();
        let mut v = view();
        v.set_observer(Box::new(observer));

        v.zoom_window(Point::new(0.0, 0.0), Point::new(1.0e-3, 1.0e-3), true);
        let huge = v.viewport().factor().x;
        assert!(huge > 500_000.0);

        // Corners far from the origin at an enormous scale overflow the
        // pixel range.
        v.zoom_window(
            Point::new(1.0e7, 1.0e7),
            Point::new(1.0e7 + 1.0e-3, 1.0e7 + 1.0e-3),
            true,
        );
        assert_eq!(v.viewport().factor().x, huge);
        assert!(events.borrow().iter().any(|e| matches!(
            e,
            ViewEvent::Message(m) if m.contains("out of range")
        )));
    }

    #[test]
    fn symmetric_zoom_restores_the_scale() {
        let mut v = view();
        let center = Some(Point::new(40.0, 30.0));
        v.zoom_in(2.0, center);
        assert_eq!(v.viewport().factor().x, 2.0);
        v.zoom_out(2.0, center);
        assert!((v.viewport().factor().x - 1.0).abs() < 1.0e-9);
        assert!((v.viewport().factor().y - 1.0).abs() < 1.0e-9);
    }

    #[test]
    fn invalid_factors_change_nothing() {
        let (observer, events) = RecordingObserver::new();
        let mut v = view();
        v.set_observer(Box::new(observer));
        v.viewport_mut().set_offset(12, 34);

        v.zoom_in(0.0, Some(Point::ZERO));
        v.zoom_out(-2.0, None);
        v.zoom_out_x(-1.0);
        v.zoom_out_y(0.0);

        assert_eq!(v.viewport().factor().x, 1.0);
        assert_eq!(v.viewport().factor().y, 1.0);
        assert_eq!(v.viewport().offset_x(), 12);
        assert_eq!(v.viewport().offset_y(), 34);
        assert!(!v.has_previous_view());
        let messages = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ViewEvent::Message(_)))
            .count();
        assert_eq!(messages, 4);
    }

    #[test]
    fn zoom_in_x_recenters_on_the_midpoint() {
        let mut v = view();
        v.viewport_mut().set_offset(500, 0);
        v.zoom_in_x(2.0);
        assert_eq!(v.viewport().factor().x, 2.0);
        // (500 - 400) * 2 + 400
        assert_eq!(v.viewport().offset_x(), 600);
    }

    #[test]
    fn zoom_out_x_divides_scale_and_offset() {
        let mut v = view();
        v.viewport_mut().set_offset(500, 0);
        v.zoom_out_x(2.0);
        assert_eq!(v.viewport().factor().x, 0.5);
        assert_eq!(v.viewport().offset_x(), 250);
    }

    #[test]
    fn auto_zoom_fits_and_centers_the_document() {
        let mut v = view();
        let mut doc = TestDocument::with_bounds(Point::ZERO, Point::new(200.0, 100.0));

        v.zoom_auto(&mut doc, false, true);
        // min(800/200, 600/100) = 4.
        assert_eq!(v.viewport().factor().x, 4.0);
        assert_eq!(v.viewport().factor().y, 4.0);
        // Document center lands on the viewport center.
        assert_eq!(v.viewport().to_device_x(100.0), 400.0);
        assert_eq!(v.viewport().to_device_y(50.0), 300.0);
        assert!(v.has_previous_view());
    }

    #[test]
    fn auto_zoom_stretches_without_aspect_lock() {
        let mut v = view();
        let mut doc = TestDocument::with_bounds(Point::ZERO, Point::new(200.0, 100.0));
        v.zoom_auto(&mut doc, false, false);
        assert_eq!(v.viewport().factor().x, 4.0);
        assert_eq!(v.viewport().factor().y, 6.0);
    }

    #[test]
    fn auto_zoom_degenerate_axis_inherits_the_other() {
        let mut v = view();
        // A purely horizontal document: zero Y extent.
        let mut doc = TestDocument::with_bounds(Point::ZERO, Point::new(200.0, 0.0));
        v.zoom_auto(&mut doc, false, true);
        assert_eq!(v.viewport().factor().x, 4.0);
        assert_eq!(v.viewport().factor().y, 4.0);
    }

    #[test]
    fn auto_zoom_on_an_empty_document_is_abandoned() {
        let mut v = view();
        let mut doc = TestDocument::with_bounds(Point::ZERO, Point::ZERO);
        v.viewport_mut().set_offset(77, 88);
        v.zoom_auto(&mut doc, false, true);
        assert_eq!(v.viewport().factor().x, 1.0);
        assert_eq!(v.viewport().offset_x(), 77);
        assert!(!v.has_previous_view());
    }

    #[test]
    fn auto_zoom_y_considers_only_visible_lines() {
        let mut v = view();
        let mut doc = TestDocument::with_bounds(Point::ZERO, Point::new(800.0, 600.0));
        // One line inside the device X range, one far outside.
        doc.entities.push(TestEntity::line(100.0, 50.0, 200.0, 250.0));
        doc.entities.push(TestEntity::line(5000.0, -900.0, 6000.0, 900.0));

        v.zoom_auto_y(&doc, false);
        // Visible height 200 -> fy = 600 / 200 = 3.
        assert_eq!(v.viewport().factor().y, 3.0);
        // The fitted band fills the viewport: y=50 at the bottom edge,
        // y=250 at the top.
        assert_eq!(v.viewport().to_device_y(50.0), 600.0);
        assert_eq!(v.viewport().to_device_y(250.0), 0.0);
    }

    #[test]
    fn zoom_page_fits_the_print_area() {
        let mut v = view();
        let mut doc = TestDocument::with_bounds(Point::ZERO, Point::new(200.0, 100.0));
        doc.print_area = Size::new(200.0, 100.0);
        doc.paper_scale = 0.5;

        v.zoom_page(&doc);
        // Area in view units: 400 x 200 -> min(800/400, 600/200) = 2.
        assert_eq!(v.viewport().factor().x, 2.0);
        assert_eq!(v.viewport().factor().y, 2.0);
    }

    #[test]
    fn zoom_page_degenerate_area_falls_back_to_unit_scale() {
        let mut v = view();
        let doc = TestDocument::with_bounds(Point::ZERO, Point::new(200.0, 100.0));
        v.zoom_page(&doc);
        assert_eq!(v.viewport().factor().x, 1.0);
    }

    #[test]
    fn zoom_page_ex_honors_the_insertion_base() {
        let mut v = view();
        let mut doc = TestDocument::with_bounds(Point::ZERO, Point::new(200.0, 100.0));
        doc.print_area = Size::new(400.0, 300.0);
        doc.insertion_base = Point::new(10.0, 20.0);

        v.zoom_page_ex(&doc);
        // min(800/400, 600/300) = 2; offsets carry the base point.
        assert_eq!(v.viewport().factor().x, 2.0);
        assert_eq!(v.viewport().offset_x(), 20);
        assert_eq!(v.viewport().offset_y(), 40);
    }

    #[test]
    fn pan_and_scroll_translate_without_history() {
        let mut v = view();
        v.zoom_pan(30, 40);
        assert_eq!(v.viewport().offset_x(), 30);
        assert_eq!(v.viewport().offset_y(), -40);

        v.zoom_scroll(ScrollDirection::Left);
        v.zoom_scroll(ScrollDirection::Up);
        assert_eq!(v.viewport().offset_x(), -20);
        assert_eq!(v.viewport().offset_y(), -90);
        assert!(!v.has_previous_view());
    }

    #[test]
    fn frozen_zoom_keeps_the_scale() {
        let mut v = view();
        v.viewport_mut().freeze_zoom(true);
        v.zoom_window(Point::new(0.0, 0.0), Point::new(100.0, 100.0), true);
        assert_eq!(v.viewport().factor().x, 1.0);
        assert_eq!(v.viewport().factor().y, 1.0);
    }
}
