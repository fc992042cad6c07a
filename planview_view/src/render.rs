// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layered render pipeline.
//!
//! A frame is three ordered layers, each independently skippable:
//!
//! 1. Background: the paper sheet in print preview, otherwise meta-grid
//!    and grid (strictly in that order), plus the draft watermark.
//! 2. Entities: the recursive document pass with culling and per-entity
//!    pen resolution, then the absolute-zero marker.
//! 3. Overlays: the relative-zero marker and the transient overlay
//!    containers.
//!
//! Missing prerequisites (degenerate paper scale, empty overlay slots) are
//! silent skips, never errors.

use kurbo::{Point, Rect};

use planview_style::{
    Color, DraftRendering, EntityStyle, LineType, Pen, PenContext, ViewModes, resolve_pen,
};

use crate::overlay::OverlaySlot;
use crate::traits::{Document, DrawContext, Entity, GridProvider, RenderBackend};
use crate::view::GraphicView;

/// Backdrop behind the paper sheet in print preview.
fn paper_backdrop() -> Color {
    Color::from_rgb8(200, 200, 200)
}

/// Paper shadow, border, and page boundary color.
fn paper_frame() -> Color {
    Color::from_rgb8(64, 64, 64)
}

/// The paper sheet outside the printable area.
fn paper_sheet() -> Color {
    Color::from_rgb8(180, 180, 180)
}

/// Half-extent of the absolute-zero marker, in device pixels.
const ABSOLUTE_ZERO_RADIUS: f64 = 20.0;
/// Half-extent of the relative-zero marker, in device pixels.
const RELATIVE_ZERO_RADIUS: f64 = 5.0;

/// Watermark text drawn in the corners while draft mode is on.
const DRAFT_MARK: &str = "Draft";

impl GraphicView {
    /// Renders a full frame: background, entities, overlays.
    pub fn render(
        &mut self,
        doc: &dyn Document,
        grid: &mut dyn GridProvider,
        backend: &mut dyn RenderBackend,
    ) {
        self.render_background(doc, grid, backend);
        self.render_entities(doc, backend);
        self.render_overlays(doc, backend);
    }

    /// Layer 1: paper sheet in print preview, otherwise meta-grid, grid,
    /// and the draft watermark.
    ///
    /// The grid never shows under the paper. The meta-grid must go first:
    /// meta lines drawn over grid points would erase them.
    pub fn render_background(
        &mut self,
        doc: &dyn Document,
        grid: &mut dyn GridProvider,
        backend: &mut dyn RenderBackend,
    ) {
        if self.modes.contains(ViewModes::PRINT_PREVIEW) {
            self.draw_paper(doc, backend);
            return;
        }
        if doc.is_grid_on() {
            self.draw_meta_grid(grid, backend);
            self.draw_grid(&*grid, backend);
        }
        if self.modes.contains(ViewModes::DRAFT) {
            self.draw_draft_mark(backend);
        }
    }

    /// Layer 2: the recursive entity pass, then the absolute-zero marker
    /// (except in print preview).
    pub fn render_entities(&mut self, doc: &dyn Document, backend: &mut dyn RenderBackend) {
        doc.each_entity(&mut |e: &dyn Entity| self.draw_entity(e, doc, backend));
        if !self.modes.contains(ViewModes::PRINT_PREVIEW) {
            self.draw_absolute_zero(backend);
        }
    }

    /// Layer 3: relative-zero marker and overlay containers (except in
    /// print preview).
    pub fn render_overlays(&mut self, doc: &dyn Document, backend: &mut dyn RenderBackend) {
        if self.modes.contains(ViewModes::PRINT_PREVIEW) {
            return;
        }
        self.draw_relative_zero(backend);
        self.draw_overlay(doc, backend);
    }

    /// Draws one entity: visibility and print filters, viewport culling,
    /// pen resolution, draft degradation, recursion into containers, and
    /// the selection handles afterwards.
    fn draw_entity(&self, e: &dyn Entity, doc: &dyn Document, backend: &mut dyn RenderBackend) {
        if !e.is_visible() {
            return;
        }
        let printing = self.modes.contains(ViewModes::PRINTING);
        let preview = self.modes.contains(ViewModes::PRINT_PREVIEW);
        if (printing || preview) && (!e.is_printable() || e.is_construction()) {
            return;
        }
        if !printing && !e.kind().never_culled() && self.is_outside_viewport(e) {
            return;
        }

        let pen = resolve_pen(&e.pen(), entity_style(e), &self.pen_context(doc, false));
        backend.set_pen(&pen);

        let rendering = if self.modes.contains(ViewModes::DRAFT) {
            e.kind().draft_rendering()
        } else {
            DraftRendering::Full
        };
        match rendering {
            DraftRendering::BoundingBox => {
                backend.draw_rect(
                    self.viewport.to_device(e.min()),
                    self.viewport.to_device(e.max()),
                );
            }
            DraftRendering::Skipped => {}
            DraftRendering::Full => {
                if e.kind().is_container() {
                    e.each_child(&mut |child: &dyn Entity| self.draw_entity(child, doc, backend));
                } else {
                    e.draw(
                        backend,
                        &DrawContext {
                            viewport: &self.viewport,
                        },
                    );
                }
            }
        }

        // A selected container draws the handles for its whole subtree.
        if e.is_selected() && !(printing || preview) && !e.has_selected_parent() {
            self.draw_reference_points(e, backend);
        }
    }

    /// Device-space bounding box test against the viewport.
    fn is_outside_viewport(&self, e: &dyn Entity) -> bool {
        let vp = &self.viewport;
        vp.to_device_x(e.max().x) < 0.0
            || vp.to_device_x(e.min().x) > f64::from(vp.width())
            || vp.to_device_y(e.min().y) < 0.0
            || vp.to_device_y(e.max().y) > f64::from(vp.height())
    }

    /// Draws the reference-point handles of a selected entity.
    fn draw_reference_points(&self, e: &dyn Entity, backend: &mut dyn RenderBackend) {
        let points = e.reference_points();
        let count = points.len();
        for (i, p) in points.into_iter().enumerate() {
            let color = if self.modes.contains(ViewModes::DELETE_PREVIEW) {
                self.config.background()
            } else if i == 0 {
                self.config.start_handle
            } else if i + 1 == count {
                self.config.end_handle
            } else {
                self.config.handle
            };
            backend.draw_handle(self.viewport.to_device(p), color);
        }
    }

    /// Draws the paper sheet for the print preview.
    fn draw_paper(&self, doc: &dyn Document, backend: &mut dyn RenderBackend) {
        let scale = doc.paper_scale();
        if scale < 1.0e-6 {
            return;
        }

        let base = doc.paper_insertion_base();
        let area = doc.print_area_size(false);
        let v1 = self
            .viewport
            .to_device(Point::new((0.0 - base.x) / scale, (0.0 - base.y) / scale));
        let v2 = self.viewport.to_device(Point::new(
            (area.width - base.x) / scale,
            (area.height - base.y) / scale,
        ));

        let factor = self.viewport.factor();
        let unit_factor = doc.unit_factor();
        let margins = doc.margins();
        let margin_left = (margins.left * unit_factor * factor.x / scale) as i32;
        let margin_top = (margins.top * unit_factor * factor.y / scale) as i32;
        let margin_right = (margins.right * unit_factor * factor.x / scale) as i32;
        let margin_bottom = (margins.bottom * unit_factor * factor.y / scale) as i32;

        // Device Y grows down, so the print-area height comes out negative.
        let print_area_w = (v2.x - v1.x) as i32;
        let print_area_h = (v2.y - v1.y) as i32;
        let paper_x = v1.x as i32;
        let paper_y = v1.y as i32;
        // Margins between neighboring pages are not shown.
        let paper_w = print_area_w + margin_left + margin_right;
        let paper_h = print_area_h - margin_top - margin_bottom;

        backend.fill_rect(
            Rect::new(
                0.0,
                0.0,
                f64::from(self.viewport.width()),
                f64::from(self.viewport.height()),
            ),
            paper_backdrop(),
        );
        // Shadow, border, sheet, print area.
        backend.fill_rect(device_rect(paper_x + 6, paper_y + 6, paper_w, paper_h), paper_frame());
        backend.fill_rect(device_rect(paper_x, paper_y, paper_w, paper_h), paper_frame());
        backend.fill_rect(
            device_rect(paper_x + 1, paper_y - 1, paper_w - 2, paper_h + 2),
            paper_sheet(),
        );
        backend.fill_rect(
            device_rect(
                paper_x + 1 + margin_left,
                paper_y - 1 - margin_bottom,
                print_area_w - 2,
                print_area_h + 2,
            ),
            Color::WHITE,
        );

        // Page boundaries, unless the pages shrink to a few pixels.
        let pages_x = doc.pages_horizontal().max(1);
        let pages_y = doc.pages_vertical().max(1);
        if (print_area_w / pages_x).abs().min((print_area_h / pages_y).abs()) > 2 {
            for page in 1..pages_x {
                let offset = f64::from(print_area_w) * f64::from(page) / f64::from(pages_x);
                backend.fill_rect(
                    device_rect_f(
                        f64::from(paper_x + margin_left) + offset,
                        f64::from(paper_y),
                        1.0,
                        f64::from(paper_h),
                    ),
                    paper_frame(),
                );
            }
            for page in 1..pages_y {
                let offset = f64::from(print_area_h) * f64::from(page) / f64::from(pages_y);
                backend.fill_rect(
                    device_rect_f(
                        f64::from(paper_x),
                        f64::from(paper_y - margin_bottom) + offset,
                        f64::from(paper_w),
                        1.0,
                    ),
                    paper_frame(),
                );
            }
        }
    }

    /// Draws the grid: solid sub-cell lines or the dotted point array.
    fn draw_grid(&mut self, grid: &dyn GridProvider, backend: &mut dyn RenderBackend) {
        backend.set_pen(&Pen::new(self.config.grid, 0, LineType::Solid));

        let width = f64::from(self.viewport.width());
        let height = f64::from(self.viewport.height());
        if self.config.grid_type == 1 {
            // Solid grid: nine sub-cell lines below each meta line.
            let cell = grid.cell_size();
            for &x in grid.meta_x() {
                for i in 1..10 {
                    let device_x = self.viewport.to_device_x(x - f64::from(i) * cell.x);
                    backend.draw_line(Point::new(device_x, 0.0), Point::new(device_x, height));
                }
            }
            for &y in grid.meta_y() {
                for j in 1..10 {
                    let device_y = self.viewport.to_device_y(y - f64::from(j) * cell.y);
                    backend.draw_line(Point::new(0.0, device_y), Point::new(width, device_y));
                }
            }
        } else {
            for &p in grid.points() {
                backend.draw_grid_point(self.viewport.to_device(p));
            }
        }

        let status = grid.status_text();
        self.grid_status(&status);
    }

    /// Draws the meta-grid. Must run before [`GraphicView::draw_grid`].
    fn draw_meta_grid(&self, grid: &mut dyn GridProvider, backend: &mut dyn RenderBackend) {
        // The provider recomputes its layout here, once per frame.
        grid.update();

        let solid = self.config.grid_type == 1;
        let line_type = if solid { LineType::Solid } else { LineType::DotTiny };
        backend.set_pen(&Pen::new(self.config.meta_grid, 0, line_type));

        let factor = self.viewport.factor();
        let spacing = grid.meta_grid_spacing();
        let dx = (spacing.x * factor.x).abs();
        let dy = (spacing.y * factor.y).abs();
        let height = f64::from(self.viewport.height());
        let width = f64::from(self.viewport.width());

        for &x in grid.meta_x() {
            let device_x = self.viewport.to_device_x(x);
            backend.draw_line(Point::new(device_x, 0.0), Point::new(device_x, height));
            if grid.is_isometric() {
                // Isometric cells interleave a vertical at the half step.
                backend.draw_line(
                    Point::new(device_x + 0.5 * dx, 0.0),
                    Point::new(device_x + 0.5 * dx, height),
                );
            }
        }

        if grid.is_isometric() {
            if grid.meta_x().is_empty() || grid.meta_y().is_empty() || dx < 1.0 || dy < 1.0 {
                return;
            }
            let base = self
                .viewport
                .to_device(Point::new(grid.meta_x()[0], grid.meta_y()[0]));
            self.draw_isometric_meta_lines(base, dx, dy, backend);
        } else {
            for &y in grid.meta_y() {
                let device_y = self.viewport.to_device_y(y);
                backend.draw_line(Point::new(0.0, device_y), Point::new(width, device_y));
            }
        }
    }

    /// Draws the two diagonal line families of the isometric meta-grid.
    ///
    /// The families pass through the meta-grid lattice with device slopes
    /// of `±dy/dx`. Stepping the Y intercept by `dy` enumerates every
    /// family member: moving one lattice step in X shifts the intercept by
    /// exactly one step in Y.
    fn draw_isometric_meta_lines(
        &self,
        base: Point,
        dx: f64,
        dy: f64,
        backend: &mut dyn RenderBackend,
    ) {
        let width = f64::from(self.viewport.width());
        let height = f64::from(self.viewport.height());
        let slope = dy / dx;

        // Rising family: y = slope * x + c, visible for c in [-slope*width, height].
        let c0 = base.y - slope * base.x;
        let lo = ((-slope * width - c0) / dy).floor() as i64;
        let hi = ((height - c0) / dy).ceil() as i64;
        for k in lo..=hi {
            let c = c0 + (k as f64) * dy;
            backend.draw_line(Point::new(0.0, c), Point::new(width, c + slope * width));
        }

        // Falling family: y = -slope * x + c, visible for c in [0, height + slope*width].
        let c0 = base.y + slope * base.x;
        let lo = ((0.0 - c0) / dy).floor() as i64;
        let hi = ((height + slope * width - c0) / dy).ceil() as i64;
        for k in lo..=hi {
            let c = c0 + (k as f64) * dy;
            backend.draw_line(Point::new(0.0, c), Point::new(width, c - slope * width));
        }
    }

    /// Draws the "Draft" watermark in all four viewport corners.
    fn draw_draft_mark(&self, backend: &mut dyn RenderBackend) {
        backend.set_pen(&Pen::new(self.config.foreground(), 0, LineType::Solid));
        let width = f64::from(self.viewport.width());
        let height = f64::from(self.viewport.height());
        let size = backend.draw_text(Point::ZERO, DRAFT_MARK);
        backend.draw_text(Point::new(width - size.width, 0.0), DRAFT_MARK);
        backend.draw_text(Point::new(0.0, height - size.height), DRAFT_MARK);
        backend.draw_text(
            Point::new(width - size.width, height - size.height),
            DRAFT_MARK,
        );
    }

    /// Draws the absolute-zero marker: two axis-colored segments through
    /// the graph origin, optionally extended across the whole viewport.
    fn draw_absolute_zero(&self, backend: &mut dyn RenderBackend) {
        let origin = self.viewport.to_device(Point::ZERO);
        let width = f64::from(self.viewport.width());
        let height = f64::from(self.viewport.height());
        if origin.x + ABSOLUTE_ZERO_RADIUS < 0.0 || origin.x - ABSOLUTE_ZERO_RADIUS > width {
            return;
        }
        if origin.y + ABSOLUTE_ZERO_RADIUS < 0.0 || origin.y - ABSOLUTE_ZERO_RADIUS > height {
            return;
        }

        let (x0, x1, y0, y1) = if self.config.extend_axis_lines {
            (0.0, width, 0.0, height)
        } else {
            (
                origin.x - ABSOLUTE_ZERO_RADIUS,
                origin.x + ABSOLUTE_ZERO_RADIUS,
                origin.y - ABSOLUTE_ZERO_RADIUS,
                origin.y + ABSOLUTE_ZERO_RADIUS,
            )
        };

        backend.set_pen(&Pen::new(self.config.x_axis_extension, 0, LineType::Solid));
        backend.draw_line(Point::new(x0, origin.y), Point::new(x1, origin.y));
        backend.set_pen(&Pen::new(self.config.y_axis_extension, 0, LineType::Solid));
        backend.draw_line(Point::new(origin.x, y0), Point::new(origin.x, y1));
    }

    /// Draws the relative-zero marker: a cross plus circle at the last
    /// reference point. An invisible pen still tracks the position.
    fn draw_relative_zero(&self, backend: &mut dyn RenderBackend) {
        if !self.relative_zero.valid {
            return;
        }
        let line_type = if self.config.hide_relative_zero {
            LineType::NoPen
        } else {
            LineType::Solid
        };
        backend.set_pen(&Pen::new(self.config.relative_zero, 0, line_type));

        let p = self.viewport.to_device(self.relative_zero.position);
        let width = f64::from(self.viewport.width());
        let height = f64::from(self.viewport.height());
        if p.x + RELATIVE_ZERO_RADIUS < 0.0 || p.x - RELATIVE_ZERO_RADIUS > width {
            return;
        }
        if p.y + RELATIVE_ZERO_RADIUS < 0.0 || p.y - RELATIVE_ZERO_RADIUS > height {
            return;
        }

        backend.draw_line(
            Point::new(p.x - RELATIVE_ZERO_RADIUS, p.y),
            Point::new(p.x + RELATIVE_ZERO_RADIUS, p.y),
        );
        backend.draw_line(
            Point::new(p.x, p.y - RELATIVE_ZERO_RADIUS),
            Point::new(p.x, p.y + RELATIVE_ZERO_RADIUS),
        );
        backend.draw_circle(p, RELATIVE_ZERO_RADIUS);
    }

    /// Draws every registered overlay container, lowest slot first.
    fn draw_overlay(&mut self, doc: &dyn Document, backend: &mut dyn RenderBackend) {
        // Containers in overlays resolve their children's pens during
        // their own draw; the flag routes those through the overlay rules.
        self.modes.set(ViewModes::OVERLAY_DRAWING, true);

        let mut overlays = std::mem::take(&mut self.overlays);
        let mut slots: Vec<OverlaySlot> = overlays.keys().copied().collect();
        slots.sort_unstable();
        for slot in slots {
            let Some(entities) = overlays.get_mut(&slot) else {
                continue;
            };
            for entity in entities.iter_mut() {
                let pen = resolve_pen(
                    &entity.pen(),
                    entity_style(entity.as_ref()),
                    &self.pen_context(doc, true),
                );
                backend.set_pen(&pen);
                let selected = entity.is_selected();
                // Overlay entities are ephemeral clones; clearing the flag
                // keeps the selection pattern out of the overlay stroke.
                entity.set_selected(false);
                entity.draw(
                    backend,
                    &DrawContext {
                        viewport: &self.viewport,
                    },
                );
                if selected {
                    self.draw_reference_points(entity.as_ref(), backend);
                }
            }
        }
        self.overlays = overlays;

        self.modes.set(ViewModes::OVERLAY_DRAWING, false);
    }

    /// Assembles the pen-resolution context for the given document.
    fn pen_context<'a>(&'a self, doc: &dyn Document, in_overlay: bool) -> PenContext<'a> {
        PenContext {
            config: &self.config,
            modes: self.modes,
            in_overlay,
            unit_factor: doc.unit_factor(),
            paper_scale: doc.paper_scale(),
            dimension_scale: doc.dimension_scale(),
            device_per_unit: self.viewport.factor().x,
            pattern_offset: 0.0,
        }
    }
}

/// Entity state relevant to pen resolution.
fn entity_style(e: &dyn Entity) -> EntityStyle {
    EntityStyle {
        kind: e.kind(),
        selected: e.is_selected(),
        highlighted: e.is_highlighted(),
        transparent: e.is_transparent(),
    }
}

/// Normalized device rectangle from integer origin and (possibly
/// negative) extent.
fn device_rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
    device_rect_f(f64::from(x), f64::from(y), f64::from(w), f64::from(h))
}

fn device_rect_f(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h).abs()
}
