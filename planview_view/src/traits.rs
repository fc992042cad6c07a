// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces of the view core.
//!
//! The view never owns a document, a grid layout, or pixels. It drives
//! these traits, which the host implements; all of them are object-safe
//! and most methods carry defaults so small hosts (and tests) implement
//! only what they care about.

use kurbo::{Point, Rect, Size, Vec2};
use planview_style::{Color, EntityKind, Pen};
use planview_transform::Viewport;

/// Page margins in millimeters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Margins {
    /// Left margin.
    pub left: f64,
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
}

/// Context handed to an entity when it rasterizes itself.
#[derive(Debug)]
pub struct DrawContext<'a> {
    /// The viewport, for graph-to-device conversion.
    pub viewport: &'a Viewport,
}

/// A drawable entity of the document (or of an overlay container).
///
/// The view core consults classification, state flags, and the bounding
/// box; actual geometry stays on the other side of [`Entity::draw`], which
/// is expected to emit device-coordinate primitives through the backend.
pub trait Entity {
    /// Entity classification; drives container recursion, culling
    /// exemptions, and pen special cases.
    fn kind(&self) -> EntityKind;

    /// Minimum corner of the axis-aligned bounding box, in graph space.
    fn min(&self) -> Point;

    /// Maximum corner of the axis-aligned bounding box, in graph space.
    fn max(&self) -> Point;

    /// The intrinsic pen (resolved against layer/block defaults by the
    /// document model, not by the view).
    fn pen(&self) -> Pen;

    /// Rasterizes the entity through the backend. The effective pen has
    /// already been set.
    fn draw(&self, backend: &mut dyn RenderBackend, ctx: &DrawContext<'_>);

    /// Entity is visible at all.
    fn is_visible(&self) -> bool {
        true
    }

    /// Entity is part of the current selection.
    fn is_selected(&self) -> bool {
        false
    }

    /// Overrides the selection flag. Only called on overlay entities,
    /// which are ephemeral clones and safe to mutate.
    fn set_selected(&mut self, _selected: bool) {}

    /// Entity is hovered/highlighted.
    fn is_highlighted(&self) -> bool {
        false
    }

    /// Entity is drawn in the background color.
    fn is_transparent(&self) -> bool {
        false
    }

    /// Entity appears on printed output.
    fn is_printable(&self) -> bool {
        true
    }

    /// Entity lives on a construction layer (screen only, infinite
    /// extent).
    fn is_construction(&self) -> bool {
        false
    }

    /// Some ancestor container is itself selected; reference points are
    /// then drawn by the ancestor, not per child.
    fn has_selected_parent(&self) -> bool {
        false
    }

    /// Editable reference points, in graph space. First and last get the
    /// start/end handle colors.
    fn reference_points(&self) -> Vec<Point> {
        Vec::new()
    }

    /// Start and end points for straight line segments, `None` for every
    /// other kind.
    fn endpoints(&self) -> Option<(Point, Point)> {
        None
    }

    /// Visits direct children; non-containers have none.
    fn each_child(&self, _visit: &mut dyn FnMut(&dyn Entity)) {}
}

/// The document being viewed: entities, bounds, and paper geometry.
///
/// Lifetime and ownership stay with the caller; the view only borrows a
/// document for the duration of an operation.
pub trait Document {
    /// Visits the top-level entities in drawing order.
    fn each_entity(&self, visit: &mut dyn FnMut(&dyn Entity));

    /// Minimum corner of the document bounds, in graph space.
    fn min(&self) -> Point;

    /// Maximum corner of the document bounds, in graph space.
    fn max(&self) -> Point;

    /// Extent of the document bounds.
    fn size(&self) -> Size {
        (self.max() - self.min()).to_size()
    }

    /// Recomputes the document bounds; called before auto-fitting.
    fn recalculate_bounds(&mut self) {}

    /// Whether the grid should be drawn for this document.
    fn is_grid_on(&self) -> bool {
        true
    }

    /// Drawing units per millimeter.
    fn unit_factor(&self) -> f64 {
        1.0
    }

    /// Paper scale of the drawing (paper units per drawing unit).
    fn paper_scale(&self) -> f64 {
        1.0
    }

    /// Size of the printable area in drawing units, optionally including
    /// the margins.
    fn print_area_size(&self, _include_margins: bool) -> Size {
        Size::ZERO
    }

    /// Insertion base point of the paper, in drawing units.
    fn paper_insertion_base(&self) -> Point {
        Point::ZERO
    }

    /// Page margins in millimeters.
    fn margins(&self) -> Margins {
        Margins::default()
    }

    /// Number of pages the print area spans horizontally.
    fn pages_horizontal(&self) -> i32 {
        1
    }

    /// Number of pages the print area spans vertically.
    fn pages_vertical(&self) -> i32 {
        1
    }

    /// The drawing's dimension-scale variable, used for printed line
    /// widths when the view scales them.
    fn dimension_scale(&self) -> f64 {
        1.0
    }
}

/// Crosshair orientation of the snapper cursor, as dictated by the grid.
///
/// Isometric grids slant the crosshair toward one of the three isometric
/// planes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CrosshairType {
    /// Ordinary horizontal/vertical crosshair.
    #[default]
    Orthogonal,
    /// Left isometric plane.
    IsoLeft,
    /// Top isometric plane.
    IsoTop,
    /// Right isometric plane.
    IsoRight,
}

/// Grid and meta-grid layout for the current view.
///
/// The provider owns spacing decisions; the view only places what it is
/// given. [`GridProvider::update`] is invoked once per meta-grid draw so
/// the layout can track the current zoom.
pub trait GridProvider {
    /// Recomputes the grid layout for the current view state.
    fn update(&mut self);

    /// Whether the grid is isometric.
    fn is_isometric(&self) -> bool {
        false
    }

    /// Crosshair orientation matching the grid.
    fn crosshair_type(&self) -> CrosshairType {
        CrosshairType::default()
    }

    /// Size of one grid cell, in graph units.
    fn cell_size(&self) -> Vec2;

    /// Spacing between meta-grid lines, in graph units.
    fn meta_grid_spacing(&self) -> Vec2;

    /// Ordered X coordinates of the vertical meta-grid lines.
    fn meta_x(&self) -> &[f64];

    /// Ordered Y coordinates of the horizontal meta-grid lines.
    fn meta_y(&self) -> &[f64];

    /// Grid points for the dotted grid mode, in graph space.
    fn points(&self) -> &[Point];

    /// Human-readable spacing summary, surfaced through
    /// [`ViewObserver::grid_status`].
    fn status_text(&self) -> String;
}

/// Device-coordinate drawing primitives.
///
/// The backend holds the current pen between [`RenderBackend::set_pen`]
/// calls. Rectangles may arrive unnormalized on the Y axis (device Y grows
/// downward while graph Y grows up); stroke primitives are expected to
/// clip to the surface themselves.
pub trait RenderBackend {
    /// Sets the pen used by subsequent stroke primitives.
    fn set_pen(&mut self, pen: &Pen);

    /// Strokes a line segment.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Strokes an axis-aligned rectangle given two opposite corners.
    fn draw_rect(&mut self, corner1: Point, corner2: Point);

    /// Fills an axis-aligned rectangle with a color, ignoring the pen.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes a circle.
    fn draw_circle(&mut self, center: Point, radius: f64);

    /// Draws text anchored at the top-left and returns the laid-out
    /// extent.
    fn draw_text(&mut self, top_left: Point, text: &str) -> Size;

    /// Draws a single grid point.
    fn draw_grid_point(&mut self, pos: Point);

    /// Draws a reference-point handle marker.
    fn draw_handle(&mut self, pos: Point, color: Color);
}

/// Host notifications.
///
/// All methods default to no-ops. A redraw request is request-only: the
/// host coalesces them and repaints on its next paint cycle.
pub trait ViewObserver {
    /// The view changed and wants to be repainted.
    fn redraw_requested(&mut self) {}

    /// The view history transitioned between empty and non-empty.
    fn history_availability(&mut self, _has_previous: bool) {}

    /// A user-facing message (invalid zoom factor, range overflow).
    fn command_message(&mut self, _message: &str) {}

    /// The relative-zero marker moved.
    fn relative_zero_changed(&mut self, _position: Point) {}

    /// New grid status text is available.
    fn grid_status(&mut self, _status: &str) {}
}
