// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory fakes shared by the unit tests: a recording backend, a
//! minimal entity/document model, a canned grid provider, and an
//! event-collecting observer.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};

use planview_style::{Color, EntityKind, LineType, Pen};

use crate::traits::{
    Document, DrawContext, Entity, GridProvider, Margins, RenderBackend, ViewObserver,
};

/// Collapses a color to its 8-bit RGB components for easy comparison.
pub(crate) fn rgb(color: Color) -> [u8; 3] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b]
}

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Pen { color: [u8; 3], line_type: LineType },
    Line(Point, Point),
    Rect(Point, Point),
    FillRect(Rect, [u8; 3]),
    Circle(Point, f64),
    Text(Point, String),
    GridPoint(Point),
    Handle(Point, [u8; 3]),
}

/// Backend that records every call for inspection.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub ops: Vec<Op>,
}

impl RecordingBackend {
    /// Pairs every draw op with the pen that was current when it was
    /// issued.
    pub(crate) fn with_pen(&self) -> Vec<([u8; 3], LineType, Op)> {
        let mut current = ([0, 0, 0], LineType::Solid);
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                Op::Pen { color, line_type } => current = (*color, *line_type),
                other => out.push((current.0, current.1, other.clone())),
            }
        }
        out
    }
}

impl RenderBackend for RecordingBackend {
    fn set_pen(&mut self, pen: &Pen) {
        self.ops.push(Op::Pen {
            color: rgb(pen.color),
            line_type: pen.line_type,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.ops.push(Op::Line(from, to));
    }

    fn draw_rect(&mut self, corner1: Point, corner2: Point) {
        self.ops.push(Op::Rect(corner1, corner2));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::FillRect(rect, rgb(color)));
    }

    fn draw_circle(&mut self, center: Point, radius: f64) {
        self.ops.push(Op::Circle(center, radius));
    }

    fn draw_text(&mut self, top_left: Point, text: &str) -> Size {
        self.ops.push(Op::Text(top_left, text.to_owned()));
        Size::new(40.0, 12.0)
    }

    fn draw_grid_point(&mut self, pos: Point) {
        self.ops.push(Op::GridPoint(pos));
    }

    fn draw_handle(&mut self, pos: Point, color: Color) {
        self.ops.push(Op::Handle(pos, rgb(color)));
    }
}

/// Distinctive default pen color, chosen to collide with no config color.
pub(crate) const ENTITY_COLOR: [u8; 3] = [0x12, 0x34, 0x56];

/// Minimal entity: a bounding box plus flags. Draws itself as a single
/// line from its min to its max corner.
#[derive(Debug)]
pub(crate) struct TestEntity {
    pub kind: EntityKind,
    pub min: Point,
    pub max: Point,
    pub pen: Pen,
    pub visible: bool,
    pub selected: bool,
    pub highlighted: bool,
    pub transparent: bool,
    pub printable: bool,
    pub construction: bool,
    pub parent_selected: bool,
    pub ref_points: Vec<Point>,
    pub children: Vec<TestEntity>,
}

impl TestEntity {
    pub(crate) fn new(kind: EntityKind, min: Point, max: Point) -> Self {
        Self {
            kind,
            min,
            max,
            pen: Pen::new(
                Color::from_rgb8(ENTITY_COLOR[0], ENTITY_COLOR[1], ENTITY_COLOR[2]),
                0,
                LineType::Solid,
            ),
            visible: true,
            selected: false,
            highlighted: false,
            transparent: false,
            printable: true,
            construction: false,
            parent_selected: false,
            ref_points: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(
            EntityKind::Line,
            Point::new(x1.min(x2), y1.min(y2)),
            Point::new(x1.max(x2), y1.max(y2)),
        )
    }

    pub(crate) fn circle(center: Point, radius: f64) -> Self {
        Self::new(
            EntityKind::Circle,
            Point::new(center.x - radius, center.y - radius),
            Point::new(center.x + radius, center.y + radius),
        )
    }
}

impl Entity for TestEntity {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn min(&self) -> Point {
        self.min
    }

    fn max(&self) -> Point {
        self.max
    }

    fn pen(&self) -> Pen {
        self.pen
    }

    fn draw(&self, backend: &mut dyn RenderBackend, ctx: &DrawContext<'_>) {
        backend.draw_line(
            ctx.viewport.to_device(self.min),
            ctx.viewport.to_device(self.max),
        );
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn is_transparent(&self) -> bool {
        self.transparent
    }

    fn is_printable(&self) -> bool {
        self.printable
    }

    fn is_construction(&self) -> bool {
        self.construction
    }

    fn has_selected_parent(&self) -> bool {
        self.parent_selected
    }

    fn reference_points(&self) -> Vec<Point> {
        self.ref_points.clone()
    }

    fn endpoints(&self) -> Option<(Point, Point)> {
        (self.kind == EntityKind::Line).then_some((self.min, self.max))
    }

    fn each_child(&self, visit: &mut dyn FnMut(&dyn Entity)) {
        for child in &self.children {
            visit(child);
        }
    }
}

/// Minimal document: flat entity list plus canned bounds and paper data.
#[derive(Debug)]
pub(crate) struct TestDocument {
    pub entities: Vec<TestEntity>,
    pub min: Point,
    pub max: Point,
    pub grid_on: bool,
    pub unit_factor: f64,
    pub paper_scale: f64,
    pub print_area: Size,
    pub insertion_base: Point,
    pub margins: Margins,
    pub pages_horizontal: i32,
    pub pages_vertical: i32,
    pub dimension_scale: f64,
}

impl TestDocument {
    pub(crate) fn with_bounds(min: Point, max: Point) -> Self {
        Self {
            entities: Vec::new(),
            min,
            max,
            grid_on: true,
            unit_factor: 1.0,
            paper_scale: 1.0,
            print_area: Size::ZERO,
            insertion_base: Point::ZERO,
            margins: Margins::default(),
            pages_horizontal: 1,
            pages_vertical: 1,
            dimension_scale: 1.0,
        }
    }
}

impl Document for TestDocument {
    fn each_entity(&self, visit: &mut dyn FnMut(&dyn Entity)) {
        for entity in &self.entities {
            visit(entity);
        }
    }

    fn min(&self) -> Point {
        self.min
    }

    fn max(&self) -> Point {
        self.max
    }

    fn is_grid_on(&self) -> bool {
        self.grid_on
    }

    fn unit_factor(&self) -> f64 {
        self.unit_factor
    }

    fn paper_scale(&self) -> f64 {
        self.paper_scale
    }

    fn print_area_size(&self, _include_margins: bool) -> Size {
        self.print_area
    }

    fn paper_insertion_base(&self) -> Point {
        self.insertion_base
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn pages_horizontal(&self) -> i32 {
        self.pages_horizontal
    }

    fn pages_vertical(&self) -> i32 {
        self.pages_vertical
    }

    fn dimension_scale(&self) -> f64 {
        self.dimension_scale
    }
}

/// Canned grid layout.
#[derive(Debug)]
pub(crate) struct TestGrid {
    pub isometric: bool,
    pub cell: Vec2,
    pub spacing: Vec2,
    pub meta_x: Vec<f64>,
    pub meta_y: Vec<f64>,
    pub points: Vec<Point>,
    pub updates: usize,
}

impl Default for TestGrid {
    fn default() -> Self {
        Self {
            isometric: false,
            cell: Vec2::new(1.0, 1.0),
            spacing: Vec2::new(10.0, 10.0),
            meta_x: Vec::new(),
            meta_y: Vec::new(),
            points: Vec::new(),
            updates: 0,
        }
    }
}

impl GridProvider for TestGrid {
    fn update(&mut self) {
        self.updates += 1;
    }

    fn is_isometric(&self) -> bool {
        self.isometric
    }

    fn cell_size(&self) -> Vec2 {
        self.cell
    }

    fn meta_grid_spacing(&self) -> Vec2 {
        self.spacing
    }

    fn meta_x(&self) -> &[f64] {
        &self.meta_x
    }

    fn meta_y(&self) -> &[f64] {
        &self.meta_y
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn status_text(&self) -> String {
        format!("{} / {}", self.cell.x, self.spacing.x)
    }
}

/// Everything the view reported through its observer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ViewEvent {
    Redraw,
    History(bool),
    Message(String),
    RelativeZero(Point),
    GridStatus(String),
}

/// Observer that appends every notification to a shared vector.
#[derive(Debug)]
pub(crate) struct RecordingObserver {
    events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl RecordingObserver {
    pub(crate) fn new() -> (Self, Rc<RefCell<Vec<ViewEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

impl ViewObserver for RecordingObserver {
    fn redraw_requested(&mut self) {
        self.events.borrow_mut().push(ViewEvent::Redraw);
    }

    fn history_availability(&mut self, has_previous: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::History(has_previous));
    }

    fn command_message(&mut self, message: &str) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Message(message.to_owned()));
    }

    fn relative_zero_changed(&mut self, position: Point) {
        self.events
            .borrow_mut()
            .push(ViewEvent::RelativeZero(position));
    }

    fn grid_status(&mut self, status: &str) {
        self.events
            .borrow_mut()
            .push(ViewEvent::GridStatus(status.to_owned()));
    }
}
