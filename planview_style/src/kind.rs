// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Classification of a drawable entity.
///
/// The view core never inspects entity geometry; it only needs enough
/// classification to apply its special cases: container recursion, culling
/// exemptions, draft-mode degradation, and the fixed styling of reference
/// markers. Keeping these as predicates on the kind (rather than scattered
/// type tests) makes each special case auditable in one place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The document root container.
    Graphic,
    /// A generic entity container.
    Container,
    /// A block reference.
    Insert,
    /// A polyline (container of line/arc segments).
    Polyline,
    /// A spline (container of fitted segments).
    Spline,
    /// A dimension (container of lines, arrows, and text).
    Dimension,
    /// A straight line segment.
    Line,
    /// A single point.
    Point,
    /// A full circle.
    Circle,
    /// A circular arc.
    Arc,
    /// An ellipse or elliptical arc.
    Ellipse,
    /// Single-line text.
    Text,
    /// Multi-line text.
    MText,
    /// A raster image.
    Image,
    /// A hatched region.
    Hatch,
    /// Preview reference point marker.
    RefPoint,
    /// Preview reference line marker.
    RefLine,
    /// Preview reference circle marker.
    RefCircle,
    /// Preview reference arc marker.
    RefArc,
    /// Preview reference ellipse marker.
    RefEllipse,
}

/// How an entity is rendered while draft mode is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DraftRendering {
    /// Drawn normally.
    Full,
    /// Replaced by its bounding rectangle.
    BoundingBox,
    /// Not drawn at all.
    Skipped,
}

impl EntityKind {
    /// Returns `true` for kinds that contain child entities and are drawn
    /// by recursing into them.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Graphic
                | Self::Container
                | Self::Insert
                | Self::Polyline
                | Self::Spline
                | Self::Dimension
        )
    }

    /// Returns `true` for the transient preview reference markers, which
    /// take a fixed pen regardless of view modes.
    #[must_use]
    pub fn is_reference_marker(self) -> bool {
        matches!(
            self,
            Self::RefPoint | Self::RefLine | Self::RefCircle | Self::RefArc | Self::RefEllipse
        )
    }

    /// Returns `true` for kinds exempt from bounding-box culling.
    ///
    /// The document root must always recurse, and a line whose bounding box
    /// is off screen can still cross the viewport.
    #[must_use]
    pub fn never_culled(self) -> bool {
        matches!(self, Self::Graphic | Self::Line)
    }

    /// Returns the draft-mode degradation class for this kind.
    ///
    /// Text layout and image decoding dominate draft redraw times, so both
    /// collapse to their bounding rectangles; hatches are dropped outright.
    #[must_use]
    pub fn draft_rendering(self) -> DraftRendering {
        match self {
            Self::Text | Self::MText | Self::Image => DraftRendering::BoundingBox,
            Self::Hatch => DraftRendering::Skipped,
            _ => DraftRendering::Full,
        }
    }
}
