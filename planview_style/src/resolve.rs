// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effective-pen resolution.

use crate::color::{MIN_COLOR_DISTANCE, rgb_distance_squared, rgb_equal};
use crate::{Color, LineType, Pen, ViewConfig, ViewModes};
use crate::kind::EntityKind;

/// Paper scales at or below this are treated as meaningless and do not
/// scale printed line widths.
const PAPER_SCALE_TOLERANCE: f64 = 1.0e-10;

/// Per-entity style inputs to pen resolution.
#[derive(Copy, Clone, Debug)]
pub struct EntityStyle {
    /// Entity classification.
    pub kind: EntityKind,
    /// Entity is part of the current selection.
    pub selected: bool,
    /// Entity is hovered/highlighted.
    pub highlighted: bool,
    /// Entity is drawn in the background color (invisible but present).
    pub transparent: bool,
}

impl EntityStyle {
    /// Plain entity state: no selection, highlight, or transparency.
    #[must_use]
    pub fn plain(kind: EntityKind) -> Self {
        Self {
            kind,
            selected: false,
            highlighted: false,
            transparent: false,
        }
    }
}

/// View-side context for pen resolution.
#[derive(Copy, Clone, Debug)]
pub struct PenContext<'a> {
    /// View colors and options.
    pub config: &'a ViewConfig,
    /// Active view modes.
    pub modes: ViewModes,
    /// The entity is being drawn as part of an overlay container.
    pub in_overlay: bool,
    /// Drawing units per millimeter.
    pub unit_factor: f64,
    /// Paper scale of the drawing.
    pub paper_scale: f64,
    /// The drawing's dimension-scale variable, consulted when
    /// [`ViewModes::SCALE_LINE_WIDTH`] is set.
    pub dimension_scale: f64,
    /// Device pixels per drawing unit (the viewport's horizontal scale).
    pub device_per_unit: f64,
    /// Offset into the line pattern for dash continuity.
    pub pattern_offset: f64,
}

/// Resolves the effective pen for an entity under the current view state.
///
/// Resolution order (later rules override earlier ones within their guard):
///
/// 1. Reference-marker kinds take a fixed pen and skip everything else.
/// 2. Draft mode forces a foreground hairline and skips the width and
///    color rules.
/// 3. The nominal width is converted to device pixels, scaled for print
///    modes, and snapped off the slow one-pixel stroke width.
/// 4. A stroke that would vanish against the background (pure white in
///    print preview) is recolored to the foreground.
/// 5. Outside print modes: overlay highlight glow, or selection pattern
///    then highlight color then transparency.
/// 6. Delete preview overrides the color with the background, last.
pub fn resolve_pen(intrinsic: &Pen, entity: EntityStyle, ctx: &PenContext<'_>) -> Pen {
    let config = ctx.config;

    // Reference markers are fixed-style; no view mode changes them.
    if entity.kind.is_reference_marker() {
        let color = if entity.highlighted {
            config.preview_reference_highlighted
        } else {
            config.preview_reference
        };
        return Pen {
            color,
            width: 0,
            line_type: LineType::Solid,
            screen_width: 0.0,
            dash_offset: ctx.pattern_offset,
        };
    }

    let printing = ctx.modes.contains(ViewModes::PRINTING);
    let preview = ctx.modes.contains(ViewModes::PRINT_PREVIEW);
    let mut pen = *intrinsic;
    pen.width = pen.width.max(0);
    pen.dash_offset = ctx.pattern_offset;

    if ctx.modes.contains(ViewModes::DRAFT) {
        pen.color = config.foreground();
        pen.width = 0;
        pen.line_type = LineType::Solid;
        pen.screen_width = 0.0;
    } else {
        // Print output keeps the drawing width; on screen that width is
        // divided back out of the paper scale (or taken from the
        // dimension-scale variable) so strokes match the printed result.
        let mut width_factor = 1.0;
        if (printing || preview) && ctx.paper_scale > PAPER_SCALE_TOLERANCE {
            width_factor = if ctx.modes.contains(ViewModes::SCALE_LINE_WIDTH) {
                ctx.dimension_scale
            } else {
                1.0 / ctx.paper_scale
            };
        }
        if pen.alpha() == 1.0 {
            pen.screen_width = ctx.device_per_unit
                * (f64::from(pen.width) / 100.0 * ctx.unit_factor * width_factor);
        }
        // A one-pixel stroke rasterizes slower than the hairline; snap it
        // down. Not a visual choice.
        if round(pen.screen_width) == 1 {
            pen.screen_width = 0.0;
        }

        // The print-area sheet is white no matter what background is
        // configured; compare against what the stroke will really sit on.
        let contrast_background = if preview {
            Color::WHITE
        } else {
            config.background()
        };
        let limit = MIN_COLOR_DISTANCE * MIN_COLOR_DISTANCE;
        if rgb_equal(pen.color, contrast_background)
            || (rgb_equal(pen.color, Color::BLACK)
                && rgb_distance_squared(pen.color, contrast_background) < limit)
        {
            pen.color = config.foreground();
        }

        if !printing && !preview {
            if ctx.in_overlay || ctx.modes.contains(ViewModes::OVERLAY_DRAWING) {
                if entity.highlighted {
                    // Hover glow: solid stroke in the selection color.
                    pen.color = config.selected;
                    pen.line_type = LineType::Solid;
                }
            } else {
                if entity.selected {
                    pen.line_type = LineType::DashTiny;
                    pen.width = 0;
                    pen.color = config.selected;
                }
                if entity.highlighted {
                    pen.color = config.highlighted;
                }
            }
            if entity.transparent {
                pen.color = config.background();
            }
        }
    }

    // Erase is simulated by repainting in the background color; this
    // outranks everything above.
    if ctx.modes.contains(ViewModes::DELETE_PREVIEW) {
        pen.color = config.background();
    }

    pen
}

/// Round half away from zero, without reaching for `libm`.
fn round(v: f64) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}
