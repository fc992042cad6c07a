// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::color::{MIN_COLOR_DISTANCE, rgb_distance_squared};
use crate::Color;

/// Every color and option a view is constructed with.
///
/// This is a plain value object handed to the view constructor; the view
/// core never reads ambient settings. The background and foreground are
/// paired: the foreground is derived (black on light backgrounds, white on
/// dark ones) and can only change through [`ViewConfig::set_background`].
#[derive(Clone, Debug)]
pub struct ViewConfig {
    background: Color,
    foreground: Color,
    /// Grid point/line color.
    pub grid: Color,
    /// Meta-grid line color.
    pub meta_grid: Color,
    /// Color of selected entities (and of the overlay hover glow).
    pub selected: Color,
    /// Color of highlighted (hovered) entities.
    pub highlighted: Color,
    /// Handle color of an entity's first reference point.
    pub start_handle: Color,
    /// Handle color of intermediate reference points.
    pub handle: Color,
    /// Handle color of an entity's last reference point.
    pub end_handle: Color,
    /// Color of the relative-zero marker.
    pub relative_zero: Color,
    /// Color of preview reference markers.
    pub preview_reference: Color,
    /// Color of highlighted preview reference markers.
    pub preview_reference_highlighted: Color,
    /// Color of the absolute-zero X axis segment (and its extension).
    pub x_axis_extension: Color,
    /// Color of the absolute-zero Y axis segment (and its extension).
    pub y_axis_extension: Color,
    /// Track the relative zero without painting it.
    pub hide_relative_zero: bool,
    /// Extend the absolute-zero axis segments to the viewport edges.
    pub extend_axis_lines: bool,
    /// Grid style: `0` draws grid points, `1` draws solid grid lines.
    pub grid_type: i32,
}

impl ViewConfig {
    /// Sets the background color and re-derives the foreground.
    ///
    /// The foreground is black unless the background itself is too close
    /// to black to read against, in which case it flips to white.
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
        let limit = MIN_COLOR_DISTANCE * MIN_COLOR_DISTANCE;
        self.foreground = if rgb_distance_squared(Color::BLACK, background) >= limit {
            Color::BLACK
        } else {
            Color::WHITE
        };
    }

    /// Returns the background color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the derived foreground color.
    #[must_use]
    pub fn foreground(&self) -> Color {
        self.foreground
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        let mut config = Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
            grid: Color::from_rgb8(0x80, 0x80, 0x80),
            meta_grid: Color::from_rgb8(0x40, 0x40, 0x40),
            selected: Color::from_rgb8(0xA5, 0x47, 0x47),
            highlighted: Color::from_rgb8(0x73, 0x93, 0x73),
            start_handle: Color::from_rgb8(0x00, 0xFF, 0xFF),
            handle: Color::from_rgb8(0x00, 0x00, 0xFF),
            end_handle: Color::from_rgb8(0x00, 0x00, 0xFF),
            relative_zero: Color::from_rgb8(0xFF, 0x00, 0x00),
            preview_reference: Color::from_rgb8(0x57, 0xA9, 0xB1),
            preview_reference_highlighted: Color::from_rgb8(0xFF, 0xA5, 0x00),
            x_axis_extension: Color::from_rgb8(0xFF, 0x00, 0x00),
            y_axis_extension: Color::from_rgb8(0x00, 0xFF, 0x00),
            hide_relative_zero: false,
            extend_axis_lines: false,
            grid_type: 0,
        };
        config.set_background(Color::BLACK);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::ViewConfig;
    use crate::Color;

    #[test]
    fn foreground_flips_with_background() {
        let mut config = ViewConfig::default();
        assert!(crate::rgb_equal(config.foreground(), Color::WHITE));

        config.set_background(Color::WHITE);
        assert!(crate::rgb_equal(config.foreground(), Color::BLACK));

        // A dark gray is still too close to black for black strokes.
        config.set_background(Color::from_rgb8(0x20, 0x20, 0x20));
        assert!(crate::rgb_equal(config.foreground(), Color::WHITE));
    }
}
