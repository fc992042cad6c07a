// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! RGB comparison helpers for contrast decisions.

use crate::Color;

/// Minimum perceptual distance (Euclidean over 8-bit RGB) below which two
/// colors are considered indistinguishable for legibility purposes.
///
/// Used by the background-contrast guard in [`crate::resolve_pen`] and by
/// the foreground derivation in [`crate::ViewConfig::set_background`].
/// Comparisons use the squared form; see [`rgb_distance_squared`].
pub const MIN_COLOR_DISTANCE: f64 = 64.0;

/// Returns `true` if two colors have identical 8-bit RGB components.
///
/// Alpha is ignored: a stroke color and a background only collide visually
/// through their opaque channels.
#[must_use]
pub fn rgb_equal(a: Color, b: Color) -> bool {
    let a = a.to_rgba8();
    let b = b.to_rgba8();
    a.r == b.r && a.g == b.g && a.b == b.b
}

/// Squared Euclidean distance between two colors over 8-bit RGB.
///
/// Kept squared so callers compare against
/// `MIN_COLOR_DISTANCE * MIN_COLOR_DISTANCE` without a square root.
#[must_use]
pub fn rgb_distance_squared(a: Color, b: Color) -> f64 {
    let a = a.to_rgba8();
    let b = b.to_rgba8();
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    dr * dr + dg * dg + db * db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_equal_ignores_alpha() {
        let opaque = Color::from_rgba8(10, 20, 30, 255);
        let faded = Color::from_rgba8(10, 20, 30, 40);
        assert!(rgb_equal(opaque, faded));
        assert!(!rgb_equal(opaque, Color::from_rgb8(10, 20, 31)));
    }

    #[test]
    fn distance_is_squared_euclidean() {
        let a = Color::from_rgb8(0, 0, 0);
        let b = Color::from_rgb8(3, 4, 0);
        assert_eq!(rgb_distance_squared(a, b), 25.0);
        assert_eq!(rgb_distance_squared(a, a), 0.0);
    }
}
