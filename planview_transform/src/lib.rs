// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planview Transform: viewport state and coordinate conversion.
//!
//! This crate provides [`Viewport`], the headless model of a drawing view's
//! device rectangle: per-axis scale factors, integer pixel offsets, border
//! margins, and the conversions between *graph* space (the document's
//! coordinate system, Y up) and *device* space (pixels, origin top-left,
//! Y down).
//!
//! It does **not** own a scene graph, a document, or a rendering backend.
//! Callers are expected to:
//! - Mutate the viewport through zoom/pan planning at a higher layer.
//! - Use the conversion methods for hit testing, culling, and placement.
//! - Validate scale factors against [`TOLERANCE`] before dividing; the
//!   viewport itself performs no epsilon defense.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use planview_transform::Viewport;
//!
//! // 800x600 device surface.
//! let vp = Viewport::new(800, 600);
//!
//! // Device origin is top-left; graph Y points up.
//! let graph = vp.to_graph(Point::new(400.0, 300.0));
//! assert_eq!(graph, Point::new(400.0, 300.0));
//! assert_eq!(vp.to_device(graph), Point::new(400.0, 300.0));
//! ```
//!
//! ## Design notes
//!
//! - Offsets are integer pixels; [`Viewport::to_graph`] rounds device
//!   coordinates to the nearest pixel before converting, matching the
//!   integer-pixel input contract of pointer events.
//! - Scale factors are stored as absolute values; a negative factor is a
//!   request for the same magnitude, never an error.
//! - While the zoom is frozen, every scale and centering mutation is a
//!   complete no-op (not a clamp).
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{Borders, Viewport};

/// Geometric tolerance below which an extent or scale factor is treated as
/// degenerate.
pub const TOLERANCE: f64 = 1.0e-10;

/// Upper bound on acceptable scale factors; anything above is rejected as
/// degenerate by view-fitting operations.
pub const MAX_SCALE: f64 = 1.0e10;
