// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planview View: the headless core of a 2D CAD drawing view.
//!
//! [`GraphicView`] ties the leaf crates together: it owns a
//! [`Viewport`] (coordinate transform), a [`ViewHistory`] (bounded ring of
//! previous view states), a [`ViewConfig`] (colors and options), the view
//! mode flags, the relative-zero marker, and the overlay registry. On top
//! of that state it implements:
//!
//! - Every zoom, pan, and scroll operation (`zoom_in`, `zoom_window`,
//!   `zoom_auto`, `zoom_page`, …), each following the same shape:
//!   validate, optionally snapshot the history, mutate the viewport,
//!   request a redraw.
//! - The three-layer render pipeline: paper or grid background, the
//!   recursive entity pass with per-entity pen resolution and culling, and
//!   the overlay layer with the zero markers.
//!
//! Everything the view cannot decide on its own comes in through traits:
//! the [`Document`] (entities, bounds, paper geometry), the
//! [`GridProvider`] (grid and meta-grid layout), the [`RenderBackend`]
//! (device-coordinate primitives), and the [`ViewObserver`] (redraw
//! requests, history transitions, user-facing messages). The view is
//! single-threaded and synchronous; a redraw request is a signal to the
//! host, not a repaint.
//!
//! ## Sketch
//!
//! ```ignore
//! # use planview_view::*;
//! let mut view = GraphicView::new(800, 600, ViewConfig::default());
//! view.set_observer(Box::new(MyObserver::new()));
//!
//! // Host event loop:
//! view.zoom_auto(&mut document, false, true);
//! view.render(&document, &mut grid, &mut backend);
//! ```

mod overlay;
mod render;
mod traits;
mod view;
mod zoom;

#[cfg(test)]
pub(crate) mod fixtures;

pub use overlay::OverlaySlot;
pub use traits::{
    CrosshairType, Document, DrawContext, Entity, GridProvider, Margins, RenderBackend,
    ViewObserver,
};
pub use view::{GraphicView, RelativeZeroMarker};
pub use zoom::ScrollDirection;

pub use planview_history::{SAVE_DEBOUNCE, ViewHistory, ViewSnapshot};
pub use planview_style::{
    Color, DraftRendering, EntityKind, EntityStyle, LineType, Pen, PenContext, ViewConfig,
    ViewModes, resolve_pen,
};
pub use planview_transform::{Borders, MAX_SCALE, TOLERANCE, Viewport};
