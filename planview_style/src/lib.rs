// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planview Style: pens, entity kinds, view modes, and pen resolution.
//!
//! An entity carries an *intrinsic* pen (color, width, line type), but what
//! actually reaches the drawing backend depends on the state of the view:
//! draft mode strips everything down to hairlines, print preview recolors
//! strokes that would vanish against the paper, selection and hover apply
//! their own colors and patterns, and delete preview paints everything in
//! the background color. [`resolve_pen`] is the one place where those rules
//! meet, as a pure function from intrinsic pen + entity state + view
//! context to the *effective* pen.
//!
//! The crate also holds the supporting vocabulary:
//! - [`Pen`] and [`LineType`]: the stroke style value type.
//! - [`EntityKind`]: entity classification with capability predicates
//!   (reference markers, culling exemptions, draft degradation).
//! - [`ViewModes`]: the independently togglable view mode flags.
//! - [`ViewConfig`]: the full set of colors and options a view is
//!   constructed with.
//!
//! This crate is `no_std`.

#![no_std]

mod color;
mod config;
mod kind;
mod modes;
mod pen;
mod resolve;

pub use color::{MIN_COLOR_DISTANCE, rgb_distance_squared, rgb_equal};
pub use config::ViewConfig;
pub use kind::{DraftRendering, EntityKind};
pub use modes::ViewModes;
pub use pen::{LineType, Pen};
pub use resolve::{EntityStyle, PenContext, resolve_pen};

/// Color type used throughout the view core.
pub type Color = peniko::Color;
