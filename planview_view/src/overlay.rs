// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Overlay layer slots.
///
/// Each slot holds an independent collection of transient entities, owned
/// by the view and replaced or cleared by action code between frames. The
/// render pipeline draws slots in declaration order, lowest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverlaySlot {
    /// Preview of the entities the current action would create.
    ActionPreview,
    /// Highlight effects (hover glow and similar).
    Effects,
    /// The snap indicator of the active snapper.
    Snapper,
    /// The informational cursor readout.
    InfoCursor,
}
