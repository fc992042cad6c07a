// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Independently togglable view mode flags.
    ///
    /// Combinations of these drive both pen resolution
    /// ([`crate::resolve_pen`]) and the layering decisions of the render
    /// pipeline. They live for the lifetime of the view.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct ViewModes: u16 {
        /// Fast, simplified rendering: hairline strokes, degraded text and
        /// images, skipped hatches, corner watermarks.
        const DRAFT = 1 << 0;
        /// An actual print is in progress.
        const PRINTING = 1 << 1;
        /// On-screen simulation of paper output.
        const PRINT_PREVIEW = 1 << 2;
        /// Entities are repainted in the background color to preview a
        /// deletion without touching the document.
        const DELETE_PREVIEW = 1 << 3;
        /// A pan drag is in progress.
        const PANNING = 1 << 4;
        /// The overlay layer is currently being drawn; containers resolve
        /// their children's pens with overlay rules.
        const OVERLAY_DRAWING = 1 << 5;
        /// Scale printed line widths by the drawing's dimension-scale
        /// variable instead of the inverse paper scale.
        const SCALE_LINE_WIDTH = 1 << 6;
    }
}
