// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::time::{Duration, Instant};

use hashbrown::HashMap;
use kurbo::Point;

use planview_history::{ViewHistory, ViewSnapshot};
use planview_style::{Color, ViewConfig, ViewModes};
use planview_transform::Viewport;

use crate::overlay::OverlaySlot;
use crate::traits::{Entity, ViewObserver};

/// The relative-zero marker: the last user-established reference point.
///
/// Relative coordinate input is interpreted against this point. Whether
/// the marker is *painted* is a config option
/// ([`ViewConfig::hide_relative_zero`]); the position is tracked either
/// way.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RelativeZeroMarker {
    /// Marker position in graph space.
    pub position: Point,
    /// A position has been established.
    pub valid: bool,
    /// Updates are currently refused.
    pub locked: bool,
}

/// A headless 2D CAD drawing view.
///
/// Owns the viewport, the view history, the colors and mode flags, the
/// relative-zero marker, and the overlay containers. The zoom operations
/// live in the same `impl` (see the `zoom` module) and the render pipeline
/// in the `render` module; collaborators come in per call as trait
/// objects.
pub struct GraphicView {
    pub(crate) viewport: Viewport,
    pub(crate) history: ViewHistory,
    pub(crate) config: ViewConfig,
    pub(crate) modes: ViewModes,
    pub(crate) relative_zero: RelativeZeroMarker,
    pub(crate) overlays: HashMap<OverlaySlot, Vec<Box<dyn Entity>>>,
    pub(crate) pointer: Option<Point>,
    observer: Option<Box<dyn ViewObserver>>,
    epoch: Instant,
}

impl GraphicView {
    /// Creates a view over a `width` x `height` device surface with the
    /// given colors and options.
    #[must_use]
    pub fn new(width: i32, height: i32, config: ViewConfig) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            history: ViewHistory::new(),
            config,
            modes: ViewModes::default(),
            relative_zero: RelativeZeroMarker {
                position: Point::ZERO,
                valid: false,
                locked: false,
            },
            overlays: HashMap::new(),
            pointer: None,
            observer: None,
            epoch: Instant::now(),
        }
    }

    /// Registers the observer that receives redraw requests and other
    /// notifications, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn ViewObserver>) {
        self.observer = Some(observer);
    }

    /// Removes and returns the registered observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn ViewObserver>> {
        self.observer.take()
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the viewport mutably, for resize and border adjustments.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Returns the view colors and options.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns the view colors and options mutably.
    pub fn config_mut(&mut self) -> &mut ViewConfig {
        &mut self.config
    }

    /// Returns the background color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.config.background()
    }

    /// Returns the derived foreground color.
    #[must_use]
    pub fn foreground(&self) -> Color {
        self.config.foreground()
    }

    /// Returns the active view modes.
    #[must_use]
    pub fn modes(&self) -> ViewModes {
        self.modes
    }

    /// Toggles a view mode flag.
    pub fn set_mode(&mut self, mode: ViewModes, on: bool) {
        self.modes.set(mode, on);
    }

    /// Enables or disables draft mode.
    pub fn set_draft_mode(&mut self, on: bool) {
        self.modes.set(ViewModes::DRAFT, on);
    }

    /// Returns `true` while draft mode is active.
    #[must_use]
    pub fn is_draft_mode(&self) -> bool {
        self.modes.contains(ViewModes::DRAFT)
    }

    /// Marks an actual print as in progress.
    pub fn set_printing(&mut self, on: bool) {
        self.modes.set(ViewModes::PRINTING, on);
    }

    /// Returns `true` while printing.
    #[must_use]
    pub fn is_printing(&self) -> bool {
        self.modes.contains(ViewModes::PRINTING)
    }

    /// Enables or disables the print preview.
    pub fn set_print_preview(&mut self, on: bool) {
        self.modes.set(ViewModes::PRINT_PREVIEW, on);
    }

    /// Returns `true` while the print preview is active.
    #[must_use]
    pub fn is_print_preview(&self) -> bool {
        self.modes.contains(ViewModes::PRINT_PREVIEW)
    }

    /// Enables or disables the delete preview (entities repainted in the
    /// background color).
    pub fn set_delete_preview(&mut self, on: bool) {
        self.modes.set(ViewModes::DELETE_PREVIEW, on);
    }

    /// Returns `true` while the delete preview is active.
    #[must_use]
    pub fn is_delete_preview(&self) -> bool {
        self.modes.contains(ViewModes::DELETE_PREVIEW)
    }

    /// Marks a pan drag as in progress.
    pub fn set_panning(&mut self, on: bool) {
        self.modes.set(ViewModes::PANNING, on);
    }

    /// Returns `true` while a pan drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.modes.contains(ViewModes::PANNING)
    }

    /// Returns the relative-zero marker.
    #[must_use]
    pub fn relative_zero(&self) -> RelativeZeroMarker {
        self.relative_zero
    }

    /// Establishes the relative zero, unless it is locked.
    pub fn set_relative_zero(&mut self, position: Point) {
        if self.relative_zero.locked {
            return;
        }
        self.relative_zero.position = position;
        self.relative_zero.valid = true;
        if let Some(observer) = &mut self.observer {
            observer.relative_zero_changed(position);
        }
    }

    /// Establishes the relative zero and requests an overlay repaint.
    pub fn move_relative_zero(&mut self, position: Point) {
        self.set_relative_zero(position);
        self.request_redraw();
    }

    /// Locks or unlocks the relative zero against updates.
    pub fn lock_relative_zero(&mut self, locked: bool) {
        self.relative_zero.locked = locked;
    }

    /// Returns `true` while the relative zero is locked.
    #[must_use]
    pub fn is_relative_zero_locked(&self) -> bool {
        self.relative_zero.locked
    }

    /// Returns the overlay container for a slot, creating it on first
    /// access.
    pub fn overlay_container(&mut self, slot: OverlaySlot) -> &mut Vec<Box<dyn Entity>> {
        self.overlays.entry(slot).or_default()
    }

    /// Drops the contents of an overlay slot, if any.
    pub fn clear_overlay(&mut self, slot: OverlaySlot) {
        if let Some(entities) = self.overlays.get_mut(&slot) {
            entities.clear();
        }
    }

    /// Records the pointer position in graph space; used as the default
    /// zoom center.
    pub fn set_pointer_position(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    /// Returns the last recorded pointer position in graph space.
    #[must_use]
    pub fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    /// Saves the current view state for [`GraphicView::zoom_previous`],
    /// subject to the history debounce.
    pub fn save_view(&mut self) {
        self.save_view_at(self.epoch.elapsed());
    }

    /// Saves the current view state with an explicit timestamp.
    ///
    /// Hosts that manage their own clock (and tests) use this directly;
    /// [`GraphicView::save_view`] feeds it the elapsed time since view
    /// construction.
    pub fn save_view_at(&mut self, now: Duration) {
        let snapshot = ViewSnapshot {
            offset_x: self.viewport.offset_x(),
            offset_y: self.viewport.offset_y(),
            factor: self.viewport.factor(),
        };
        let was_empty = !self.history.has_previous();
        if self.history.save(snapshot, now) && was_empty {
            if let Some(observer) = &mut self.observer {
                observer.history_availability(true);
            }
        }
    }

    /// Restores the most recently saved view state, if any.
    pub fn restore_view(&mut self) {
        let Some(snapshot) = self.history.restore() else {
            return;
        };
        if !self.history.has_previous() {
            if let Some(observer) = &mut self.observer {
                observer.history_availability(false);
            }
        }
        self.viewport
            .apply_view_state(snapshot.offset_x, snapshot.offset_y, snapshot.factor);
        self.request_redraw();
    }

    /// Switches back to the previous view. Alias for
    /// [`GraphicView::restore_view`].
    pub fn zoom_previous(&mut self) {
        self.restore_view();
    }

    /// Returns `true` if a previous view can be restored.
    #[must_use]
    pub fn has_previous_view(&self) -> bool {
        self.history.has_previous()
    }

    /// Asks the host to repaint. Request-only; the host coalesces.
    pub fn request_redraw(&mut self) {
        if let Some(observer) = &mut self.observer {
            observer.redraw_requested();
        }
    }

    /// Sends a user-facing message through the observer.
    pub(crate) fn message(&mut self, text: &str) {
        if let Some(observer) = &mut self.observer {
            observer.command_message(text);
        }
    }

    /// Pushes grid status text through the observer.
    pub(crate) fn grid_status(&mut self, status: &str) {
        if let Some(observer) = &mut self.observer {
            observer.grid_status(status);
        }
    }
}

impl fmt::Debug for GraphicView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphicView")
            .field("viewport", &self.viewport)
            .field("history_len", &self.history.len())
            .field("modes", &self.modes)
            .field("relative_zero", &self.relative_zero)
            .field("overlay_slots", &self.overlays.len())
            .field("pointer", &self.pointer)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
