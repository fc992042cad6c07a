// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planview History: a bounded, debounced ring of saved view states.
//!
//! Before a destructive view change (zoom to window, auto-fit, …) the view
//! captures its offset and scale into a [`ViewHistory`] so the user can
//! step back with "previous view". The history is a fixed-capacity ring:
//! the sixteen most recent states are kept and the oldest is overwritten.
//! Rapid successive captures within 500 ms collapse into one, since a
//! single user gesture often triggers several programmatic view changes
//! and should cost a single history slot.
//!
//! Timestamps are injected by the caller as monotonic [`Duration`]s
//! (elapsed time since an arbitrary epoch, such as view construction).
//! This keeps the crate free of any ambient clock and makes the debounce
//! window deterministic under test.
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Vec2;
//! use planview_history::{ViewHistory, ViewSnapshot};
//!
//! let mut history = ViewHistory::new();
//! let snap = ViewSnapshot { offset_x: 10, offset_y: -20, factor: Vec2::new(2.0, 2.0) };
//!
//! assert!(history.save(snap, Duration::from_millis(0)));
//! // A second capture 100 ms later is debounced away.
//! assert!(!history.save(snap, Duration::from_millis(100)));
//! assert_eq!(history.restore(), Some(snap));
//! assert_eq!(history.restore(), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::time::Duration;

use kurbo::Vec2;

/// Number of view states the history retains. Part of the behavioral
/// contract: after the seventeenth save the first state is gone.
pub const CAPACITY: usize = 16;

/// Minimum spacing between stored saves. Also contractual; see
/// [`ViewHistory::save`].
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// A captured view state: integer pixel offset plus per-axis scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewSnapshot {
    /// Horizontal offset in device pixels.
    pub offset_x: i32,
    /// Vertical offset in device pixels.
    pub offset_y: i32,
    /// Per-axis scale factors.
    pub factor: Vec2,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            factor: Vec2::new(1.0, 1.0),
        }
    }
}

/// Fixed-capacity ring buffer of [`ViewSnapshot`]s with debounced saves.
#[derive(Clone, Debug)]
pub struct ViewHistory {
    slots: [ViewSnapshot; CAPACITY],
    write_index: usize,
    count: usize,
    last_save: Option<Duration>,
}

impl ViewHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [ViewSnapshot::default(); CAPACITY],
            write_index: 0,
            count: 0,
            last_save: None,
        }
    }

    /// Saves a view state, unless a save landed less than
    /// [`SAVE_DEBOUNCE`] before `now`.
    ///
    /// Returns `true` if the snapshot was stored. A debounced call stores
    /// nothing and does not refresh the debounce window. When the ring is
    /// full, the oldest state is overwritten.
    pub fn save(&mut self, snapshot: ViewSnapshot, now: Duration) -> bool {
        if let Some(last) = self.last_save {
            if now.saturating_sub(last) < SAVE_DEBOUNCE {
                return false;
            }
        }
        self.last_save = Some(now);
        self.slots[self.write_index] = snapshot;
        self.write_index = (self.write_index + 1) % CAPACITY;
        if self.count < CAPACITY {
            self.count += 1;
        }
        true
    }

    /// Removes and returns the most recently saved view state.
    ///
    /// Returns `None` when the history is empty.
    pub fn restore(&mut self) -> Option<ViewSnapshot> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        self.write_index = (self.write_index + CAPACITY - 1) % CAPACITY;
        Some(self.slots[self.write_index])
    }

    /// Returns `true` if at least one saved state can be restored.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.count > 0
    }

    /// Returns the number of currently saved states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` when no states are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the fixed capacity of the ring.
    #[must_use]
    pub fn capacity(&self) -> usize {
        CAPACITY
    }
}

impl Default for ViewHistory {
    fn default() -> Self {
        Self::new()
    }
}
