//! Look Input Accumulator
//!
//! Pointer motion arrives as many small events between ticks. They are summed
//! here and handed to the controller once per tick as a single look delta.

use glam::Vec2;

/// Sums pointer deltas between ticks.
#[derive(Debug, Clone)]
pub struct LookAccumulator {
    delta: Vec2,
    /// Whether the cursor is locked to the window
    cursor_locked: bool,
    /// When false, pointer motion is ignored (e.g. while a menu is open)
    cursor_input_for_look: bool,
}

impl Default for LookAccumulator {
    fn default() -> Self {
        Self {
            delta: Vec2::ZERO,
            cursor_locked: true,
            cursor_input_for_look: true,
        }
    }
}

impl LookAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pointer motion event.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        if self.cursor_input_for_look {
            self.delta += Vec2::new(dx, dy);
        }
    }

    /// Take the summed delta and reset it to zero.
    #[inline]
    pub fn consume(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    #[inline]
    pub fn peek(&self) -> Vec2 {
        self.delta
    }

    /// Lock or release the cursor. Releasing drops any pending motion so the
    /// camera does not jump when the lock is reacquired.
    pub fn set_cursor_locked(&mut self, locked: bool) {
        self.cursor_locked = locked;
        if !locked {
            self.delta = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn is_cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    pub fn set_cursor_input_for_look(&mut self, enabled: bool) {
        self.cursor_input_for_look = enabled;
        if !enabled {
            self.delta = Vec2::ZERO;
        }
    }

    /// Window focus changed.
    ///
    /// Motion gathered while unfocused or across the focus change is dropped,
    /// so alt-tabbing back does not snap the camera. Returns whether the host
    /// should (re)grab the cursor.
    pub fn on_focus(&mut self, has_focus: bool) -> bool {
        self.delta = Vec2::ZERO;
        has_focus && self.cursor_locked
    }
}
