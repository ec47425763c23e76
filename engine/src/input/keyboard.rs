//! Keyboard Input Module
//!
//! Key state for keyboard-and-mouse hosts, turned into the axis-aligned move
//! vector and action flags of a [`FrameInput`](super::FrameInput).
//! Decoupled from any windowing system; hosts translate their own key events
//! into [`KeyCode`].

use glam::Vec2;

/// Keys the character controller responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    C,
    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement and action keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / Up - move forward
    pub forward: bool,
    /// S / Down - move backward
    pub backward: bool,
    /// A / Left - strafe left
    pub left: bool,
    /// D / Right - strafe right
    pub right: bool,
    /// Space - jump, flip while airborne
    pub jump: bool,
    /// Shift - sprint
    pub sprint: bool,
    /// Ctrl / C - crouch
    pub crouch: bool,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update key state. Returns `false` for keys this struct does not track.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => self.forward = pressed,
            KeyCode::S | KeyCode::ArrowDown => self.backward = pressed,
            KeyCode::A | KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::D | KeyCode::ArrowRight => self.right = pressed,
            KeyCode::Space => self.jump = pressed,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.sprint = pressed,
            KeyCode::ControlLeft | KeyCode::ControlRight | KeyCode::C => self.crouch = pressed,
            KeyCode::Unknown => return false,
        }
        true
    }

    /// Check if any direction key is currently pressed.
    pub fn any_direction_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Move vector made of unit steps on each axis. Opposite keys cancel.
    pub fn move_vector(&self) -> Vec2 {
        Vec2::new(self.right_axis() as f32, self.forward_axis() as f32)
    }

    /// Reset all keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
