//! Per-tick input snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Device family the current look input comes from.
///
/// Pointer deltas are already per-frame quantities, while stick deflection is
/// a rate and has to be scaled by the tick duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlScheme {
    #[default]
    KeyboardMouse,
    Gamepad,
}

impl ControlScheme {
    /// Factor applied to look input for a tick of length `dt`.
    #[inline]
    pub fn look_time_multiplier(self, dt: f32) -> f32 {
        match self {
            ControlScheme::KeyboardMouse => 1.0,
            ControlScheme::Gamepad => dt,
        }
    }
}

/// Everything the controller reads from the input collaborator in one tick.
///
/// Overwritten wholesale each tick; the controller keeps its own copy of the
/// previous button states for edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    /// Movement, x = strafe right, y = forward
    pub move_input: Vec2,
    /// Look delta, x = yaw, y = pitch
    pub look: Vec2,
    pub jump: bool,
    pub sprint: bool,
    pub crouch: bool,
    pub primary: bool,
    pub secondary: bool,
    /// Whether `move_input` comes from an analog stick
    pub analog_movement: bool,
    pub control_scheme: ControlScheme,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input holding only a move vector.
    pub fn moving(move_input: Vec2) -> Self {
        Self {
            move_input,
            ..Default::default()
        }
    }

    /// Input holding only a look delta.
    pub fn looking(look: Vec2, control_scheme: ControlScheme) -> Self {
        Self {
            look,
            control_scheme,
            ..Default::default()
        }
    }

    #[inline]
    pub fn has_move_input(&self) -> bool {
        self.move_input != Vec2::ZERO
    }

    /// How far the stick is pushed. Digital input always counts as full.
    #[inline]
    pub fn input_magnitude(&self) -> f32 {
        if self.analog_movement {
            self.move_input.length().min(1.0)
        } else {
            1.0
        }
    }
}
