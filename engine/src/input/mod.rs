//! Input Module
//!
//! Platform-agnostic input for the character controller. Hosts either fill a
//! [`FrameInput`] directly (gamepads, network replay) or feed key and pointer
//! events into an [`InputState`] and snapshot it once per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use spellcaster_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.look.accumulate(12.0, -3.0);
//! input.primary = true;
//!
//! let frame = input.frame();
//! controller.tick(&frame, dt);
//! ```

pub mod edge;
pub mod frame;
pub mod keyboard;
pub mod look;

pub use edge::ButtonEdge;
pub use frame::{ControlScheme, FrameInput};
pub use keyboard::{KeyCode, MovementKeys};
pub use look::LookAccumulator;

/// Keyboard-and-mouse input state between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: MovementKeys,
    pub look: LookAccumulator,
    /// Primary action button (left mouse)
    pub primary: bool,
    /// Secondary action button (right mouse)
    pub secondary: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for this tick. Consumes the accumulated look delta.
    pub fn frame(&mut self) -> FrameInput {
        FrameInput {
            move_input: self.keyboard.move_vector(),
            look: self.look.consume(),
            jump: self.keyboard.jump,
            sprint: self.keyboard.sprint,
            crouch: self.keyboard.crouch,
            primary: self.primary,
            secondary: self.secondary,
            analog_movement: false,
            control_scheme: ControlScheme::KeyboardMouse,
        }
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.look.consume();
        self.primary = false;
        self.secondary = false;
    }
}
