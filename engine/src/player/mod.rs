//! Player Module
//!
//! Locomotion and action control for a single character.
//!
//! # Components
//!
//! - [`CharacterController`] - per-tick orchestration over injected collaborators
//!   - Ground probe, landing edge and jump budget via [`VerticalMotion`]
//!   - Smoothed walk/sprint speed via [`Locomotion`]
//!   - Attack lock-out via [`CastController`]
//! - [`CharacterMotor`] - host movement service
//! - [`KinematicBody`] - flat-floor motor for headless use

pub mod cast;
pub mod controller;
pub mod locomotion;
pub mod motor;
pub mod vertical;

pub use cast::{CastController, CastKind};
pub use controller::{CastTarget, CharacterController, ControllerState, MAX_TICK_DELTA, TickReport};
pub use locomotion::{
    HorizontalMove, Locomotion, MoveAnimation, SPEED_OFFSET, move_direction, round_to_thousandths,
    smooth_speed,
};
pub use motor::{CharacterMotor, HAND_HEIGHT, HAND_SIDE_OFFSET, KinematicBody};
pub use vertical::{GROUNDED_VELOCITY, JumpKind, VerticalMotion};
