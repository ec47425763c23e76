//! Config Module
//!
//! Tunable parameters for the character controller and the errors that can
//! occur while loading them from disk.

pub mod controller_config;

pub use controller_config::{
    ConfigError, ControllerConfig, DEFAULT_GRAVITY, DEFAULT_JUMP_HEIGHT, DEFAULT_MAX_JUMP_COUNT,
    DEFAULT_MOVE_SPEED, DEFAULT_ROTATION_SPEED, DEFAULT_SPEED_CHANGE_RATE, DEFAULT_SPRINT_SPEED,
    DEFAULT_TERMINAL_VELOCITY,
};
