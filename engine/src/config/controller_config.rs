//! Controller Configuration
//!
//! All tunables for [`CharacterController`](crate::player::CharacterController)
//! live in one plain struct. `Default` carries the shipped tuning; a JSON file
//! may override any subset of fields.
//!
//! Values are sanitised once, at construction time, so the per-tick update
//! never has to check them again.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spellcaster_engine::config::ControllerConfig;
//!
//! let config = ControllerConfig::load("controller.json")?.sanitized();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::LayerMask;

/// Walk speed in meters per second
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;

/// Sprint speed in meters per second
pub const DEFAULT_SPRINT_SPEED: f32 = 8.0;

/// Look rotation speed in degrees per unit of look input
pub const DEFAULT_ROTATION_SPEED: f32 = 2.0;

/// Rate used to blend horizontal speed toward its target
pub const DEFAULT_SPEED_CHANGE_RATE: f32 = 10.0;

/// Apex height of a jump in meters
pub const DEFAULT_JUMP_HEIGHT: f32 = 2.0;

/// Gravity along the up axis in meters per second squared (negative = down)
pub const DEFAULT_GRAVITY: f32 = -30.0;

/// Maximum vertical speed magnitude in meters per second
pub const DEFAULT_TERMINAL_VELOCITY: f32 = 53.0;

/// Initial jump plus one aerial flip
pub const DEFAULT_MAX_JUMP_COUNT: u32 = 2;

/// Smallest speed change rate accepted by [`ControllerConfig::sanitized`]
const MIN_SPEED_CHANGE_RATE: f32 = 0.01;

/// Smallest probe radius accepted by [`ControllerConfig::sanitized`]
const MIN_GROUNDED_RADIUS: f32 = 0.01;

/// Errors that can occur while loading a [`ControllerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read controller config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for [`ControllerConfig`].
    #[error("invalid controller config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable parameters for the character controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Walk speed in m/s (default: 5.0)
    pub move_speed: f32,
    /// Sprint speed in m/s (default: 8.0)
    pub sprint_speed: f32,
    /// Degrees of rotation per unit of look input (default: 2.0)
    pub rotation_speed: f32,
    /// Horizontal acceleration/deceleration blend rate (default: 10.0)
    pub speed_change_rate: f32,

    /// Jump apex height in meters (default: 2.0)
    pub jump_height: f32,
    /// Gravity in m/s^2, negative pulls down (default: -30.0)
    pub gravity: f32,
    /// Vertical speed magnitude limit in m/s (default: 53.0)
    pub terminal_velocity: f32,
    /// Jumps allowed before landing, including the grounded one (default: 2)
    pub max_jump_count: u32,
    /// Seconds on the ground before a grounded jump is accepted again (default: 0.0)
    pub jump_timeout: f32,
    /// Seconds airborne before the falling state is entered (default: 0.15)
    pub fall_timeout: f32,

    /// Distance the ground probe sits below the feet; negative raises it (default: -0.14)
    pub grounded_offset: f32,
    /// Radius of the ground probe sphere, should match the body radius (default: 0.5)
    pub grounded_radius: f32,
    /// Layers that count as ground
    pub ground_layers: LayerMask,

    /// Highest camera pitch in degrees (default: 70.0)
    pub top_clamp: f32,
    /// Lowest camera pitch in degrees (default: -80.0)
    pub bottom_clamp: f32,
    /// Look input magnitude below which the camera is left alone (default: 0.01)
    pub look_threshold: f32,

    /// Casting lock-out in seconds (default: 0.1)
    pub cast_timeout: f32,
    /// Animation layer the cast clips are played on (default: 0)
    pub cast_layer: u32,
    /// Maximum distance of the targeting ray in meters (default: 500.0)
    pub target_ray_length: f32,
    /// Tag of objects a cast can target (default: "Block")
    pub target_tag: String,

    /// Multiplier applied to filtered root-motion lift (default: 10.0)
    pub root_motion_scale: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            sprint_speed: DEFAULT_SPRINT_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            speed_change_rate: DEFAULT_SPEED_CHANGE_RATE,
            jump_height: DEFAULT_JUMP_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            terminal_velocity: DEFAULT_TERMINAL_VELOCITY,
            max_jump_count: DEFAULT_MAX_JUMP_COUNT,
            jump_timeout: 0.0,
            fall_timeout: 0.15,
            grounded_offset: -0.14,
            grounded_radius: 0.5,
            ground_layers: LayerMask::ALL,
            top_clamp: 70.0,
            bottom_clamp: -80.0,
            look_threshold: 0.01,
            cast_timeout: 0.1,
            cast_layer: 0,
            target_ray_length: 500.0,
            target_tag: "Block".to_string(),
            root_motion_scale: 10.0,
        }
    }
}

impl ControllerConfig {
    /// Create a config with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Launch velocity needed to reach `jump_height` under `gravity`.
    ///
    /// Solves `v^2 = 2 * h * |g|` for `v`.
    pub fn jump_launch_velocity(&self) -> f32 {
        (self.jump_height * 2.0 * self.gravity.abs()).sqrt()
    }

    /// Return a copy with every out-of-range value pulled back into range.
    ///
    /// Each correction is logged once as a warning.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.move_speed = at_least("move_speed", self.move_speed, 0.0, defaults.move_speed);
        self.sprint_speed =
            at_least("sprint_speed", self.sprint_speed, 0.0, defaults.sprint_speed);
        self.rotation_speed =
            at_least("rotation_speed", self.rotation_speed, 0.0, defaults.rotation_speed);
        self.speed_change_rate = at_least(
            "speed_change_rate",
            self.speed_change_rate,
            MIN_SPEED_CHANGE_RATE,
            defaults.speed_change_rate,
        );
        self.jump_height = at_least("jump_height", self.jump_height, 0.0, defaults.jump_height);

        if !self.gravity.is_finite() {
            tracing::warn!(value = self.gravity, "gravity is not finite, using default");
            self.gravity = DEFAULT_GRAVITY;
        } else if self.gravity > 0.0 {
            tracing::warn!(value = self.gravity, "gravity points up, flipping sign");
            self.gravity = -self.gravity;
        }

        self.terminal_velocity = at_least(
            "terminal_velocity",
            self.terminal_velocity,
            0.0,
            defaults.terminal_velocity,
        );
        self.jump_timeout =
            at_least("jump_timeout", self.jump_timeout, 0.0, defaults.jump_timeout);
        self.fall_timeout =
            at_least("fall_timeout", self.fall_timeout, 0.0, defaults.fall_timeout);
        self.grounded_offset =
            finite_or("grounded_offset", self.grounded_offset, defaults.grounded_offset);
        self.grounded_radius = at_least(
            "grounded_radius",
            self.grounded_radius,
            MIN_GROUNDED_RADIUS,
            defaults.grounded_radius,
        );

        self.top_clamp =
            finite_or("top_clamp", self.top_clamp, defaults.top_clamp).clamp(-360.0, 360.0);
        self.bottom_clamp = finite_or("bottom_clamp", self.bottom_clamp, defaults.bottom_clamp)
            .clamp(-360.0, 360.0);
        if self.bottom_clamp > self.top_clamp {
            tracing::warn!(
                bottom = self.bottom_clamp,
                top = self.top_clamp,
                "pitch clamps are reversed, swapping"
            );
            std::mem::swap(&mut self.bottom_clamp, &mut self.top_clamp);
        }

        self.look_threshold =
            at_least("look_threshold", self.look_threshold, 0.0, defaults.look_threshold);
        self.cast_timeout =
            at_least("cast_timeout", self.cast_timeout, 0.0, defaults.cast_timeout);
        self.target_ray_length = at_least(
            "target_ray_length",
            self.target_ray_length,
            0.0,
            defaults.target_ray_length,
        );
        self.root_motion_scale = at_least(
            "root_motion_scale",
            self.root_motion_scale,
            0.0,
            defaults.root_motion_scale,
        );
        self
    }
}

/// `value` if finite and at least `min`. Below `min` clamps to `min`; NaN and
/// infinities fall back to `default`.
fn at_least(field: &'static str, value: f32, min: f32, default: f32) -> f32 {
    if !value.is_finite() {
        tracing::warn!(field, value, default, "config value is not finite, using default");
        default
    } else if value < min {
        tracing::warn!(field, value, min, "config value out of range, clamping");
        min
    } else {
        value
    }
}

fn finite_or(field: &'static str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(field, value, "config value is not finite, using default");
        fallback
    }
}
