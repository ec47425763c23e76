//! Look Controller
//!
//! Turns look input into camera-rig pitch and body yaw. Pitch is accumulated
//! here and clamped; yaw is handed back as a per-tick delta because the body
//! transform belongs to the host.
//!
//! Key features:
//! - Angles in degrees
//! - Pointer input is used as-is, stick input is scaled by tick duration
//! - Pitch clamped to `[bottom_clamp, top_clamp]` after wrapping into (-360, 360)

use glam::{Quat, Vec2};

use crate::config::ControllerConfig;
use crate::input::ControlScheme;

/// Default highest pitch in degrees
pub const DEFAULT_TOP_CLAMP: f32 = 70.0;
/// Default lowest pitch in degrees
pub const DEFAULT_BOTTOM_CLAMP: f32 = -80.0;

/// Wrap `angle` once into (-360, 360) and clamp it to `[min, max]`.
///
/// `min` must not exceed `max`.
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    let mut angle = angle;
    if angle < -360.0 {
        angle += 360.0;
    }
    if angle > 360.0 {
        angle -= 360.0;
    }
    angle.clamp(min, max)
}

/// Result of one tick of look input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookUpdate {
    /// Pitch after this tick, in degrees
    pub pitch: f32,
    /// Yaw to apply to the body this tick, in degrees
    pub yaw_delta: f32,
}

/// Accumulated camera pitch and look tuning.
#[derive(Clone, Debug)]
pub struct LookController {
    /// Current pitch in degrees, always within the limits
    pitch: f32,
    /// Degrees per unit of look input
    pub rotation_speed: f32,
    /// Look magnitude at or below which input is ignored
    pub threshold: f32,
    /// Pitch limits (bottom, top) in degrees
    pitch_limits: (f32, f32),
}

impl Default for LookController {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            rotation_speed: 2.0,
            threshold: 0.01,
            pitch_limits: (DEFAULT_BOTTOM_CLAMP, DEFAULT_TOP_CLAMP),
        }
    }
}

impl LookController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::with_limits(config.bottom_clamp, config.top_clamp)
            .with_rotation_speed(config.rotation_speed)
            .with_threshold(config.look_threshold)
    }

    /// Controller with custom pitch limits. Reversed limits are swapped.
    pub fn with_limits(bottom: f32, top: f32) -> Self {
        let pitch_limits = if bottom <= top { (bottom, top) } else { (top, bottom) };
        Self {
            pitch: 0.0_f32.clamp(pitch_limits.0, pitch_limits.1),
            pitch_limits,
            ..Default::default()
        }
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch directly (degrees, clamped to limits).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = clamp_angle(pitch, self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Pitch limits (bottom, top) in degrees.
    #[inline]
    pub fn pitch_limits(&self) -> (f32, f32) {
        self.pitch_limits
    }

    /// Local rotation of the camera rig for the current pitch.
    pub fn rig_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch.to_radians())
    }

    /// Apply one tick of look input.
    ///
    /// Returns `None` when the input is within the threshold, in which case
    /// neither the rig nor the body should be touched.
    pub fn apply(&mut self, look: Vec2, scheme: ControlScheme, dt: f32) -> Option<LookUpdate> {
        if look.length() <= self.threshold {
            return None;
        }

        let multiplier = scheme.look_time_multiplier(dt);
        self.set_pitch(self.pitch + look.y * self.rotation_speed * multiplier);

        Some(LookUpdate {
            pitch: self.pitch,
            yaw_delta: look.x * self.rotation_speed * multiplier,
        })
    }

    /// Reset pitch to level.
    pub fn reset(&mut self) {
        self.set_pitch(0.0);
    }
}
