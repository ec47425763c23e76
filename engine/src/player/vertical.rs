//! Vertical Motion
//!
//! Gravity, jumping and landing. Tracks the grounded edge, the jump budget
//! (one grounded jump plus aerial flips) and the two timeouts that gate
//! jumping and the falling animation.

use crate::config::ControllerConfig;

/// Vertical velocity held while grounded so the body stays pressed to slopes
pub const GROUNDED_VELOCITY: f32 = -2.0;

/// Which jump animation an accepted jump should trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// First jump, taken from the ground or after walking off a ledge
    Jump,
    /// Any later jump before landing
    Flip,
}

/// Vertical state and its tuning.
#[derive(Debug, Clone)]
pub struct VerticalMotion {
    velocity: f32,
    grounded: bool,
    was_grounded: bool,
    jump_count: u32,
    jump_timeout_remaining: f32,
    fall_timeout_remaining: f32,
    falling: bool,

    gravity: f32,
    terminal_velocity: f32,
    launch_velocity: f32,
    max_jump_count: u32,
    jump_timeout: f32,
    fall_timeout: f32,
}

impl Default for VerticalMotion {
    fn default() -> Self {
        Self::from_config(&ControllerConfig::default())
    }
}

impl VerticalMotion {
    /// Spawn state: standing on the ground at rest.
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            velocity: 0.0,
            grounded: true,
            was_grounded: true,
            jump_count: 0,
            jump_timeout_remaining: config.jump_timeout,
            fall_timeout_remaining: config.fall_timeout,
            falling: false,
            gravity: config.gravity,
            terminal_velocity: config.terminal_velocity,
            launch_velocity: config.jump_launch_velocity(),
            max_jump_count: config.max_jump_count,
            jump_timeout: config.jump_timeout,
            fall_timeout: config.fall_timeout,
        }
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[inline]
    pub fn was_grounded(&self) -> bool {
        self.was_grounded
    }

    #[inline]
    pub fn jump_count(&self) -> u32 {
        self.jump_count
    }

    #[inline]
    pub fn max_jump_count(&self) -> u32 {
        self.max_jump_count
    }

    #[inline]
    pub fn jump_timeout_remaining(&self) -> f32 {
        self.jump_timeout_remaining
    }

    #[inline]
    pub fn fall_timeout_remaining(&self) -> f32 {
        self.fall_timeout_remaining
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        self.falling
    }

    /// Velocity an accepted jump sets.
    #[inline]
    pub fn launch_velocity(&self) -> f32 {
        self.launch_velocity
    }

    /// Overwrite the vertical velocity, clamped to terminal velocity.
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity.clamp(-self.terminal_velocity, self.terminal_velocity);
    }

    /// Record this tick's probe result.
    ///
    /// Returns true on the landing edge (airborne last tick, grounded now),
    /// which also refills the jump budget and restarts the jump timeout.
    pub fn update_grounded(&mut self, grounded: bool) -> bool {
        self.was_grounded = self.grounded;
        self.grounded = grounded;

        let landed = grounded && !self.was_grounded;
        if landed {
            self.jump_count = 0;
            self.jump_timeout_remaining = self.jump_timeout;
            tracing::debug!(velocity = self.velocity, "landed");
        }
        landed
    }

    /// Timeouts, the grounded bias and gravity for one tick.
    pub fn apply_gravity(&mut self, dt: f32) {
        if self.grounded {
            self.fall_timeout_remaining = self.fall_timeout;
            self.falling = false;
            if self.velocity < 0.0 {
                self.velocity = GROUNDED_VELOCITY;
            }
        } else {
            self.fall_timeout_remaining = (self.fall_timeout_remaining - dt).max(0.0);
            if self.fall_timeout_remaining <= 0.0 && !self.falling {
                self.falling = true;
                tracing::debug!(velocity = self.velocity, "entered free fall");
            }
        }
        self.jump_timeout_remaining = (self.jump_timeout_remaining - dt).max(0.0);

        self.set_velocity(self.velocity + self.gravity * dt);
    }

    /// Whether a jump would be accepted right now.
    pub fn can_jump(&self) -> bool {
        if self.jump_count >= self.max_jump_count {
            return false;
        }
        self.jump_count > 0 || self.jump_timeout_remaining <= 0.0
    }

    /// Attempt a jump. Call only on the rising edge of the jump input.
    pub fn try_jump(&mut self) -> Option<JumpKind> {
        if !self.can_jump() {
            return None;
        }

        let kind = if self.jump_count == 0 {
            JumpKind::Jump
        } else {
            JumpKind::Flip
        };
        self.jump_count += 1;
        self.set_velocity(self.launch_velocity);
        tracing::debug!(?kind, jump_count = self.jump_count, "jump accepted");
        Some(kind)
    }

    /// Back to the spawn state.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
        self.grounded = true;
        self.was_grounded = true;
        self.jump_count = 0;
        self.jump_timeout_remaining = self.jump_timeout;
        self.fall_timeout_remaining = self.fall_timeout;
        self.falling = false;
    }
}
