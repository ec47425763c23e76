//! Horizontal Locomotion
//!
//! Speed smoothing and direction for walking, strafing and sprinting.
//! Movement direction is relative to the body's own forward/right axes, which
//! the look controller keeps aligned with the camera's yaw.
//!
//! # Speed Model
//!
//! - Target speed is the walk or sprint speed, or 0 without input
//! - Outside a 0.1 m/s deadband the current speed is blended toward the target
//!   by `speed_change_rate * dt` and rounded to millimetres per second
//! - Inside the deadband it snaps to the target

use glam::{Vec2, Vec3};

use crate::animation::{AnimationCommand, params};
use crate::config::ControllerConfig;
use crate::input::FrameInput;

/// Deadband around the target speed inside which the speed snaps
pub const SPEED_OFFSET: f32 = 0.1;

/// Round to three decimal places.
#[inline]
pub fn round_to_thousandths(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Next horizontal speed given the current one and the target.
///
/// # Arguments
/// * `current` - Current horizontal speed in m/s
/// * `target` - Walk/sprint speed, or 0 without input
/// * `input_magnitude` - Stick deflection (1 for digital input)
/// * `speed_change_rate` - Blend rate per second
/// * `dt` - Tick duration in seconds
pub fn smooth_speed(
    current: f32,
    target: f32,
    input_magnitude: f32,
    speed_change_rate: f32,
    dt: f32,
) -> f32 {
    if current < target - SPEED_OFFSET || current > target + SPEED_OFFSET {
        let t = (speed_change_rate * dt).clamp(0.0, 1.0);
        let blended = current + (target * input_magnitude - current) * t;
        round_to_thousandths(blended).max(0.0)
    } else {
        target
    }
}

/// World-space direction for `move_input` on the given body axes.
///
/// Zero without input, otherwise normalized.
pub fn move_direction(move_input: Vec2, forward: Vec3, right: Vec3) -> Vec3 {
    if move_input == Vec2::ZERO {
        return Vec3::ZERO;
    }
    (right * move_input.x + forward * move_input.y).normalize_or_zero()
}

/// Which directional locomotion clip should be active. Exactly one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveAnimation {
    #[default]
    Idle,
    Running,
    RunningBack,
    StrafingLeft,
    StrafingRight,
    Sprinting,
}

impl MoveAnimation {
    /// Pick the clip from the sign of the dominant input axis.
    ///
    /// Forward wins ties with strafing, and sprint only applies when moving
    /// forward.
    pub fn classify(move_input: Vec2, sprint: bool) -> Self {
        if move_input == Vec2::ZERO {
            return MoveAnimation::Idle;
        }

        if move_input.y.abs() >= move_input.x.abs() {
            if move_input.y > 0.0 {
                if sprint {
                    MoveAnimation::Sprinting
                } else {
                    MoveAnimation::Running
                }
            } else {
                MoveAnimation::RunningBack
            }
        } else if move_input.x < 0.0 {
            MoveAnimation::StrafingLeft
        } else {
            MoveAnimation::StrafingRight
        }
    }

    /// One bool write per directional parameter, only ours set to true.
    pub fn commands(self) -> [AnimationCommand; 5] {
        use AnimationCommand::SetBool;
        [
            SetBool(params::IS_RUNNING, self == MoveAnimation::Running),
            SetBool(params::IS_RUNNING_BACK, self == MoveAnimation::RunningBack),
            SetBool(params::IS_STRAFING_LEFT, self == MoveAnimation::StrafingLeft),
            SetBool(params::IS_STRAFING_RIGHT, self == MoveAnimation::StrafingRight),
            SetBool(params::IS_SPRINTING, self == MoveAnimation::Sprinting),
        ]
    }
}

/// Horizontal part of one tick's movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalMove {
    /// Normalized world direction, zero when idle
    pub direction: Vec3,
    /// Speed in m/s after smoothing
    pub speed: f32,
    pub animation: MoveAnimation,
}

impl HorizontalMove {
    /// Displacement for a tick of length `dt`.
    #[inline]
    pub fn displacement(&self, dt: f32) -> Vec3 {
        self.direction * (self.speed * dt)
    }
}

/// Smoothed horizontal speed and its tuning.
#[derive(Debug, Clone)]
pub struct Locomotion {
    /// Smoothed speed from the last tick, always >= 0
    current_speed: f32,
    /// Walk speed in m/s
    pub move_speed: f32,
    /// Sprint speed in m/s
    pub sprint_speed: f32,
    /// Blend rate per second
    pub speed_change_rate: f32,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self::from_config(&ControllerConfig::default())
    }
}

impl Locomotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            current_speed: 0.0,
            move_speed: config.move_speed,
            sprint_speed: config.sprint_speed,
            speed_change_rate: config.speed_change_rate,
        }
    }

    #[inline]
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Target speed for this input before analog scaling.
    pub fn target_speed(&self, input: &FrameInput) -> f32 {
        if !input.has_move_input() {
            0.0
        } else if input.sprint {
            self.sprint_speed
        } else {
            self.move_speed
        }
    }

    /// Advance one tick.
    ///
    /// # Arguments
    /// * `input` - This tick's input
    /// * `measured_speed` - Horizontal speed the movement service reported
    /// * `forward` / `right` - Body axes in world space
    /// * `dt` - Tick duration in seconds
    pub fn update(
        &mut self,
        input: &FrameInput,
        measured_speed: f32,
        forward: Vec3,
        right: Vec3,
        dt: f32,
    ) -> HorizontalMove {
        let target = self.target_speed(input);
        self.current_speed = smooth_speed(
            measured_speed.max(0.0),
            target,
            input.input_magnitude(),
            self.speed_change_rate,
            dt,
        );

        HorizontalMove {
            direction: move_direction(input.move_input, forward, right),
            speed: self.current_speed,
            animation: MoveAnimation::classify(input.move_input, input.sprint),
        }
    }

    pub fn reset(&mut self) {
        self.current_speed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: Vec3 = Vec3::NEG_Z;
    const RIGHT: Vec3 = Vec3::X;

    #[test]
    fn test_smooth_speed_converges_without_overshoot() {
        // rate * dt = 1.0 reaches the target in one step
        let speed = smooth_speed(0.0, 5.0, 1.0, 10.0, 0.1);
        assert_eq!(speed, 5.0);

        let mut speed = 0.0;
        let mut previous = speed;
        for _ in 0..50 {
            speed = smooth_speed(speed, 5.0, 1.0, 10.0, 0.016);
            assert!(speed >= previous);
            assert!(speed <= 5.0);
            previous = speed;
        }
        assert_eq!(speed, 5.0);
    }

    #[test]
    fn test_smooth_speed_snaps_inside_deadband() {
        assert_eq!(smooth_speed(4.95, 5.0, 1.0, 10.0, 0.016), 5.0);
        assert_eq!(smooth_speed(5.08, 5.0, 1.0, 10.0, 0.016), 5.0);
    }

    #[test]
    fn test_smooth_speed_rounds_to_thousandths() {
        let speed = smooth_speed(0.0, 5.0, 1.0, 10.0, 0.01234);
        assert_eq!(speed, round_to_thousandths(speed));
        assert!((speed - 0.617).abs() < 1e-6);
    }

    #[test]
    fn test_analog_magnitude_scales_target() {
        let speed = smooth_speed(0.0, 5.0, 0.5, 10.0, 0.1);
        assert_eq!(speed, 2.5);
    }

    #[test]
    fn test_decelerates_to_zero() {
        let mut speed = 5.0;
        for _ in 0..100 {
            speed = smooth_speed(speed, 0.0, 1.0, 10.0, 0.016);
        }
        assert_eq!(speed, 0.0);
    }

    #[test]
    fn test_move_direction_body_relative() {
        assert_eq!(move_direction(Vec2::ZERO, FORWARD, RIGHT), Vec3::ZERO);
        assert_eq!(move_direction(Vec2::Y, FORWARD, RIGHT), Vec3::NEG_Z);
        assert_eq!(move_direction(Vec2::NEG_X, FORWARD, RIGHT), Vec3::NEG_X);

        let diagonal = move_direction(Vec2::new(1.0, 1.0), FORWARD, RIGHT);
        assert!((diagonal.length() - 1.0).abs() < 1e-6);
        assert!(diagonal.x > 0.0 && diagonal.z < 0.0);
    }

    #[test]
    fn test_classify_directions() {
        assert_eq!(MoveAnimation::classify(Vec2::ZERO, true), MoveAnimation::Idle);
        assert_eq!(MoveAnimation::classify(Vec2::Y, false), MoveAnimation::Running);
        assert_eq!(MoveAnimation::classify(Vec2::Y, true), MoveAnimation::Sprinting);
        assert_eq!(MoveAnimation::classify(Vec2::NEG_Y, true), MoveAnimation::RunningBack);
        assert_eq!(MoveAnimation::classify(Vec2::NEG_X, false), MoveAnimation::StrafingLeft);
        assert_eq!(MoveAnimation::classify(Vec2::X, false), MoveAnimation::StrafingRight);
        assert_eq!(
            MoveAnimation::classify(Vec2::new(1.0, 1.0), false),
            MoveAnimation::Running
        );
    }

    #[test]
    fn test_commands_are_mutually_exclusive() {
        let commands = MoveAnimation::StrafingLeft.commands();
        let active: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, AnimationCommand::SetBool(_, true)))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(
            *active[0],
            AnimationCommand::SetBool(params::IS_STRAFING_LEFT, true)
        );

        assert!(
            MoveAnimation::Idle
                .commands()
                .iter()
                .all(|c| matches!(c, AnimationCommand::SetBool(_, false)))
        );
    }

    #[test]
    fn test_sprint_target_speed() {
        let mut locomotion = Locomotion::new();
        let mut input = FrameInput::moving(Vec2::Y);
        input.sprint = true;
        assert_eq!(locomotion.target_speed(&input), 8.0);

        let step = locomotion.update(&input, 0.0, FORWARD, RIGHT, 0.1);
        assert_eq!(step.speed, 8.0);
        assert_eq!(step.animation, MoveAnimation::Sprinting);
        assert!((step.displacement(0.1) - Vec3::new(0.0, 0.0, -0.8)).length() < 1e-6);
    }

    #[test]
    fn test_no_input_means_zero_target() {
        let locomotion = Locomotion::new();
        let mut input = FrameInput::new();
        input.sprint = true;
        assert_eq!(locomotion.target_speed(&input), 0.0);
    }
}
