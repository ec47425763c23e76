//! Character Motor
//!
//! The movement service the controller drives. The host resolves collisions
//! for each requested displacement and reports back the resulting velocity.
//!
//! [`KinematicBody`] is a minimal motor over a flat floor, used by the
//! headless simulator and the tests.

use glam::{Quat, Vec3};

use crate::animation::Hand;

/// Host character-movement service.
///
/// Axes follow the engine convention: -Z forward, +X right, +Y up.
pub trait CharacterMotor {
    /// World position of the character's feet.
    fn position(&self) -> Vec3;

    /// World orientation of the body.
    fn rotation(&self) -> Quat;

    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Turn the body about its up axis. Positive degrees turn right.
    fn rotate_yaw(&mut self, degrees: f32);

    /// Move by `displacement`, resolving collisions.
    fn move_by(&mut self, displacement: Vec3);

    /// Move by `delta` outside the locomotion step, e.g. root-motion lift.
    ///
    /// Must leave [`velocity`](Self::velocity) as the last `move_by` set it,
    /// since the next tick reads it back as the current speed. The default
    /// forwards to `move_by` for motors that cannot tell the two apart.
    fn translate(&mut self, delta: Vec3) {
        self.move_by(delta);
    }

    /// Velocity produced by the last move.
    fn velocity(&self) -> Vec3;

    /// Where a cast from `hand` leaves the body. Defaults to chest height.
    fn hand_position(&self, hand: Hand) -> Vec3 {
        let side = match hand {
            Hand::Left => -HAND_SIDE_OFFSET,
            Hand::Right => HAND_SIDE_OFFSET,
        };
        self.position() + self.up() * HAND_HEIGHT + self.right() * side
    }
}

/// Default hand height above the feet in meters
pub const HAND_HEIGHT: f32 = 1.4;

/// Default hand distance from the body centre line in meters
pub const HAND_SIDE_OFFSET: f32 = 0.3;

/// A body sliding over a horizontal floor with no other obstacles.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    position: Vec3,
    /// Yaw in degrees, positive turns right
    yaw: f32,
    velocity: Vec3,
    /// Height of the floor plane
    pub floor_height: f32,
    /// Tick length used to turn displacements into velocity
    pub step: f32,
}

impl KinematicBody {
    pub fn new(position: Vec3, step: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            velocity: Vec3::ZERO,
            floor_height: 0.0,
            step,
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
    }
}

impl CharacterMotor for KinematicBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        // Turning right is a negative rotation about +Y
        Quat::from_rotation_y(-self.yaw.to_radians())
    }

    fn rotate_yaw(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees).rem_euclid(360.0);
    }

    fn move_by(&mut self, displacement: Vec3) {
        let start = self.position;
        let mut end = start + displacement;
        if end.y < self.floor_height {
            end.y = self.floor_height;
        }
        self.position = end;
        self.velocity = if self.step > 0.0 {
            (end - start) / self.step
        } else {
            Vec3::ZERO
        };
    }

    fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        if self.position.y < self.floor_height {
            self.position.y = self.floor_height;
        }
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }
}
