//! Follow Camera
//!
//! Keeps a camera at a fixed world-space offset from a target, captured the
//! first time the two are bound together. No smoothing and no rotation.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// Camera position minus target position
    pub offset: Vec3,
}

impl FollowCamera {
    /// Capture the current offset between `camera` and `target`.
    pub fn bind(camera: Vec3, target: Vec3) -> Self {
        Self {
            offset: camera - target,
        }
    }

    pub fn with_offset(offset: Vec3) -> Self {
        Self { offset }
    }

    /// Camera position for a target at `target`. Call once per fixed tick.
    #[inline]
    pub fn update(&self, target: Vec3) -> Vec3 {
        target + self.offset
    }
}
