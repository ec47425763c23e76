//! Root Motion Filter
//!
//! Animator root motion is only trusted for vertical lift (e.g. a standing
//! jump clip raising the body). Horizontal travel always comes from the
//! locomotion controller, so those components are discarded.

use glam::Vec3;

/// Default multiplier applied to filtered lift
pub const DEFAULT_ROOT_MOTION_SCALE: f32 = 10.0;

/// Turns raw animator deltas into the displacement applied to the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMotionFilter {
    /// Multiplier applied to the remaining upward component
    pub scale: f32,
}

impl Default for RootMotionFilter {
    fn default() -> Self {
        Self {
            scale: DEFAULT_ROOT_MOTION_SCALE,
        }
    }
}

impl RootMotionFilter {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Keep only the upward part of `delta`, scaled.
    pub fn filter(&self, delta: Vec3) -> Vec3 {
        Vec3::new(0.0, delta.y.max(0.0) * self.scale, 0.0)
    }
}
