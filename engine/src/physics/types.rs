//! Physics type re-exports from glam, plus the ray type shared by queries
//! and targeting.

pub use glam::{Quat, Vec3};

/// A half-line starting at `origin` and heading along `direction`.
///
/// `direction` is normalized on construction; a zero direction stays zero
/// and such a ray never hits anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from `origin` through `target`.
    pub fn towards(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, target - origin)
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
