//! Host collision queries consumed by the controller.
//!
//! The host world owns all colliders; the controller only ever asks these two
//! questions of it, synchronously, within a tick.

use glam::Vec3;

use super::{LayerMask, Ray};

/// Result of a successful [`Raycaster::raycast`].
#[derive(Debug, Clone, PartialEq)]
pub struct RayHit {
    /// World-space position where the ray met the collider
    pub point: Vec3,
    /// Outward surface normal at `point`
    pub normal: Vec3,
    /// Distance from the ray origin to `point`
    pub distance: f32,
    /// Centre of the hit object
    pub object_center: Vec3,
    /// Size of the hit object along each axis
    pub object_scale: Vec3,
    /// Tag of the hit object, if it has one
    pub tag: Option<String>,
}

impl RayHit {
    /// Whether the hit object carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }
}

/// Sphere overlap test against the host world.
pub trait GroundProbe {
    /// Whether a sphere at `center` with `radius` touches any collider on
    /// one of `layers`. Trigger volumes are ignored.
    fn check_sphere(&self, center: Vec3, radius: f32, layers: LayerMask) -> bool;
}

/// Ray query against the host world.
pub trait Raycaster {
    /// Nearest hit along `ray` within `max_distance`, if any.
    fn raycast(&self, ray: Ray, max_distance: f32) -> Option<RayHit>;
}
