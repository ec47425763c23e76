//! Ground probe placement.
//!
//! The grounded flag comes from a sphere overlap placed at the character's
//! feet rather than from the movement service's own contact flag, which
//! flickers on rough ground.

use glam::Vec3;

use super::{GroundProbe, LayerMask};
use crate::config::ControllerConfig;

/// Where and how to probe for ground below a character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundCheck {
    /// Distance below the feet; negative values raise the sphere
    pub offset: f32,
    /// Probe sphere radius
    pub radius: f32,
    /// Layers counted as ground
    pub layers: LayerMask,
}

impl GroundCheck {
    pub fn new(offset: f32, radius: f32, layers: LayerMask) -> Self {
        Self {
            offset,
            radius,
            layers,
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(config.grounded_offset, config.grounded_radius, config.ground_layers)
    }

    /// Centre of the probe sphere for a character standing at `position`.
    #[inline]
    pub fn probe_center(&self, position: Vec3, up: Vec3) -> Vec3 {
        position - up * self.offset
    }

    /// Run the overlap query.
    pub fn is_grounded(&self, probe: &dyn GroundProbe, position: Vec3, up: Vec3) -> bool {
        probe.check_sphere(self.probe_center(position, up), self.radius, self.layers)
    }
}
