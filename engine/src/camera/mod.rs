//! Camera Module
//!
//! Camera-rig pitch, body yaw and a simple follow camera.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod follow;
pub mod look;

use glam::Quat;

use crate::physics::Ray;

pub use follow::FollowCamera;
pub use look::{DEFAULT_BOTTOM_CLAMP, DEFAULT_TOP_CLAMP, LookController, LookUpdate, clamp_angle};

/// The transform the camera follows, owned by the host.
pub trait CameraRig {
    /// Overwrite the rig's rotation relative to its parent.
    fn set_local_rotation(&mut self, rotation: Quat);

    /// Ray through the centre of the screen, used to aim casts.
    ///
    /// Rigs that cannot aim return `None` and casts resolve no target.
    fn aim_ray(&self) -> Option<Ray> {
        None
    }
}
