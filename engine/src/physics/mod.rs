//! Physics module
//!
//! Everything the controller needs from the host's collision world, and a
//! small block world that implements it for headless use.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, angles in degrees unless a
//! function says otherwise.
//!
//! # Submodules
//!
//! - [`types`] - glam re-exports and [`Ray`]
//! - [`layers`] - [`LayerMask`] filtering
//! - [`query`] - [`GroundProbe`] and [`Raycaster`] host traits
//! - [`ground`] - [`GroundCheck`] probe placement
//! - [`collision`] - ray/sphere vs box tests and [`BlockWorld`]
//! - [`targeting`] - cast aiming and adjacent-block placement

pub mod collision;
pub mod ground;
pub mod layers;
pub mod query;
pub mod targeting;
pub mod types;

pub use collision::{
    Block, BlockWorld, aabb_surface_normal, ray_aabb_intersect, sphere_aabb_overlap,
};
pub use ground::GroundCheck;
pub use layers::LayerMask;
pub use query::{GroundProbe, RayHit, Raycaster};
pub use targeting::{adjacent_block_position, adjacent_to_hit, resolve_cast};
pub use types::{Quat, Ray, Vec3};
