//! Block World Collision
//!
//! A minimal in-memory world of axis-aligned blocks implementing the
//! [`GroundProbe`] and [`Raycaster`] queries. Hosts with their own physics
//! implement those traits directly; this world backs the headless simulator
//! and the integration tests.
//!
//! # Example
//!
//! ```ignore
//! use spellcaster_engine::physics::{Block, BlockWorld, Ray, Raycaster};
//! use glam::Vec3;
//!
//! let mut world = BlockWorld::new();
//! world.insert(Block::ground(100.0));
//! world.insert(Block::new(Vec3::new(0.0, 0.5, -5.0), Vec3::ONE).with_tag("Block"));
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::NEG_Z);
//! if let Some(hit) = world.raycast(ray, 100.0) {
//!     assert!(hit.has_tag("Block"));
//! }
//! ```

use glam::Vec3;

use super::{GroundProbe, LayerMask, Ray, RayHit, Raycaster};

/// Ray-AABB intersection using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (normalized)
/// * `aabb_min` - Minimum corner of the box
/// * `aabb_max` - Maximum corner of the box
///
/// # Returns
///
/// * `Some(t)` - Distance to the nearest intersection in front of the origin
/// * `None` - The ray misses, or the box lies behind the origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Axis-parallel rays get a huge inverse so the slab test still works
    let inv = |d: f32| if d.abs() > 1e-10 { 1.0 / d } else { f32::MAX * d.signum() };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t_lo = (aabb_min - ray_origin) * inv_dir;
    let t_hi = (aabb_max - ray_origin) * inv_dir;

    let t_enter = t_lo.min(t_hi).max_element();
    let t_exit = t_lo.max(t_hi).min_element();

    if t_exit >= t_enter && t_exit >= 0.0 {
        // Origin inside the box reports the exit point
        Some(if t_enter >= 0.0 { t_enter } else { t_exit })
    } else {
        None
    }
}

/// Outward normal of the box face closest to `point`.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = (aabb_max - aabb_min) * 0.5;
    let local = (point - center) / half_extents;
    let abs_local = local.abs();

    if abs_local.x >= abs_local.y && abs_local.x >= abs_local.z {
        Vec3::new(local.x.signum(), 0.0, 0.0)
    } else if abs_local.y >= abs_local.z {
        Vec3::new(0.0, local.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, local.z.signum())
    }
}

/// Whether a sphere overlaps a box (touching counts).
pub fn sphere_aabb_overlap(center: Vec3, radius: f32, aabb_min: Vec3, aabb_max: Vec3) -> bool {
    let closest = center.clamp(aabb_min, aabb_max);
    closest.distance_squared(center) <= radius * radius
}

/// An axis-aligned solid block.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Centre in world space
    pub center: Vec3,
    /// Full size along each axis
    pub scale: Vec3,
    /// Collision layer index
    pub layer: u32,
    /// Optional object tag reported by ray hits
    pub tag: Option<String>,
    /// Trigger volumes are skipped by ground probes
    pub is_trigger: bool,
}

impl Block {
    pub fn new(center: Vec3, scale: Vec3) -> Self {
        Self {
            center,
            scale,
            layer: 0,
            tag: None,
            is_trigger: false,
        }
    }

    /// A flat slab whose top face sits at y = 0.
    pub fn ground(half_width: f32) -> Self {
        Self::new(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(half_width * 2.0, 1.0, half_width * 2.0),
        )
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn on_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }

    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Minimum and maximum corners.
    #[inline]
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let half = self.scale * 0.5;
        (self.center - half, self.center + half)
    }
}

/// A list of blocks answering ground and ray queries by brute force.
#[derive(Debug, Clone, Default)]
pub struct BlockWorld {
    blocks: Vec<Block>,
}

impl BlockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl GroundProbe for BlockWorld {
    fn check_sphere(&self, center: Vec3, radius: f32, layers: LayerMask) -> bool {
        self.blocks.iter().any(|block| {
            if block.is_trigger || !layers.contains(block.layer) {
                return false;
            }
            let (min, max) = block.aabb();
            sphere_aabb_overlap(center, radius, min, max)
        })
    }
}

impl Raycaster for BlockWorld {
    fn raycast(&self, ray: Ray, max_distance: f32) -> Option<RayHit> {
        if ray.direction == Vec3::ZERO {
            return None;
        }

        let mut nearest: Option<(f32, &Block)> = None;
        for block in &self.blocks {
            let (min, max) = block.aabb();
            if let Some(t) = ray_aabb_intersect(ray.origin, ray.direction, min, max) {
                if t <= max_distance && nearest.is_none_or(|(best, _)| t < best) {
                    nearest = Some((t, block));
                }
            }
        }

        nearest.map(|(distance, block)| {
            let point = ray.at(distance);
            let (min, max) = block.aabb();
            RayHit {
                point,
                normal: aabb_surface_normal(point, min, max),
                distance,
                object_center: block.center,
                object_scale: block.scale,
                tag: block.tag.clone(),
            }
        })
    }
}
