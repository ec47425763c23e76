//! Cast Targeting
//!
//! Aims a cast from one of the character's hands at whatever the screen-centre
//! ray is pointing at, and works out where a block placed against a hit face
//! would go.

use glam::Vec3;

use super::{Ray, RayHit, Raycaster};

/// Slack used when deciding which face of a block a hit point lies on
pub const FACE_TOLERANCE: f32 = 0.01;

/// Ray from `hand_origin` toward the point the screen ray hits, if that point
/// belongs to an object tagged `target_tag`.
pub fn resolve_cast(
    raycaster: &dyn Raycaster,
    screen_ray: Ray,
    hand_origin: Vec3,
    max_distance: f32,
    target_tag: &str,
) -> Option<(Ray, RayHit)> {
    let hit = raycaster.raycast(screen_ray, max_distance)?;
    if !hit.has_tag(target_tag) {
        return None;
    }
    Some((Ray::towards(hand_origin, hit.point), hit))
}

/// Centre of the block that would sit flush against the face of the block at
/// `center` (size `scale`) containing `hit_point`.
///
/// Faces are checked in +x, -x, +z, -z, +y, -y order. A point inside the
/// block matches no face and returns `center` unchanged.
pub fn adjacent_block_position(hit_point: Vec3, center: Vec3, scale: Vec3) -> Vec3 {
    let diff = hit_point - center;
    let half = scale * 0.5;
    let mut result = center;

    if diff.x + FACE_TOLERANCE >= half.x {
        result.x = center.x + scale.x;
    } else if diff.x - FACE_TOLERANCE <= -half.x {
        result.x = center.x - scale.x;
    } else if diff.z + FACE_TOLERANCE >= half.z {
        result.z = center.z + scale.z;
    } else if diff.z - FACE_TOLERANCE <= -half.z {
        result.z = center.z - scale.z;
    } else if diff.y + FACE_TOLERANCE >= half.y {
        result.y = center.y + scale.y;
    } else if diff.y - FACE_TOLERANCE <= -half.y {
        result.y = center.y - scale.y;
    }

    result
}

/// [`adjacent_block_position`] for a ray hit.
pub fn adjacent_to_hit(hit: &RayHit) -> Vec3 {
    adjacent_block_position(hit.point, hit.object_center, hit.object_scale)
}
