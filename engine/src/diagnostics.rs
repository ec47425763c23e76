//! Debug Diagnostics
//!
//! Optional gizmo output for the ground probe and cast rays. The controller
//! only calls into a [`Diagnostics`] sink in debug builds.

use glam::Vec3;

use crate::physics::Ray;

/// RGBA colour with components in `[0, 1]`.
pub type GizmoColor = [f32; 4];

/// Ground probe while grounded
pub const GROUNDED_COLOR: GizmoColor = [0.0, 1.0, 0.0, 0.35];

/// Ground probe while airborne
pub const AIRBORNE_COLOR: GizmoColor = [1.0, 0.0, 0.0, 0.35];

/// Last resolved cast ray
pub const CAST_RAY_COLOR: GizmoColor = [0.2, 0.4, 1.0, 1.0];

/// Host gizmo renderer.
pub trait Diagnostics {
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: GizmoColor);
    fn draw_ray(&mut self, ray: Ray, length: f32, color: GizmoColor);
}

/// A gizmo call captured by [`GizmoLog`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gizmo {
    Sphere {
        center: Vec3,
        radius: f32,
        color: GizmoColor,
    },
    Ray {
        ray: Ray,
        length: f32,
        color: GizmoColor,
    },
}

/// [`Diagnostics`] sink that keeps every gizmo it is given.
#[derive(Debug, Clone, Default)]
pub struct GizmoLog {
    pub gizmos: Vec<Gizmo>,
}

impl GizmoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent probe sphere.
    pub fn last_sphere(&self) -> Option<&Gizmo> {
        self.gizmos
            .iter()
            .rev()
            .find(|g| matches!(g, Gizmo::Sphere { .. }))
    }
}

impl Diagnostics for GizmoLog {
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: GizmoColor) {
        self.gizmos.push(Gizmo::Sphere {
            center,
            radius,
            color,
        });
    }

    fn draw_ray(&mut self, ray: Ray, length: f32, color: GizmoColor) {
        self.gizmos.push(Gizmo::Ray { ray, length, color });
    }
}
