//! Pointer-to-ground picking.
//!
//! The ground is the only pick target: buildings standing under the cursor
//! never block a hit, so the cursor always resolves to the cell beneath it.

use bevy::prelude::*;

use crate::grid::{GridCell, GridConfig};

/// Rays closer than this to horizontal are treated as parallel to the ground.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Convert a pointer position in logical pixels (origin top-left) to
/// normalized device coordinates in [-1, 1], +Y up.
pub fn pointer_to_ndc(pointer: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (pointer.x / viewport.x) * 2.0 - 1.0,
        -(pointer.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// Build a world-space ray through `ndc` from a camera's world transform and
/// projection matrix. Uses reverse-Z depth (near plane at NDC z = 1).
pub fn ndc_to_ray(ndc: Vec2, world_from_view: Mat4, clip_from_view: Mat4) -> Option<Ray3d> {
    let world_from_ndc = world_from_view * clip_from_view.inverse();
    let near = world_from_ndc.project_point3(ndc.extend(1.0));
    let far = world_from_ndc.project_point3(ndc.extend(f32::EPSILON));
    if !near.is_finite() || !far.is_finite() {
        return None;
    }
    let direction = Dir3::new(far - near).ok()?;
    Some(Ray3d {
        origin: near,
        direction,
    })
}

/// The buildable ground: a horizontal rectangle at y = 0 centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub half_extents: Vec2,
}

impl GroundPlane {
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            half_extents: config.ground_half_extents(),
        }
    }

    /// World-space point where `ray` meets the ground, if it does so in front
    /// of the ray origin and within the plane's extent.
    pub fn intersect(&self, ray: Ray3d) -> Option<Vec3> {
        let dir = *ray.direction;
        if dir.y.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = -ray.origin.y / dir.y;
        if t <= 0.0 {
            return None;
        }
        let hit = ray.origin + dir * t;
        if hit.x.abs() > self.half_extents.x || hit.z.abs() > self.half_extents.y {
            return None;
        }
        Some(hit)
    }
}

/// Resolve a pointer position to the grid cell under it, or `None` when the
/// pointer is not over the ground.
pub fn resolve_ground_hit(
    pointer: Vec2,
    viewport: Vec2,
    world_from_view: Mat4,
    clip_from_view: Mat4,
    config: &GridConfig,
) -> Option<GridCell> {
    let ndc = pointer_to_ndc(pointer, viewport)?;
    let ray = ndc_to_ray(ndc, world_from_view, clip_from_view)?;
    cell_under_ray(ray, config)
}

/// Snap the ground hit of an already-built ray.
pub fn cell_under_ray(ray: Ray3d, config: &GridConfig) -> Option<GridCell> {
    let hit = GroundPlane::from_config(config).intersect(ray)?;
    Some(config.snap(hit.x, hit.z))
}
