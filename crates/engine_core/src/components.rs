//! Common spatial components used across the simulation.

use glam::Vec3;

use crate::Transform;

/// Axis-aligned bounding box in model space (asset-local coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box extents along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Vertical distance from the model origin down to the lowest point.
    /// Zero when the model origin already sits at or below its base.
    pub fn base_offset(&self) -> f32 {
        (-self.min.y).max(0.0)
    }

    /// World-space Y of the box's lowest point under the given transform.
    /// Only translation and scale matter for the vertical extent here; yaw
    /// rotation about +Y never changes a box's lowest Y.
    pub fn lowest_world_y(&self, transform: &Transform) -> f32 {
        transform.position.y + self.min.y * transform.scale.y
    }
}
