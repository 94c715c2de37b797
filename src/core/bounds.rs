// Axis-aligned bounding boxes shared by geometry, collision and rendering

use glam::Vec2;

/// Axis-aligned rectangle in world units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl BoundingBox {
    /// Build a box from two opposite corners in any order
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Self {
        Self {
            xmin: xmin.min(xmax),
            xmax: xmin.max(xmax),
            ymin: ymin.min(ymax),
            ymax: ymin.max(ymax),
        }
    }

    /// Box of the given half extents around `center`
    pub fn centered(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self::new(
            center.x - half_width,
            center.x + half_width,
            center.y - half_height,
            center.y + half_height,
        )
    }

    /// Square of side `size` around `center`
    pub fn square(center: Vec2, size: f32) -> Self {
        Self::centered(center, size / 2.0, size / 2.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }
}

/// Which reference frame a caller wants boxes expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxFrame {
    /// World coordinates
    #[default]
    Absolute,
    /// Relative to the actor, as if it stood at the origin unrotated
    Relative,
}
