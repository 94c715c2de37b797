// Shared actor kinematics and the capability every rig provides

use glam::Vec2;

use crate::core::{BoundingBox, BoxFrame};
use crate::engine::render::{Canvas, RenderConfig};

/// Authoritative motion state of an actor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    /// Centre of the actor (head centre for fighters) in world units
    pub position: Vec2,
    /// Orientation in radians
    pub angle: f32,
    /// Linear velocity in world units per second
    pub velocity: Vec2,
    /// Angular velocity in radians per second
    pub spin: f32,
}

impl Kinematics {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Integrate position and orientation over `dt`
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.angle += self.spin * dt;
    }
}

/// What the orchestration layer needs from a body shape
///
/// Derived geometry is rebuilt from `Kinematics` every tick and never edited
/// in place.
pub trait Rig {
    /// Recompute all derived geometry for the current kinematics
    fn rebuild(&mut self, kinematics: &Kinematics);

    /// Whether a world point touches this body
    fn is_inside(&self, point: Vec2) -> bool;

    /// Describe the body to a renderer
    fn draw(&self, canvas: &mut dyn Canvas, config: &RenderConfig);

    /// Tracked boxes, one per region in the rig's own region order
    fn boxes(&self, frame: BoxFrame) -> Vec<BoundingBox>;

    /// Box enclosing the whole body, used for world-edge handling
    fn body_box(&self) -> BoundingBox;
}
