// World bounds and what happens to actors at the edges

use glam::Vec2;

use crate::core::BoundingBox;

/// Extent of the playable world in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl WorldBounds {
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(-20.0, 20.0, -15.0, 15.0)
    }
}

/// Edge policy applied to every actor before it moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeMode {
    /// Actors may leave the world
    #[default]
    Unbounded,
    /// Reflect at all four edges
    BoxWorld,
    /// Wrap horizontally, reflect vertically
    CylinderWorld,
}

/// Which wrapped copies the renderer should draw while an actor straddles
/// a cylinder seam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WrapVisibility {
    /// Draw a copy shifted one world width to the west
    pub west: bool,
    /// Draw a copy shifted one world width to the east
    pub east: bool,
}

/// Simulation-wide settings handed to every update
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationConfig {
    pub bounds: WorldBounds,
    pub edge_mode: EdgeMode,
}

impl SimulationConfig {
    pub fn with_edge_mode(edge_mode: EdgeMode) -> Self {
        Self {
            edge_mode,
            ..Default::default()
        }
    }

    /// Apply the edge policy to an actor whose current extent is `body`
    ///
    /// Adjusts `position` and `velocity` in place and reports which wrapped
    /// copies need drawing.
    pub fn constrain(
        &self,
        body: &BoundingBox,
        position: &mut Vec2,
        velocity: &mut Vec2,
    ) -> WrapVisibility {
        let b = &self.bounds;
        match self.edge_mode {
            EdgeMode::Unbounded => WrapVisibility::default(),
            EdgeMode::BoxWorld => {
                if body.xmax >= b.xmax {
                    position.x -= body.xmax - b.xmax;
                    velocity.x = -velocity.x;
                } else if body.xmin <= b.xmin {
                    position.x += b.xmin - body.xmin;
                    velocity.x = -velocity.x;
                }
                reflect_vertically(b, body, position, velocity);
                WrapVisibility::default()
            }
            EdgeMode::CylinderWorld => {
                let mut wrap = WrapVisibility::default();
                if body.xmax >= b.xmax {
                    wrap.west = true;
                    if body.xmin >= b.xmax {
                        position.x -= b.width();
                    }
                } else if body.xmin <= b.xmin {
                    wrap.east = true;
                    if body.xmax <= b.xmin {
                        position.x += b.width();
                    }
                }
                reflect_vertically(b, body, position, velocity);
                wrap
            }
        }
    }
}

fn reflect_vertically(b: &WorldBounds, body: &BoundingBox, position: &mut Vec2, velocity: &mut Vec2) {
    if body.ymax >= b.ymax {
        position.y -= body.ymax - b.ymax;
        velocity.y = -velocity.y;
    } else if body.ymin <= b.ymin {
        position.y += b.ymin - body.ymin;
        velocity.y = -velocity.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32) -> BoundingBox {
        BoundingBox::centered(Vec2::new(x, y), 2.0, 2.0)
    }

    #[test]
    fn test_default_bounds() {
        let b = WorldBounds::default();
        assert_eq!(b.width(), 40.0);
        assert_eq!(SimulationConfig::default().edge_mode, EdgeMode::Unbounded);
    }

    #[test]
    fn test_unbounded_leaves_actor_alone() {
        let config = SimulationConfig::default();
        let mut position = Vec2::new(30.0, 0.0);
        let mut velocity = Vec2::new(5.0, 0.0);
        let wrap = config.constrain(&body_at(30.0, 0.0), &mut position, &mut velocity);
        assert_eq!(position, Vec2::new(30.0, 0.0));
        assert_eq!(velocity, Vec2::new(5.0, 0.0));
        assert_eq!(wrap, WrapVisibility::default());
    }

    #[test]
    fn test_box_world_reflects_east_edge() {
        let config = SimulationConfig::with_edge_mode(EdgeMode::BoxWorld);
        let mut position = Vec2::new(19.0, 0.0);
        let mut velocity = Vec2::new(5.0, 1.0);
        config.constrain(&body_at(19.0, 0.0), &mut position, &mut velocity);
        assert_eq!(position, Vec2::new(18.0, 0.0));
        assert_eq!(velocity, Vec2::new(-5.0, 1.0));
    }

    #[test]
    fn test_box_world_reflects_floor() {
        let config = SimulationConfig::with_edge_mode(EdgeMode::BoxWorld);
        let mut position = Vec2::new(0.0, -14.5);
        let mut velocity = Vec2::new(0.0, -3.0);
        config.constrain(&body_at(0.0, -14.5), &mut position, &mut velocity);
        assert_eq!(position, Vec2::new(0.0, -13.0));
        assert_eq!(velocity, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_cylinder_flags_while_straddling() {
        let config = SimulationConfig::with_edge_mode(EdgeMode::CylinderWorld);
        let mut position = Vec2::new(20.0, 0.0);
        let mut velocity = Vec2::new(5.0, 0.0);
        let wrap = config.constrain(&body_at(20.0, 0.0), &mut position, &mut velocity);
        assert!(wrap.west);
        assert!(!wrap.east);
        assert_eq!(position.x, 20.0);
        assert_eq!(velocity.x, 5.0);
    }

    #[test]
    fn test_cylinder_wraps_once_fully_across() {
        let config = SimulationConfig::with_edge_mode(EdgeMode::CylinderWorld);
        let mut position = Vec2::new(22.5, 0.0);
        let mut velocity = Vec2::new(5.0, 0.0);
        config.constrain(&body_at(22.5, 0.0), &mut position, &mut velocity);
        assert_eq!(position.x, -17.5);

        let mut position = Vec2::new(-22.5, 0.0);
        let wrap = config.constrain(&body_at(-22.5, 0.0), &mut position, &mut velocity);
        assert!(wrap.east);
        assert_eq!(position.x, 17.5);
    }
}
