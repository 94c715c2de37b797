// Rendering seam
//
// The simulation never touches pixels. Rigs describe themselves to a `Canvas`
// in world units and the backend decides how to rasterise that.

use glam::Vec2;

use crate::core::BoundingBox;

/// RGBA color in [0, 1]
pub type Rgba = [f32; 4];

pub const HEAD_COLOR: Rgba = [1.0, 1.0, 0.0, 1.0];
pub const BODY_COLOR: Rgba = [0.0, 1.0, 0.0, 1.0];
pub const LEFT_HAND_COLOR: Rgba = [0.0, 0.0, 1.0, 1.0];
pub const RIGHT_HAND_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const LIMB_COLOR: Rgba = [0.31, 0.31, 0.31, 1.0];
pub const JOINT_COLOR: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const FACE_BOX_COLOR: Rgba = [1.0, 0.0, 0.0, 1.0];

/// Length of the axes drawn for an object's reference frame
pub const REFERENCE_FRAME_LENGTH: f32 = 2.0;

/// Which bounding boxes, if any, should be drawn over actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxMode {
    #[default]
    None,
    Absolute,
    Relative,
}

/// Display switches handed to every draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub box_mode: BoxMode,
    pub draw_reference_frame: bool,
}

/// Drawing backend used by the rigs
///
/// All coordinates are in world units. `push_transform` composes a
/// translation followed by a rotation onto the current transform.
pub trait Canvas {
    fn push_transform(&mut self, translation: Vec2, angle: f32);
    fn pop_transform(&mut self);
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba);
    fn circle(&mut self, center: Vec2, diameter: f32, color: Rgba);
    fn ellipse(&mut self, center: Vec2, width: f32, height: f32, angle: f32, color: Rgba);
    fn rect(&mut self, bounds: &BoundingBox, color: Rgba);
}

/// Draw the x (red) and y (green) axes of the current transform
pub fn draw_reference_frame(canvas: &mut dyn Canvas) {
    canvas.line(
        Vec2::ZERO,
        Vec2::new(REFERENCE_FRAME_LENGTH, 0.0),
        [1.0, 0.0, 0.0, 1.0],
    );
    canvas.line(
        Vec2::ZERO,
        Vec2::new(0.0, REFERENCE_FRAME_LENGTH),
        [0.0, 1.0, 0.0, 1.0],
    );
}

/// Canvas that logs every call at trace level and keeps a count
#[derive(Debug, Default)]
pub struct TraceCanvas {
    depth: usize,
    calls: usize,
}

impl TraceCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of primitives drawn so far
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Current transform stack depth
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Canvas for TraceCanvas {
    fn push_transform(&mut self, translation: Vec2, angle: f32) {
        self.depth += 1;
        log::trace!("push {:?} @ {:.3} rad", translation, angle);
    }

    fn pop_transform(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        log::trace!("pop");
    }

    fn line(&mut self, from: Vec2, to: Vec2, _color: Rgba) {
        self.calls += 1;
        log::trace!("line {:?} -> {:?}", from, to);
    }

    fn circle(&mut self, center: Vec2, diameter: f32, _color: Rgba) {
        self.calls += 1;
        log::trace!("circle {:?} d={:.3}", center, diameter);
    }

    fn ellipse(&mut self, center: Vec2, width: f32, height: f32, angle: f32, _color: Rgba) {
        self.calls += 1;
        log::trace!(
            "ellipse {:?} {:.3}x{:.3} @ {:.3} rad",
            center,
            width,
            height,
            angle
        );
    }

    fn rect(&mut self, bounds: &BoundingBox, _color: Rgba) {
        self.calls += 1;
        log::trace!("rect {:?}", bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_frame_draws_two_axes() {
        let mut canvas = TraceCanvas::new();
        draw_reference_frame(&mut canvas);
        assert_eq!(canvas.calls(), 2);
    }

    #[test]
    fn test_transform_stack_depth() {
        let mut canvas = TraceCanvas::new();
        canvas.push_transform(Vec2::new(1.0, 2.0), 0.5);
        canvas.push_transform(Vec2::ZERO, 0.0);
        assert_eq!(canvas.depth(), 2);
        canvas.pop_transform();
        canvas.pop_transform();
        canvas.pop_transform();
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_default_config_draws_no_boxes() {
        let config = RenderConfig::default();
        assert_eq!(config.box_mode, BoxMode::None);
        assert!(!config.draw_reference_frame);
    }
}
