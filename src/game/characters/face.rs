// Face overlay - an ellipse that rides on top of a fighter's head

use glam::Vec2;

use crate::core::math::TRIG_EPSILON;
use crate::core::{BoundingBox, BoxFrame};
use crate::engine::render::{self, BoxMode, Canvas, RenderConfig, FACE_BOX_COLOR, HEAD_COLOR};

use super::collision;
use super::rig::{Kinematics, Rig};

/// Height over width of the portrait drawn inside the face ellipse
pub const PORTRAIT_ASPECT: f32 = 1.25;

/// Ellipse rig used by the face overlays
#[derive(Debug, Clone)]
pub struct FaceEllipse {
    width: f32,
    height: f32,
    position: Vec2,
    angle: f32,
    bounds: BoundingBox,
}

impl FaceEllipse {
    /// Ellipse of the given width whose height follows the portrait's aspect
    pub fn new(width: f32, aspect: f32) -> Self {
        Self {
            width,
            height: width * aspect,
            position: Vec2::ZERO,
            angle: 0.0,
            bounds: BoundingBox::default(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Half extents of the axis-aligned box around the rotated ellipse
    ///
    /// Near-vertical and near-horizontal orientations take their own branch
    /// since the tangent formulas divide by cos and sin respectively.
    pub fn half_extents(&self, angle: f32) -> (f32, f32) {
        let (sin_a, cos_a) = angle.sin_cos();
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;

        if cos_a.abs() > TRIG_EPSILON && sin_a.abs() > TRIG_EPSILON {
            // Parameters of the vertical and horizontal tangent points on
            // (w/2 cos t, h/2 sin t)
            let t_vertical = (-(self.height * sin_a) / (self.width * cos_a)).atan();
            let t_horizontal = ((self.height * cos_a) / (self.width * sin_a)).atan();

            let dx = cos_a * half_width * t_vertical.cos() - sin_a * half_height * t_vertical.sin();
            let dy =
                sin_a * half_width * t_horizontal.cos() + cos_a * half_height * t_horizontal.sin();
            (dx.abs(), dy.abs())
        } else if cos_a.abs() <= TRIG_EPSILON {
            (half_height, half_width)
        } else {
            (half_width, half_height)
        }
    }
}

impl Rig for FaceEllipse {
    fn rebuild(&mut self, kinematics: &Kinematics) {
        self.position = kinematics.position;
        self.angle = kinematics.angle;
        let (hw, hh) = self.half_extents(self.angle);
        self.bounds = BoundingBox::centered(self.position, hw, hh);
    }

    fn is_inside(&self, point: Vec2) -> bool {
        collision::ellipse_contains(self.position, self.width / 2.0, self.height / 2.0, point)
    }

    fn draw(&self, canvas: &mut dyn Canvas, config: &RenderConfig) {
        canvas.ellipse(self.position, self.width, self.height, self.angle, HEAD_COLOR);

        match config.box_mode {
            BoxMode::None => {}
            BoxMode::Absolute => canvas.rect(&self.bounds, FACE_BOX_COLOR),
            BoxMode::Relative => {
                canvas.push_transform(self.position, self.angle);
                for bounds in self.boxes(BoxFrame::Relative) {
                    canvas.rect(&bounds, FACE_BOX_COLOR);
                }
                canvas.pop_transform();
            }
        }

        if config.draw_reference_frame {
            canvas.push_transform(self.position, self.angle);
            render::draw_reference_frame(canvas);
            canvas.pop_transform();
        }
    }

    fn boxes(&self, frame: BoxFrame) -> Vec<BoundingBox> {
        match frame {
            BoxFrame::Absolute => vec![self.bounds],
            BoxFrame::Relative => vec![BoundingBox::centered(
                Vec2::ZERO,
                self.width / 2.0,
                self.height / 2.0,
            )],
        }
    }

    fn body_box(&self) -> BoundingBox {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::render::TraceCanvas;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn face_at(position: Vec2, angle: f32) -> FaceEllipse {
        let mut face = FaceEllipse::new(2.0, 1.5);
        face.rebuild(&Kinematics {
            position,
            angle,
            ..Default::default()
        });
        face
    }

    #[test]
    fn test_axis_aligned_extents() {
        let face = FaceEllipse::new(2.0, 1.5);
        assert_eq!(face.height, 3.0);
        assert_eq!(face.half_extents(0.0), (1.0, 1.5));
        // Upside down is still the near-horizontal branch
        let (hw, hh) = face.half_extents(PI);
        assert_abs_diff_eq!(hw, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hh, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn test_quarter_turn_swaps_extents() {
        let face = FaceEllipse::new(2.0, 1.5);
        let (hw, hh) = face.half_extents(FRAC_PI_2);
        assert_abs_diff_eq!(hw, 1.5, epsilon = 1e-6);
        assert_abs_diff_eq!(hh, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_general_case_matches_closed_form() {
        let face = FaceEllipse::new(2.0, 1.5);
        let (a, b) = (1.0_f32, 1.5_f32);
        for angle in [0.3, FRAC_PI_4, 1.2, 2.5, 3.2, -0.7] {
            let (s, c) = angle.sin_cos();
            let expected_hw = (a * a * c * c + b * b * s * s).sqrt();
            let expected_hh = (a * a * s * s + b * b * c * c).sqrt();
            let (hw, hh) = face.half_extents(angle);
            assert_abs_diff_eq!(hw, expected_hw, epsilon = 1e-4);
            assert_abs_diff_eq!(hh, expected_hh, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_circle_extents_ignore_angle() {
        let face = FaceEllipse::new(2.0, 1.0);
        for angle in [0.0, 0.4, FRAC_PI_2, 3.2] {
            let (hw, hh) = face.half_extents(angle);
            assert_abs_diff_eq!(hw, 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(hh, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rebuild_centres_box_on_position() {
        let face = face_at(Vec2::new(-7.0, 2.0), 0.0);
        assert_eq!(face.body_box(), BoundingBox::new(-8.0, -6.0, 0.5, 3.5));
        assert_eq!(face.boxes(BoxFrame::Absolute).len(), 1);
        assert_eq!(
            face.boxes(BoxFrame::Relative)[0],
            BoundingBox::new(-1.0, 1.0, -1.5, 1.5)
        );
    }

    #[test]
    fn test_is_inside_uses_quadratic_form() {
        let face = face_at(Vec2::new(3.0, 0.0), 0.0);
        assert!(face.is_inside(Vec2::new(3.0, 0.0)));
        assert!(face.is_inside(Vec2::new(4.0, 0.0)));
        assert!(face.is_inside(Vec2::new(3.0, -1.5)));
        assert!(!face.is_inside(Vec2::new(4.0, 1.0)));
        assert!(!face.is_inside(Vec2::new(3.0, 1.6)));
    }

    #[test]
    fn test_draw_with_boxes_and_frame() {
        let face = face_at(Vec2::ZERO, 3.2);
        let mut canvas = TraceCanvas::new();
        face.draw(
            &mut canvas,
            &RenderConfig {
                box_mode: BoxMode::Absolute,
                draw_reference_frame: true,
            },
        );
        assert_eq!(canvas.calls(), 1 + 1 + 2);
        assert_eq!(canvas.depth(), 0);
    }
}
