// Articulated stick-figure geometry

use glam::{Affine2, Vec2};

use crate::core::math::rotate;
use crate::core::{BoundingBox, BoxFrame};
use crate::engine::render::{
    self, Canvas, RenderConfig, BODY_COLOR, HEAD_COLOR, JOINT_COLOR, LEFT_HAND_COLOR, LIMB_COLOR,
    RIGHT_HAND_COLOR,
};

use super::collision;
use super::rig::{Kinematics, Rig};
use super::stats::RigDimensions;

/// Number of animated joints
pub const NUM_JOINTS: usize = 8;

/// Number of limb segments
pub const NUM_SEGMENTS: usize = 9;

/// Joint slots, in the column order used by the fighter clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    LeftHip = 0,
    LeftKnee = 1,
    RightHip = 2,
    RightKnee = 3,
    LeftShoulder = 4,
    RightShoulder = 5,
    LeftForearm = 6,
    RightForearm = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limb {
    Torso = 0,
    LeftUpperArm = 1,
    LeftForearm = 2,
    RightUpperArm = 3,
    RightForearm = 4,
    LeftThigh = 5,
    LeftShin = 6,
    RightThigh = 7,
    RightShin = 8,
}

/// Tracked body regions, in the order boxes are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Head = 0,
    Body = 1,
    LeftHand = 2,
    RightHand = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Mirror an x offset authored for the left side
    fn mirror(self, left_x: f32) -> f32 {
        match self {
            Side::Left => left_x,
            Side::Right => -left_x,
        }
    }
}

/// A limb as a world-space line segment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Stick figure with an 8-joint rig
///
/// Joint angles are authoritative; segments and boxes are scratch buffers
/// owned by this instance and overwritten by every `rebuild`.
#[derive(Debug, Clone)]
pub struct StickSkeleton {
    dims: RigDimensions,
    joints: [f32; NUM_JOINTS],
    segments: [Segment; NUM_SEGMENTS],
    boxes: [BoundingBox; 4],
    position: Vec2,
    angle: f32,
}

impl StickSkeleton {
    pub fn new(dims: RigDimensions) -> Self {
        Self {
            dims,
            joints: [0.0; NUM_JOINTS],
            segments: [Segment::default(); NUM_SEGMENTS],
            boxes: [BoundingBox::default(); 4],
            position: Vec2::ZERO,
            angle: 0.0,
        }
    }

    pub fn dims(&self) -> &RigDimensions {
        &self.dims
    }

    pub fn joint(&self, joint: Joint) -> f32 {
        self.joints[joint as usize]
    }

    /// Copy joint angles from the head of a clip state vector
    pub fn set_joints(&mut self, values: &[f32]) {
        for (joint, value) in self.joints.iter_mut().zip(values) {
            *joint = *value;
        }
    }

    pub fn segment(&self, limb: Limb) -> Segment {
        self.segments[limb as usize]
    }

    pub fn segments(&self) -> &[Segment; NUM_SEGMENTS] {
        &self.segments
    }

    pub fn region(&self, region: Region) -> BoundingBox {
        self.boxes[region as usize]
    }

    /// Centre of the head (the actor's position)
    pub fn head_center(&self) -> Vec2 {
        self.position
    }

    /// Centre of a hand box, from the rest pose rotated by the orientation
    pub fn hand_center(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => self.region(Region::LeftHand).center(),
            Side::Right => self.region(Region::RightHand).center(),
        }
    }

    /// Far end of the left forearm
    pub fn left_fist(&self) -> Vec2 {
        self.segment(Limb::LeftForearm).end
    }

    /// Far end of the right forearm
    pub fn right_fist(&self) -> Vec2 {
        self.segment(Limb::RightForearm).end
    }

    fn rebuild_segments(&mut self) {
        let d = self.dims;
        let root = Affine2::from_translation(self.position) * Affine2::from_angle(self.angle);

        let neck = root * Affine2::from_translation(Vec2::new(0.0, d.body_y()));
        let pelvis = neck * Affine2::from_translation(Vec2::new(0.0, -d.torso_length));
        self.segments[Limb::Torso as usize] = Segment::new(neck.translation, pelvis.translation);

        let (elbow_x, elbow_y) = d.elbow_offset();
        let (knee_x, knee_y) = d.knee_offset();
        let gap = Affine2::from_translation(Vec2::new(0.0, d.joint_gap()));

        for side in [Side::Left, Side::Right] {
            let (shoulder_joint, forearm_joint, hip_joint, knee_joint) = match side {
                Side::Left => (
                    Joint::LeftShoulder,
                    Joint::LeftForearm,
                    Joint::LeftHip,
                    Joint::LeftKnee,
                ),
                Side::Right => (
                    Joint::RightShoulder,
                    Joint::RightForearm,
                    Joint::RightHip,
                    Joint::RightKnee,
                ),
            };
            let (upper_arm, forearm, thigh, shin) = match side {
                Side::Left => (
                    Limb::LeftUpperArm,
                    Limb::LeftForearm,
                    Limb::LeftThigh,
                    Limb::LeftShin,
                ),
                Side::Right => (
                    Limb::RightUpperArm,
                    Limb::RightForearm,
                    Limb::RightThigh,
                    Limb::RightShin,
                ),
            };

            // Arm: shoulder -> elbow -> fist
            let shoulder = root
                * Affine2::from_translation(Vec2::new(side.mirror(-d.shoulder_width), d.arm_y()));
            let elbow = shoulder
                * Affine2::from_angle(self.joint(shoulder_joint))
                * Affine2::from_translation(Vec2::new(side.mirror(elbow_x), elbow_y));
            let wrist_root = elbow * gap;
            let fist = wrist_root
                * Affine2::from_angle(self.joint(forearm_joint))
                * Affine2::from_translation(Vec2::new(
                    side.mirror(-d.forearm_length),
                    -d.forearm_length,
                ));
            self.segments[upper_arm as usize] =
                Segment::new(shoulder.translation, elbow.translation);
            self.segments[forearm as usize] =
                Segment::new(wrist_root.translation, fist.translation);

            // Leg: hip -> knee -> foot
            let hip = root
                * Affine2::from_translation(Vec2::new(side.mirror(-d.hip_width), d.hip_y()));
            let knee = hip
                * Affine2::from_angle(self.joint(hip_joint))
                * Affine2::from_translation(Vec2::new(side.mirror(knee_x), knee_y));
            let shin_root = knee * gap;
            let foot = shin_root
                * Affine2::from_angle(self.joint(knee_joint))
                * Affine2::from_translation(Vec2::new(
                    side.mirror(-d.shin_length / 2.0),
                    -d.shin_length,
                ));
            self.segments[thigh as usize] = Segment::new(hip.translation, knee.translation);
            self.segments[shin as usize] = Segment::new(shin_root.translation, foot.translation);
        }
    }

    /// Region boxes derived from position, orientation and rest offsets only
    fn region_boxes(&self, position: Vec2, angle: f32) -> [BoundingBox; 4] {
        let d = &self.dims;
        let (lx, ly) = d.left_hand_rest();
        let (rx, ry) = d.right_hand_rest();
        let left_hand = position + rotate(Vec2::new(lx, ly), angle);
        let right_hand = position + rotate(Vec2::new(rx, ry), angle);
        let half_width = d.body_half_width();

        let mut boxes = [BoundingBox::default(); 4];
        boxes[Region::Head as usize] = BoundingBox::square(position, d.head_diameter);
        boxes[Region::Body as usize] = BoundingBox::new(
            position.x - half_width,
            position.x + half_width,
            position.y - d.body_depth(),
            position.y + d.head_diameter / 2.0,
        );
        boxes[Region::LeftHand as usize] = BoundingBox::square(left_hand, d.hand_diameter());
        boxes[Region::RightHand as usize] = BoundingBox::square(right_hand, d.hand_diameter());
        boxes
    }
}

impl Default for StickSkeleton {
    fn default() -> Self {
        Self::new(RigDimensions::default())
    }
}

impl Rig for StickSkeleton {
    fn rebuild(&mut self, kinematics: &Kinematics) {
        self.position = kinematics.position;
        self.angle = kinematics.angle;
        self.rebuild_segments();
        self.boxes = self.region_boxes(self.position, self.angle);
    }

    fn is_inside(&self, point: Vec2) -> bool {
        collision::stick_figure_contains(self, point)
    }

    fn draw(&self, canvas: &mut dyn Canvas, config: &RenderConfig) {
        let d = &self.dims;

        canvas.circle(self.position, d.head_diameter, HEAD_COLOR);
        for segment in &self.segments {
            canvas.line(segment.start, segment.end, LIMB_COLOR);
        }

        // Shoulder and hip bars join the left and right limb roots
        let left_arm = self.segment(Limb::LeftUpperArm);
        let right_arm = self.segment(Limb::RightUpperArm);
        canvas.line(left_arm.start, right_arm.start, LIMB_COLOR);
        let left_thigh = self.segment(Limb::LeftThigh);
        let right_thigh = self.segment(Limb::RightThigh);
        canvas.line(left_thigh.start, right_thigh.start, LIMB_COLOR);

        for limb in [
            Limb::LeftUpperArm,
            Limb::RightUpperArm,
            Limb::LeftThigh,
            Limb::RightThigh,
        ] {
            canvas.circle(self.segment(limb).end, d.joint_diameter(), JOINT_COLOR);
        }
        canvas.circle(self.left_fist(), d.hand_diameter(), JOINT_COLOR);
        canvas.circle(self.right_fist(), d.hand_diameter(), JOINT_COLOR);

        const COLORS: [render::Rgba; 4] = [HEAD_COLOR, BODY_COLOR, LEFT_HAND_COLOR, RIGHT_HAND_COLOR];
        match config.box_mode {
            render::BoxMode::None => {}
            render::BoxMode::Absolute => {
                for (bounds, color) in self.boxes.iter().zip(COLORS) {
                    canvas.rect(bounds, color);
                }
            }
            render::BoxMode::Relative => {
                canvas.push_transform(self.position, self.angle);
                for (bounds, color) in self.boxes(BoxFrame::Relative).iter().zip(COLORS) {
                    canvas.rect(bounds, color);
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
            BoxFrame::Absolute => self.boxes.to_vec(),
            BoxFrame::Relative => self.region_boxes(Vec2::ZERO, 0.0).to_vec(),
        }
    }

    fn body_box(&self) -> BoundingBox {
        self.region(Region::Body)
    }
}
