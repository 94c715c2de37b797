// Actor entity - kinematics, pose machine and body shape driven together

use glam::Vec2;

use crate::core::{BoundingBox, BoxFrame};
use crate::engine::render::{Canvas, RenderConfig};
use crate::engine::world::{SimulationConfig, WrapVisibility};

use super::clips::ClipSet;
use super::face::FaceEllipse;
use super::rig::{Kinematics, Rig};
use super::skeleton::StickSkeleton;
use super::state::{Command, PoseSample, PoseState, PoseStateMachine};
use super::stats::{RigDimensions, FACE_ANGLE, INITIAL_HEALTH};

/// The two body shapes an actor can have
#[derive(Debug, Clone)]
pub enum Body {
    Fighter(StickSkeleton),
    Face(FaceEllipse),
}

impl Body {
    fn rig(&self) -> &dyn Rig {
        match self {
            Body::Fighter(skeleton) => skeleton,
            Body::Face(face) => face,
        }
    }

    fn rig_mut(&mut self) -> &mut dyn Rig {
        match self {
            Body::Fighter(skeleton) => skeleton,
            Body::Face(face) => face,
        }
    }
}

impl Rig for Body {
    fn rebuild(&mut self, kinematics: &Kinematics) {
        self.rig_mut().rebuild(kinematics);
    }

    fn is_inside(&self, point: Vec2) -> bool {
        self.rig().is_inside(point)
    }

    fn draw(&self, canvas: &mut dyn Canvas, config: &RenderConfig) {
        self.rig().draw(canvas, config);
    }

    fn boxes(&self, frame: BoxFrame) -> Vec<BoundingBox> {
        self.rig().boxes(frame)
    }

    fn body_box(&self) -> BoundingBox {
        self.rig().body_box()
    }
}

/// A keyframe-animated object in the world
///
/// Fighters and face overlays share everything but their body shape.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Display name
    pub name: String,
    /// Current health; only ever lowered by explicit hits
    pub health: i32,

    kinematics: Kinematics,
    /// Height clip offsets are measured from
    ground_y: f32,
    state_machine: PoseStateMachine,
    clips: ClipSet,
    body: Body,
    wrap: WrapVisibility,
}

impl Actor {
    /// Stick-figure fighter standing at `position`
    pub fn fighter(name: &str, position: Vec2, clips: ClipSet) -> Self {
        let skeleton = StickSkeleton::new(RigDimensions::default());
        Self::new(name, Kinematics::at(position), clips, Body::Fighter(skeleton))
    }

    /// Face overlay of the given width centred at `position`
    pub fn face(
        name: &str,
        position: Vec2,
        width: f32,
        aspect: f32,
        clips: ClipSet,
    ) -> Self {
        let kinematics = Kinematics {
            angle: FACE_ANGLE,
            ..Kinematics::at(position)
        };
        Self::new(
            name,
            kinematics,
            clips,
            Body::Face(FaceEllipse::new(width, aspect)),
        )
    }

    fn new(name: &str, kinematics: Kinematics, clips: ClipSet, mut body: Body) -> Self {
        body.rebuild(&kinematics);
        log::debug!("{} spawned at {:?}", name, kinematics.position);
        Self {
            name: name.to_string(),
            health: INITIAL_HEALTH,
            ground_y: kinematics.position.y,
            kinematics,
            state_machine: PoseStateMachine::new(),
            clips,
            body,
            wrap: WrapVisibility::default(),
        }
    }

    /// Swap the clips this actor animates with; a clip in flight continues
    /// from the same elapsed time
    pub fn set_clips(&mut self, clips: ClipSet) {
        self.clips = clips;
    }

    /// Ask for the pose matching `command`; ignored unless idle
    pub fn request(&mut self, command: Command) -> bool {
        self.state_machine.request(command)
    }

    /// Advance the actor by `dt` seconds
    ///
    /// Samples the active clip, applies the world edge policy to the previous
    /// extent, integrates motion and rebuilds the body geometry.
    pub fn update(&mut self, dt: f32, config: &SimulationConfig) {
        if let Some(sample) = self.state_machine.update(dt, &self.clips) {
            self.apply_sample(&sample);
        }

        let body_box = self.body.body_box();
        self.wrap = config.constrain(
            &body_box,
            &mut self.kinematics.position,
            &mut self.kinematics.velocity,
        );

        self.kinematics.integrate(dt);
        self.body.rebuild(&self.kinematics);
    }

    fn apply_sample(&mut self, sample: &PoseSample) {
        if let Body::Fighter(skeleton) = &mut self.body {
            skeleton.set_joints(&sample.values);
        }

        let Some(&scalar) = sample.values.last() else {
            return;
        };
        let k = &mut self.kinematics;
        match sample.state {
            PoseState::Idle => {}
            PoseState::Jumping => k.position.y = self.ground_y + scalar,
            PoseState::WalkingLeft | PoseState::WalkingRight => k.velocity.x = scalar,
            PoseState::PunchingLeft => {
                k.position.y = self.ground_y + scalar;
                k.velocity.x = scalar;
            }
            // The right punch drifts the opposite way
            PoseState::PunchingRight => {
                k.position.y = self.ground_y + scalar;
                k.velocity.x = -scalar;
            }
        }
    }

    /// Lower health by one hit, never below zero
    pub fn take_hit(&mut self) -> i32 {
        if self.health > 0 {
            self.health -= 1;
        }
        self.health
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health <= 0
    }

    /// Whether a world point touches this actor's body
    pub fn is_inside(&self, point: Vec2) -> bool {
        self.body.is_inside(point)
    }

    /// Fist of the arm currently punching, if any
    pub fn active_fist(&self) -> Option<Vec2> {
        let Body::Fighter(skeleton) = &self.body else {
            return None;
        };
        match self.state() {
            PoseState::PunchingLeft => Some(skeleton.left_fist()),
            PoseState::PunchingRight => Some(skeleton.right_fist()),
            _ => None,
        }
    }

    /// Draw the actor plus any wrapped copies straddling a cylinder seam
    pub fn draw(&self, canvas: &mut dyn Canvas, render: &RenderConfig, sim: &SimulationConfig) {
        self.body.draw(canvas, render);

        let width = sim.bounds.width();
        for (visible, shift) in [(self.wrap.west, -width), (self.wrap.east, width)] {
            if visible {
                canvas.push_transform(Vec2::new(shift, 0.0), 0.0);
                self.body.draw(canvas, render);
                canvas.pop_transform();
            }
        }
    }

    pub fn state(&self) -> PoseState {
        self.state_machine.state()
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.position
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}
