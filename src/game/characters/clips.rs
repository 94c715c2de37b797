// Authored animation clips
//
// Each fighter row is: L hip, L knee, R hip, R knee, L shoulder, R shoulder,
// L forearm, R forearm, scalar, time. Face rows are: scalar, time.
// The scalar is a vertical offset for jumps and punches and a horizontal
// velocity for walks.

use std::sync::Arc;

use super::animation::{
    EaseInOutInterpolator, Interpolator, KeyframeError, KeyframeTable, LinearInterpolator,
};
use super::state::PoseState;

/// Columns in a fighter clip row (8 joints, one scalar, time)
pub const FIGHTER_ROW: usize = 10;

/// Columns in a face clip row (one scalar, time)
pub const FACE_ROW: usize = 2;

#[rustfmt::skip]
pub const FIGHTER_JUMP: [[f32; FIGHTER_ROW]; 6] = [
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.0],
    [-0.7,  1.5,  0.7, -1.5,  0.4, -0.4, -2.0,  2.0, -1.0, 0.3],
    [ 0.0,  0.0,  0.0,  0.0, -1.2,  1.2,  0.0,  0.0,  3.0, 0.6],
    [ 0.0,  0.0,  0.0,  0.0, -1.2,  1.2,  0.0,  0.0,  0.0, 0.9],
    [-0.4,  1.0,  0.4, -1.0, -0.8,  0.8,  0.0,  0.0, -0.8, 1.2],
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 1.4],
];

#[rustfmt::skip]
pub const FIGHTER_WALK_LEFT: [[f32; FIGHTER_ROW]; 9] = [
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -5.0, 0.0],
    [ 0.5,  0.0, -0.7,  1.5,  0.4, -0.4, -0.4,  0.0, -5.0, 0.1],
    [ 0.5,  0.0, -1.5,  1.0,  0.7, -0.7, -0.6,  0.0, -5.0, 0.2],
    [ 0.8,  0.0, -1.0,  0.0,  1.0, -1.0,  0.0,  0.0, -5.0, 0.3],
    [ 0.5,  0.0, -0.5,  0.0,  1.2, -1.2,  0.0,  0.0, -5.0, 0.4],
    [-0.2,  1.5,  0.0,  0.0,  1.0, -1.0,  0.0, -0.4, -5.0, 0.5],
    [-0.7,  1.7,  0.0,  0.0,  0.7, -0.7,  0.0, -0.6, -5.0, 0.6],
    [ 0.0,  0.0,  0.0,  0.0,  0.4, -0.4,  0.0,  0.0,  0.0, 0.69],
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.7],
];

#[rustfmt::skip]
pub const FIGHTER_WALK_RIGHT: [[f32; FIGHTER_ROW]; 9] = [
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  5.0, 0.0],
    [ 0.7, -1.5, -0.5,  0.0,  0.4, -0.4,  0.0,  0.4,  5.0, 0.1],
    [ 1.5, -1.0, -0.5,  0.0,  0.7, -0.7,  0.0,  0.6,  5.0, 0.2],
    [ 1.0,  0.0, -0.8,  0.0,  1.0, -1.0,  0.0,  0.0,  5.0, 0.3],
    [ 0.5,  0.0, -0.5,  0.0,  1.2, -1.2,  0.0,  0.0,  5.0, 0.4],
    [ 0.0,  0.0,  0.2, -1.5,  1.0, -1.0,  0.4,  0.0,  5.0, 0.5],
    [ 0.0,  0.0,  0.7, -1.7,  0.7, -0.7,  0.6,  0.0,  5.0, 0.6],
    [ 0.0,  0.0,  0.0,  0.0,  0.4, -0.4,  0.0,  0.0,  0.0, 0.69],
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.7],
];

#[rustfmt::skip]
pub const FIGHTER_PUNCH_LEFT: [[f32; FIGHTER_ROW]; 11] = [
    [ 0.0,   0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.0],
    [-0.5,   0.5,  0.1,  0.2,  0.6, -0.2, -0.6,  0.0, -0.5, 0.04],
    [-0.5,   0.5,  0.1,  0.2,  0.8, -0.2, -0.8,  0.0, -0.5, 0.08],
    [-0.5,   0.5,  0.1,  0.2,  1.0, -0.2, -1.0,  0.0, -0.5, 0.12],
    [-0.65,  0.65, 0.2,  0.4,  1.2, -0.4, -1.4,  0.0, -0.8, 0.16],
    [-0.65,  0.65, 0.2,  0.4,  1.0, -0.4, -1.8,  0.0, -0.8, 0.2],
    [-0.65,  0.65, 0.3,  0.4,  0.6, -0.4, -1.4,  0.0, -0.8, 0.24],
    [-0.65,  0.65, 0.3,  0.4,  0.2, -0.4, -1.0,  0.0, -0.8, 0.28],
    [-0.5,   0.5,  0.2,  0.2, -0.3, -0.2, -0.5,  0.0, -0.5, 0.32],
    [-0.5,   0.5,  0.2,  0.2, -0.8, -0.2,  0.0,  0.0, -0.5, 0.36],
    [ 0.0,   0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.4],
];

#[rustfmt::skip]
pub const FIGHTER_PUNCH_RIGHT: [[f32; FIGHTER_ROW]; 11] = [
    [ 0.0,  0.0,  0.0,   0.0,  0.0,  0.0, 0.0, 0.0,  0.0, 0.0],
    [-0.1, -0.2,  0.5,  -0.5,  0.2, -0.6, 0.0, 0.6, -0.5, 0.04],
    [-0.1, -0.2,  0.5,  -0.5,  0.2, -0.8, 0.0, 0.8, -0.5, 0.08],
    [-0.1, -0.2,  0.5,  -0.5,  0.2, -1.0, 0.0, 1.0, -0.5, 0.12],
    [-0.2, -0.4,  0.65, -0.65, 0.4, -1.2, 0.0, 1.4, -0.8, 0.16],
    [-0.2, -0.4,  0.65, -0.65, 0.4, -1.0, 0.0, 1.8, -0.8, 0.2],
    [-0.3, -0.4,  0.65, -0.65, 0.4, -0.6, 0.0, 1.4, -0.8, 0.24],
    [-0.3, -0.4,  0.65, -0.65, 0.4, -0.2, 0.0, 1.0, -0.8, 0.28],
    [-0.2, -0.2,  0.5,  -0.5,  0.2,  0.3, 0.0, 0.5, -0.5, 0.32],
    [-0.2, -0.2,  0.5,  -0.5,  0.2,  0.8, 0.0, 0.0, -0.5, 0.36],
    [ 0.0,  0.0,  0.0,   0.0,  0.0,  0.0, 0.0, 0.0,  0.0, 0.4],
];

pub const FACE_JUMP: [[f32; FACE_ROW]; 6] = [
    [0.0, 0.0],
    [-1.0, 0.3],
    [3.0, 0.6],
    [0.0, 0.9],
    [-0.8, 1.2],
    [0.0, 1.4],
];

pub const FACE_WALK_LEFT: [[f32; FACE_ROW]; 9] = [
    [-5.0, 0.0],
    [-5.0, 0.1],
    [-5.0, 0.2],
    [-5.0, 0.3],
    [-5.0, 0.4],
    [-5.0, 0.5],
    [-5.0, 0.6],
    [0.0, 0.69],
    [0.0, 0.7],
];

pub const FACE_WALK_RIGHT: [[f32; FACE_ROW]; 9] = [
    [5.0, 0.0],
    [5.0, 0.1],
    [5.0, 0.2],
    [5.0, 0.3],
    [5.0, 0.4],
    [5.0, 0.5],
    [5.0, 0.6],
    [0.0, 0.69],
    [0.0, 0.7],
];

/// Both face punches share one vertical profile
pub const FACE_PUNCH: [[f32; FACE_ROW]; 11] = [
    [0.0, 0.0],
    [-0.5, 0.04],
    [-0.5, 0.08],
    [-0.5, 0.12],
    [-0.8, 0.16],
    [-0.8, 0.2],
    [-0.8, 0.24],
    [-0.8, 0.28],
    [-0.5, 0.32],
    [-0.5, 0.36],
    [0.0, 0.4],
];

/// How clip values move between authored keyframes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
}

impl Easing {
    pub fn toggled(self) -> Self {
        match self {
            Easing::Linear => Easing::EaseInOut,
            Easing::EaseInOut => Easing::Linear,
        }
    }
}

/// The five interpolators one actor animates with
///
/// Cloning a clip set only bumps reference counts; the tables are shared.
#[derive(Debug, Clone)]
pub struct ClipSet {
    jump: Arc<dyn Interpolator>,
    walk_left: Arc<dyn Interpolator>,
    walk_right: Arc<dyn Interpolator>,
    punch_left: Arc<dyn Interpolator>,
    punch_right: Arc<dyn Interpolator>,
}

impl ClipSet {
    /// Assemble a clip set from already-built interpolators
    pub fn new(
        jump: Arc<dyn Interpolator>,
        walk_left: Arc<dyn Interpolator>,
        walk_right: Arc<dyn Interpolator>,
        punch_left: Arc<dyn Interpolator>,
        punch_right: Arc<dyn Interpolator>,
    ) -> Self {
        Self {
            jump,
            walk_left,
            walk_right,
            punch_left,
            punch_right,
        }
    }

    /// Clips for the articulated stick figure
    pub fn fighter(easing: Easing) -> Result<Self, KeyframeError> {
        Ok(Self::new(
            clip(&FIGHTER_JUMP, easing)?,
            clip(&FIGHTER_WALK_LEFT, easing)?,
            clip(&FIGHTER_WALK_RIGHT, easing)?,
            clip(&FIGHTER_PUNCH_LEFT, easing)?,
            clip(&FIGHTER_PUNCH_RIGHT, easing)?,
        ))
    }

    /// Clips for the face overlay; both punches share one table
    pub fn face(easing: Easing) -> Result<Self, KeyframeError> {
        let punch = clip(&FACE_PUNCH, easing)?;
        Ok(Self::new(
            clip(&FACE_JUMP, easing)?,
            clip(&FACE_WALK_LEFT, easing)?,
            clip(&FACE_WALK_RIGHT, easing)?,
            punch.clone(),
            punch,
        ))
    }

    /// Interpolator driving `state`, `None` for `Idle`
    pub fn get(&self, state: PoseState) -> Option<&dyn Interpolator> {
        let clip = match state {
            PoseState::Idle => return None,
            PoseState::Jumping => &self.jump,
            PoseState::WalkingLeft => &self.walk_left,
            PoseState::WalkingRight => &self.walk_right,
            PoseState::PunchingLeft => &self.punch_left,
            PoseState::PunchingRight => &self.punch_right,
        };
        Some(clip.as_ref())
    }
}

fn clip<R: AsRef<[f32]>>(rows: &[R], easing: Easing) -> Result<Arc<dyn Interpolator>, KeyframeError> {
    let table = Arc::new(KeyframeTable::from_rows(rows)?);
    Ok(match easing {
        Easing::Linear => Arc::new(LinearInterpolator::new(table)),
        Easing::EaseInOut => Arc::new(EaseInOutInterpolator::new(table)),
    })
}
