// Fighter stats - both fighters share the same rig and health pool

/// Health every fighter starts a bout with
pub const INITIAL_HEALTH: i32 = 10;

/// Orientation that makes face sprites appear upright
pub const FACE_ANGLE: f32 = 3.2;

/// Segment lengths and joint sizes of the stick-figure rig (world units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigDimensions {
    pub head_diameter: f32,
    pub shoulder_width: f32,
    pub hip_width: f32,
    pub torso_length: f32,
    pub bicep_length: f32,
    pub forearm_length: f32,
    pub thigh_length: f32,
    pub shin_length: f32,
    pub joint_radius: f32,
}

/// The one rig used by every fighter
pub const STICK_FIGURE: RigDimensions = RigDimensions {
    head_diameter: 2.0,
    shoulder_width: 0.75,
    hip_width: 0.75,
    torso_length: 3.75,
    bicep_length: 0.75,
    forearm_length: 0.75,
    thigh_length: 1.25,
    shin_length: 1.25,
    joint_radius: 0.25,
};

impl Default for RigDimensions {
    fn default() -> Self {
        STICK_FIGURE
    }
}

impl RigDimensions {
    pub fn joint_diameter(&self) -> f32 {
        1.5 * self.joint_radius
    }

    pub fn hand_diameter(&self) -> f32 {
        2.0 * self.joint_diameter()
    }

    /// Top of the torso, below the head
    pub fn body_y(&self) -> f32 {
        -self.head_diameter / 2.0
    }

    /// Height of the shoulder line
    pub fn arm_y(&self) -> f32 {
        -self.head_diameter / 1.2
    }

    /// Height of the hip line
    pub fn hip_y(&self) -> f32 {
        -self.head_diameter / 2.0 - self.torso_length
    }

    /// Shoulder-to-elbow offset for the left arm (mirrored for the right)
    pub fn elbow_offset(&self) -> (f32, f32) {
        (-self.bicep_length - self.joint_radius, -self.bicep_length)
    }

    /// Hip-to-knee offset for the left leg (mirrored for the right)
    pub fn knee_offset(&self) -> (f32, f32) {
        (
            -self.thigh_length / 2.0 - self.joint_radius,
            -self.thigh_length - self.joint_radius,
        )
    }

    /// Gap between a joint and the next segment's root
    pub fn joint_gap(&self) -> f32 {
        -self.joint_radius
    }

    /// Left hand centre relative to the head in the rest pose
    pub fn left_hand_rest(&self) -> (f32, f32) {
        let (elbow_x, elbow_y) = self.elbow_offset();
        (
            -self.shoulder_width + elbow_x - self.forearm_length,
            self.arm_y() + elbow_y + self.joint_gap() - self.forearm_length,
        )
    }

    /// Right hand centre relative to the head in the rest pose
    pub fn right_hand_rest(&self) -> (f32, f32) {
        let (x, y) = self.left_hand_rest();
        (-x, y)
    }

    /// Half-width of the whole-body box
    pub fn body_half_width(&self) -> f32 {
        let (elbow_x, _) = self.elbow_offset();
        -elbow_x + self.bicep_length + self.joint_diameter() + self.hip_width
    }

    /// Distance from the head centre down to the lowest point of the legs
    pub fn body_depth(&self) -> f32 {
        self.head_diameter / 2.0
            + self.torso_length
            + self.thigh_length
            + self.shin_length
            + 2.0 * self.joint_diameter()
    }
}
