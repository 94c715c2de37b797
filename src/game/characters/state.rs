// Pose state machine

use crate::engine::input::Action;

use super::clips::ClipSet;

/// Which clip (if any) an actor is currently playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoseState {
    /// Standing still, ready to accept a command
    #[default]
    Idle,
    Jumping,
    WalkingLeft,
    WalkingRight,
    PunchingLeft,
    PunchingRight,
}

impl PoseState {
    /// Check if the actor is throwing a punch
    pub fn is_punching(&self) -> bool {
        matches!(self, Self::PunchingLeft | Self::PunchingRight)
    }

    /// Get the clip name for this state
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Jumping => "jump",
            Self::WalkingLeft => "walk_left",
            Self::WalkingRight => "walk_right",
            Self::PunchingLeft => "punch_left",
            Self::PunchingRight => "punch_right",
        }
    }
}

/// The five commands an actor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Jump,
    PunchLeft,
    PunchRight,
}

impl Command {
    /// The state this command asks for
    pub fn target_state(&self) -> PoseState {
        match self {
            Self::MoveLeft => PoseState::WalkingLeft,
            Self::MoveRight => PoseState::WalkingRight,
            Self::Jump => PoseState::Jumping,
            Self::PunchLeft => PoseState::PunchingLeft,
            Self::PunchRight => PoseState::PunchingRight,
        }
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        match action {
            Action::MoveLeft => Self::MoveLeft,
            Action::MoveRight => Self::MoveRight,
            Action::Jump => Self::Jump,
            Action::PunchLeft => Self::PunchLeft,
            Action::PunchRight => Self::PunchRight,
        }
    }
}

/// Result of advancing the machine by one tick
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSample {
    /// State whose clip produced `values`
    pub state: PoseState,
    /// Interpolated state vector at the new elapsed time
    pub values: Vec<f32>,
}

/// Per-actor state machine
///
/// Requests are only honoured from `Idle`; an animation in flight cannot be
/// interrupted and leaves only by reaching its final keyframe.
#[derive(Debug, Clone, Default)]
pub struct PoseStateMachine {
    current_state: PoseState,
    elapsed: f32,
}

impl PoseStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: PoseState::Idle,
            elapsed: 0.0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> PoseState {
        self.current_state
    }

    /// Ask for the state matching `command`
    ///
    /// Returns `true` when the request was accepted. Anything other than
    /// `Idle` silently ignores it.
    pub fn request(&mut self, command: Command) -> bool {
        if self.current_state != PoseState::Idle {
            log::trace!(
                "Ignoring {:?} while {}",
                command,
                self.current_state.clip_name()
            );
            return false;
        }

        self.current_state = command.target_state();
        self.elapsed = 0.0;
        log::debug!("Pose transition idle -> {}", self.current_state.clip_name());
        true
    }

    /// Advance by `dt` seconds and sample the active clip
    ///
    /// When the clip reports finished the machine drops back to `Idle` on the
    /// same call; the returned sample still carries the last evaluated values.
    pub fn update(&mut self, dt: f32, clips: &ClipSet) -> Option<PoseSample> {
        self.elapsed += dt;

        let state = self.current_state;
        let clip = clips.get(state)?;
        let values = clip.evaluate(self.elapsed);

        if clip.is_finished(self.elapsed) {
            log::debug!(
                "Clip {} finished after {:.3}s",
                state.clip_name(),
                self.elapsed
            );
            self.current_state = PoseState::Idle;
        }

        Some(PoseSample { state, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::clips::Easing;

    const COMMANDS: [Command; 5] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::Jump,
        Command::PunchLeft,
        Command::PunchRight,
    ];

    fn clips() -> ClipSet {
        ClipSet::fighter(Easing::Linear).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let sm = PoseStateMachine::new();
        assert_eq!(sm.state(), PoseState::Idle);
        assert_eq!(sm.elapsed, 0.0);
    }

    #[test]
    fn test_request_from_idle() {
        let mut sm = PoseStateMachine::new();
        assert!(sm.request(Command::Jump));
        assert_eq!(sm.state(), PoseState::Jumping);
        assert_eq!(sm.elapsed, 0.0);
    }

    #[test]
    fn test_every_command_maps_to_its_state() {
        for command in COMMANDS {
            let mut sm = PoseStateMachine::new();
            sm.request(command);
            assert_eq!(sm.state(), command.target_state());
        }
    }

    #[test]
    fn test_request_ignored_while_animating() {
        let clips = clips();
        let mut sm = PoseStateMachine::new();
        sm.request(Command::PunchRight);
        sm.update(0.1, &clips);

        let before = (sm.state(), sm.elapsed);
        for command in COMMANDS {
            assert!(!sm.request(command));
            assert_eq!((sm.state(), sm.elapsed), before);
        }
    }

    #[test]
    fn test_idle_update_only_accumulates_time() {
        let clips = clips();
        let mut sm = PoseStateMachine::new();
        assert!(sm.update(0.5, &clips).is_none());
        assert_eq!(sm.state(), PoseState::Idle);
        assert_eq!(sm.elapsed, 0.5);

        // A later request resets the clock
        sm.request(Command::MoveLeft);
        assert_eq!(sm.elapsed, 0.0);
    }

    #[test]
    fn test_returns_to_idle_on_the_finishing_call() {
        let clips = clips();
        let mut sm = PoseStateMachine::new();
        sm.request(Command::Jump);

        let sample = sm.update(2.0, &clips).unwrap();
        assert_eq!(sample.state, PoseState::Jumping);
        assert_eq!(sm.state(), PoseState::Idle);
        // Last frame of the jump is the rest pose
        assert!(sample.values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_punch_left_round_trip() {
        let clips = clips();
        let mut sm = PoseStateMachine::new();
        sm.request(Command::PunchLeft);

        let mut ticks = 0;
        while sm.state() == PoseState::PunchingLeft {
            sm.update(0.05, &clips);
            ticks += 1;
            assert!(ticks < 100, "punch never finished");
        }
        // 0.4s clip at 0.05s per tick; float accumulation may need one extra tick
        assert!(ticks == 8 || ticks == 9);
        assert!(sm.elapsed >= 0.4 - 1e-6);
        assert!(sm.request(Command::PunchLeft));
    }

    #[test]
    fn test_command_from_input_action() {
        assert_eq!(Command::from(Action::PunchRight), Command::PunchRight);
        assert_eq!(
            Command::from(Action::MoveLeft).target_state(),
            PoseState::WalkingLeft
        );
    }

    #[test]
    fn test_state_helpers() {
        assert!(PoseState::PunchingLeft.is_punching());
        assert!(PoseState::PunchingRight.is_punching());
        assert!(!PoseState::Jumping.is_punching());
        assert_eq!(PoseState::Idle.clip_name(), "idle");
        assert_eq!(PoseState::default(), PoseState::Idle);
    }
}
