// Two-fighter bout: update every actor, then resolve punches

use glam::Vec2;

use crate::engine::render::{Canvas, RenderConfig};
use crate::engine::world::SimulationConfig;

use super::characters::{Actor, Body, ClipSet, Command, Easing, KeyframeError, PORTRAIT_ASPECT};

/// Where the two fighters start
pub const SPAWN_POSITIONS: [Vec2; 2] = [Vec2::new(-7.0, 0.0), Vec2::new(7.0, 0.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A punch that connected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub attacker: Player,
    pub defender: Player,
    /// Fist position that landed
    pub fist: Vec2,
    /// Defender's health after the hit
    pub health_left: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Winner(Player),
}

/// Two fighters, each with a face overlay
#[derive(Debug)]
pub struct Bout {
    fighters: [Actor; 2],
    faces: [Actor; 2],
    /// Whether the punch currently in flight has already been counted
    landed: [bool; 2],
    easing: Easing,
}

impl Bout {
    /// Fighters at their usual spawn points
    pub fn new() -> Result<Self, KeyframeError> {
        Self::with_positions(SPAWN_POSITIONS[0], SPAWN_POSITIONS[1])
    }

    pub fn with_positions(one: Vec2, two: Vec2) -> Result<Self, KeyframeError> {
        let easing = Easing::default();
        let fighter_clips = ClipSet::fighter(easing)?;
        let face_clips = ClipSet::face(easing)?;

        let fighters = [
            Actor::fighter("Player One", one, fighter_clips.clone()),
            Actor::fighter("Player Two", two, fighter_clips),
        ];
        let faces = [
            face_for(&fighters[0], face_clips.clone()),
            face_for(&fighters[1], face_clips),
        ];

        log::info!(
            "Bout ready: {} at {:?}, {} at {:?}",
            fighters[0].name,
            one,
            fighters[1].name,
            two
        );

        Ok(Self {
            fighters,
            faces,
            landed: [false; 2],
            easing,
        })
    }

    pub fn fighter(&self, player: Player) -> &Actor {
        &self.fighters[player.index()]
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Rebuild every actor's clips with `easing`
    pub fn set_easing(&mut self, easing: Easing) -> Result<(), KeyframeError> {
        let fighter_clips = ClipSet::fighter(easing)?;
        let face_clips = ClipSet::face(easing)?;
        for fighter in &mut self.fighters {
            fighter.set_clips(fighter_clips.clone());
        }
        for face in &mut self.faces {
            face.set_clips(face_clips.clone());
        }
        self.easing = easing;
        Ok(())
    }

    /// Forward a command to a fighter and its face
    ///
    /// Returns whether the fighter accepted it.
    pub fn command(&mut self, player: Player, command: Command) -> bool {
        let i = player.index();
        let accepted = self.fighters[i].request(command);
        self.faces[i].request(command);

        if accepted && command.target_state().is_punching() {
            self.landed[i] = false;
        }
        accepted
    }

    /// Advance the bout by `dt` seconds and return the hits that landed
    pub fn tick(&mut self, dt: f32, config: &SimulationConfig) -> Vec<HitEvent> {
        for actor in self.fighters.iter_mut().chain(self.faces.iter_mut()) {
            actor.update(dt, config);
        }

        let mut hits = Vec::new();
        for attacker in Player::ALL {
            if let Some(hit) = self.resolve_punch(attacker) {
                hits.push(hit);
            }
        }
        hits
    }

    fn resolve_punch(&mut self, attacker: Player) -> Option<HitEvent> {
        let a = attacker.index();
        if self.landed[a] {
            return None;
        }

        let fist = self.fighters[a].active_fist()?;
        let defender = attacker.opponent();
        let target = &mut self.fighters[defender.index()];
        if !target.is_inside(fist) {
            return None;
        }

        self.landed[a] = true;
        Some(HitEvent {
            attacker,
            defender,
            fist,
            health_left: target.take_hit(),
        })
    }

    pub fn outcome(&self) -> Outcome {
        if self.fighters[Player::Two.index()].is_knocked_out() {
            Outcome::Winner(Player::One)
        } else if self.fighters[Player::One.index()].is_knocked_out() {
            Outcome::Winner(Player::Two)
        } else {
            Outcome::InProgress
        }
    }

    /// Draw fighters first so faces sit on top
    pub fn draw(&self, canvas: &mut dyn Canvas, render: &RenderConfig, sim: &SimulationConfig) {
        for actor in self.fighters.iter().chain(self.faces.iter()) {
            actor.draw(canvas, render, sim);
        }
    }
}

fn face_for(fighter: &Actor, clips: ClipSet) -> Actor {
    let head_diameter = match fighter.body() {
        Body::Fighter(skeleton) => skeleton.dims().head_diameter,
        Body::Face(face) => face.width(),
    };
    Actor::face(
        &format!("{} face", fighter.name),
        fighter.position(),
        head_diameter,
        PORTRAIT_ASPECT,
        clips,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::render::TraceCanvas;
    use crate::game::characters::state::PoseState;
    use crate::game::characters::stats::{INITIAL_HEALTH, STICK_FIGURE};
    use approx::assert_abs_diff_eq;

    const DT: f32 = 0.02;

    fn run(bout: &mut Bout, seconds: f32) -> Vec<HitEvent> {
        let config = SimulationConfig::default();
        let steps = (seconds / DT).round() as usize;
        let mut hits = Vec::new();
        for _ in 0..steps {
            hits.extend(bout.tick(DT, &config));
        }
        hits
    }

    fn overlapping() -> Bout {
        Bout::with_positions(Vec2::ZERO, Vec2::ZERO).unwrap()
    }

    #[test]
    fn test_new_bout() {
        let bout = Bout::new().unwrap();
        assert_eq!(bout.fighter(Player::One).position(), Vec2::new(-7.0, 0.0));
        assert_eq!(bout.fighter(Player::Two).position(), Vec2::new(7.0, 0.0));
        assert_eq!(bout.faces[1].position(), Vec2::new(7.0, 0.0));
        assert_eq!(bout.fighter(Player::One).health, INITIAL_HEALTH);
        assert_eq!(bout.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_punch_out_of_reach_misses() {
        let mut bout = Bout::new().unwrap();
        assert!(bout.command(Player::One, Command::PunchRight));
        let hits = run(&mut bout, 0.5);
        assert!(hits.is_empty());
        assert_eq!(bout.fighter(Player::Two).health, INITIAL_HEALTH);
    }

    #[test]
    fn test_punch_lands_exactly_once() {
        let mut bout = overlapping();
        assert!(bout.command(Player::One, Command::PunchLeft));
        assert_eq!(bout.fighter(Player::One).state(), PoseState::PunchingLeft);

        let hits = run(&mut bout, 0.5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].attacker, Player::One);
        assert_eq!(hits[0].defender, Player::Two);
        assert_eq!(hits[0].health_left, INITIAL_HEALTH - 1);
        assert_eq!(bout.fighter(Player::Two).health, INITIAL_HEALTH - 1);
        assert_eq!(bout.fighter(Player::One).state(), PoseState::Idle);
    }

    #[test]
    fn test_left_punch_lands_on_the_head() {
        let config = SimulationConfig::default();

        // Where the left fist is one tick into the punch, with nobody in reach
        let mut solo = Bout::new().unwrap();
        solo.command(Player::One, Command::PunchLeft);
        assert!(solo.tick(DT, &config).is_empty());
        let fist = solo.fighters[0].active_fist().unwrap();

        // Put the opponent's head right there
        let mut bout = Bout::with_positions(SPAWN_POSITIONS[0], fist).unwrap();
        let head = bout.fighters[1].position();
        let head_radius = (STICK_FIGURE.head_diameter + STICK_FIGURE.hand_diameter()) / 2.0;
        assert!(bout.command(Player::One, Command::PunchLeft));

        let first = bout.tick(DT, &config);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].defender, Player::Two);
        assert!(first[0].fist.distance(head) < head_radius);
        assert_abs_diff_eq!(first[0].fist.x, fist.x, epsilon = 1e-5);
        assert_abs_diff_eq!(first[0].fist.y, fist.y, epsilon = 1e-5);

        let rest = run(&mut bout, 0.5);
        assert!(rest.is_empty());
        assert_eq!(bout.fighter(Player::One).state(), PoseState::Idle);
        assert_eq!(bout.fighter(Player::Two).health, INITIAL_HEALTH - 1);
    }

    #[test]
    fn test_set_easing_swaps_clips_for_everyone() {
        let mut bout = Bout::new().unwrap();
        assert_eq!(bout.easing(), Easing::Linear);
        bout.set_easing(Easing::EaseInOut).unwrap();
        assert_eq!(bout.easing(), Easing::EaseInOut);

        // A jump still ends on its authored rest height
        bout.command(Player::One, Command::Jump);
        run(&mut bout, 1.5);
        assert_eq!(bout.fighter(Player::One).state(), PoseState::Idle);
        assert_abs_diff_eq!(bout.fighter(Player::One).position().y, 0.0, epsilon = 1e-5);
        assert_eq!(bout.faces[0].state(), PoseState::Idle);
    }

    #[test]
    fn test_each_punch_counts_separately() {
        let mut bout = overlapping();
        bout.command(Player::One, Command::PunchLeft);
        run(&mut bout, 0.5);
        bout.command(Player::One, Command::PunchLeft);
        run(&mut bout, 0.5);
        assert_eq!(bout.fighter(Player::Two).health, INITIAL_HEALTH - 2);
    }

    #[test]
    fn test_ignored_punch_does_not_rearm() {
        let mut bout = overlapping();
        bout.command(Player::One, Command::PunchLeft);
        let first = run(&mut bout, 0.1);
        assert_eq!(first.len(), 1);
        assert!(!bout.command(Player::One, Command::PunchLeft));
        let rest = run(&mut bout, 0.4);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_walking_into_opponent_is_not_a_hit() {
        let mut bout = overlapping();
        bout.command(Player::One, Command::MoveRight);
        let hits = run(&mut bout, 0.8);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_knockout_decides_the_bout() {
        let mut bout = overlapping();
        bout.fighters[0].health = 1;
        bout.command(Player::Two, Command::PunchLeft);
        let hits = run(&mut bout, 0.5);
        assert_eq!(hits.len(), 1);
        assert_eq!(bout.fighter(Player::One).health, 0);
        assert_eq!(bout.outcome(), Outcome::Winner(Player::Two));

        // Health never goes negative
        bout.command(Player::Two, Command::PunchLeft);
        run(&mut bout, 0.5);
        assert_eq!(bout.fighter(Player::One).health, 0);
    }

    #[test]
    fn test_commands_reach_the_face() {
        let mut bout = Bout::new().unwrap();
        bout.command(Player::Two, Command::Jump);
        bout.tick(0.1, &SimulationConfig::default());
        assert_eq!(bout.faces[1].state(), PoseState::Jumping);
        assert_eq!(
            bout.faces[1].position().y,
            bout.fighter(Player::Two).position().y
        );
    }

    #[test]
    fn test_draw_every_actor() {
        let bout = Bout::new().unwrap();
        let mut canvas = TraceCanvas::new();
        bout.draw(
            &mut canvas,
            &RenderConfig::default(),
            &SimulationConfig::default(),
        );
        // Two stick figures plus two face ellipses
        assert_eq!(canvas.calls(), 2 * 18 + 2);
    }
}
