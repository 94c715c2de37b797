// Game logic: actors and the bout that pits two fighters against each other

pub mod bout;
pub mod characters;

pub use bout::{Bout, HitEvent, Outcome, Player};
