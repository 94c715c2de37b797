// Actor system
//
// Keyframe clips and their interpolators, the per-actor pose state machine,
// the two body rigs with their hit tests, and the actor that drives them.

pub mod actor;
pub mod animation;
pub mod clips;
pub mod collision;
pub mod face;
pub mod rig;
pub mod skeleton;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use actor::{Actor, Body};
pub use animation::KeyframeError;
pub use clips::{ClipSet, Easing};
pub use face::PORTRAIT_ASPECT;
pub use state::Command;
