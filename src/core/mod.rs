// Core utilities shared by engine and game code

pub mod bounds;
pub mod math;

pub use bounds::{BoundingBox, BoxFrame};
