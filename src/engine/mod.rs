// Engine modules: frame timing, input, world bounds, rendering seam

pub mod game_loop;
pub mod input;
pub mod render;
pub mod world;
