// Engine modules: frame timing, input, physics

pub mod frame;
pub mod input;
pub mod physics;
