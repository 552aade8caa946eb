// Game-side modules

pub mod dragon;
