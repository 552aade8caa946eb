//! A 2D platformer character controller for a flying dragon.
//!
//! The controller is a deterministic per-frame decision process: grounding
//! detection feeds coyote-time and jump-buffer timers, a double-tap gesture
//! enters flight, and a gravity-scale mode (normal/fly/glide) plus a small
//! horizontal speed controller drive the physics body. Engine collaborators
//! are injected: physics through the [`engine::physics::PhysicsBody`] and
//! [`engine::physics::GroundSensor`] traits, input as immutable per-frame
//! snapshots, animation as a typed parameter frame, and time explicitly as
//! `now`/`dt`.
//!
//! A rapier2d backend (physics world, body presets, character adapter) and a
//! fixed-timestep frame clock are included; see `src/main.rs` for a headless
//! demo wiring everything together.

pub mod core;
pub mod engine;
pub mod game;

pub use engine::frame::{FrameClock, FrameTime, FIXED_TIMESTEP};
pub use engine::input::{Button, InputCollector, InputEvent, InputSnapshot};
pub use engine::physics::{
    CharacterPhysics, GroundProbe, GroundSensor, NullGroundSensor, PhysicsBody, PhysicsWorld,
};
pub use game::dragon::{
    AnimationSink, AnimatorFrame, ConfigError, DragonConfig, DragonController, GravityMode,
    MoveMode, NullSink, Triggers,
};
