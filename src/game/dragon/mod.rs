// Dragon character controller
//
// This module contains everything specific to the dragon's movement:
// - Tuning configuration
// - Coyote/jump-buffer timers
// - Jump and flight state machine
// - Mode classification and horizontal speed control
// - Typed animator parameter projection
// - The controller composing all of the above

pub mod animator;
pub mod config;
pub mod controller;
pub mod flight;
pub mod locomotion;
pub mod state;
pub mod timers;

// Re-export commonly used types
pub use animator::{AnimationSink, AnimatorFrame, NullSink, Triggers};
pub use config::{ConfigError, DragonConfig, BASE_CONFIG};
pub use controller::DragonController;
pub use flight::JumpFlightMachine;
pub use locomotion::ModeFlags;
pub use state::{GravityMode, MoveMode};
pub use timers::JumpTimers;

#[cfg(test)]
pub(crate) mod testkit {
    use crate::engine::physics::{GroundSensor, PhysicsBody};
    use glam::Vec2;

    /// In-memory physics double: velocity and gravity scale only, no
    /// integration, grounding set directly by the test
    #[derive(Debug)]
    pub struct FakeBody {
        pub velocity: Vec2,
        pub gravity_scale: f32,
        pub grounded: bool,
    }

    impl Default for FakeBody {
        fn default() -> Self {
            Self {
                velocity: Vec2::ZERO,
                gravity_scale: 1.0,
                grounded: false,
            }
        }
    }

    impl PhysicsBody for FakeBody {
        fn velocity(&self) -> Vec2 {
            self.velocity
        }

        fn set_velocity(&mut self, velocity: Vec2) {
            self.velocity = velocity;
        }

        fn gravity_scale(&self) -> f32 {
            self.gravity_scale
        }

        fn set_gravity_scale(&mut self, scale: f32) {
            self.gravity_scale = scale;
        }
    }

    impl GroundSensor for FakeBody {
        fn is_grounded(&self) -> bool {
            self.grounded
        }
    }
}
