// Locomotion mode classification and horizontal speed control

use super::config::DragonConfig;
use crate::core::math::{deadzone, move_toward};
use crate::engine::input::InputSnapshot;
use crate::engine::physics::PhysicsBody;

/// Per-frame locomotion modes derived from raw input and grounding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    /// Horizontal input outside the deadzone
    pub moving: bool,
    /// Run held while grounded and moving
    pub running: bool,
    /// Down held together with horizontal input
    pub crawling: bool,
    /// Down held with no horizontal input
    pub hiding: bool,
}

impl ModeFlags {
    /// Derive the modes for this frame
    pub fn classify(input: &InputSnapshot, grounded: bool) -> Self {
        let moving = input.has_horizontal();
        let down = input.down_held();
        Self {
            moving,
            running: input.run_held && grounded && moving,
            crawling: down && moving,
            hiding: down && !moving,
        }
    }

    /// Crawling and hiding both suppress jump execution
    pub fn blocks_jump(&self) -> bool {
        self.crawling || self.hiding
    }
}

/// The maximum horizontal speed for the current mode combination
///
/// Running while crawling downgrades to walk speed, not run speed.
fn max_speed(config: &DragonConfig, flags: &ModeFlags) -> f32 {
    if flags.crawling {
        if flags.running {
            config.walk_speed
        } else {
            config.crawl_speed
        }
    } else if flags.running {
        config.run_speed
    } else {
        config.walk_speed
    }
}

/// Run one fixed step of the horizontal speed controller
///
/// Approaches the target speed at a mode-dependent rate instead of assigning
/// it directly; vertical velocity is never touched here.
pub fn apply(
    config: &DragonConfig,
    input: &InputSnapshot,
    flags: &ModeFlags,
    grounded: bool,
    dt: f32,
    body: &mut (impl PhysicsBody + ?Sized),
) {
    // Snapped to exactly zero inside the deadzone to avoid residual drift
    let target = deadzone(input.move_input.x) * max_speed(config, flags);

    let rate = if grounded {
        if target != 0.0 {
            config.acceleration
        } else {
            config.deceleration
        }
    } else {
        config.acceleration * config.air_control
    };

    let mut velocity = body.velocity();
    velocity.x = move_toward(velocity.x, target, rate * dt);
    body.set_velocity(velocity);
}
