// Jump and flight state machine

use super::config::DragonConfig;
use super::state::{GravityMode, MoveMode};
use super::timers::JumpTimers;
use crate::engine::frame::FrameTime;
use crate::engine::input::InputSnapshot;
use crate::engine::physics::PhysicsBody;

/// State machine for jumping, double-tap flight entry and gliding
///
/// Runs once per fixed step, before the speed controller. It owns the coyote
/// and buffer timers, the single-tap memory for the double-tap gesture, and
/// the flight/glide flags, and it writes vertical velocity and gravity scale
/// to the physics body.
#[derive(Debug)]
pub struct JumpFlightMachine {
    timers: JumpTimers,

    /// Timestamp of the most recent tap candidate (single-tap memory, no queue)
    last_tap: f32,

    flying: bool,
    gliding: bool,

    /// Grounding result of the current frame
    grounded: bool,
}

impl Default for JumpFlightMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpFlightMachine {
    pub fn new() -> Self {
        Self {
            timers: JumpTimers::new(),
            last_tap: f32::NEG_INFINITY,
            flying: false,
            gliding: false,
            grounded: false,
        }
    }

    /// Whether flight is active (gliding included)
    pub fn is_flying(&self) -> bool {
        self.flying
    }

    /// Whether the glide submode is active
    pub fn is_gliding(&self) -> bool {
        self.gliding
    }

    /// Grounding result of the last update
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// The current discrete movement mode
    pub fn mode(&self) -> MoveMode {
        if self.flying {
            if self.gliding {
                MoveMode::Gliding
            } else {
                MoveMode::Flying
            }
        } else if self.grounded {
            MoveMode::Grounded
        } else {
            MoveMode::Airborne
        }
    }

    /// The gravity mode implied by the current state
    pub fn gravity_mode(&self) -> GravityMode {
        if self.flying {
            if self.gliding {
                GravityMode::Glide
            } else {
                GravityMode::Fly
            }
        } else {
            GravityMode::Normal
        }
    }

    /// Read-only view of the jump timers
    pub fn timers(&self) -> &JumpTimers {
        &self.timers
    }

    /// Return to the initial state (for level restarts)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Run one fixed step; returns true if a jump executed this frame
    ///
    /// `blocks_jump` is the crawl/hide gate from the mode classifier.
    pub fn update(
        &mut self,
        config: &DragonConfig,
        time: FrameTime,
        grounded: bool,
        input: &InputSnapshot,
        blocks_jump: bool,
        body: &mut (impl PhysicsBody + ?Sized),
    ) -> bool {
        let previous_mode = self.mode();
        self.grounded = grounded;
        self.timers.tick(grounded, time.dt, config.coyote_time);

        if input.jump_pressed {
            self.timers.note_press(config.jump_buffer);
        }

        // A grounding event ends flight immediately
        if self.flying && grounded {
            self.flying = false;
            self.gliding = false;
        }

        let mut jumped = false;

        if input.jump_pressed {
            if grounded && !blocks_jump {
                // Grounded jump wins over flight entry
                self.execute_jump(config, body);
                self.last_tap = time.now;
                jumped = true;
            } else if !grounded && !self.flying {
                if time.now - self.last_tap <= config.double_tap_time {
                    self.enter_flight(config, body);
                } else {
                    self.last_tap = time.now;
                }
            }
        }

        // Buffered/coyote jump, suppressed while flying, hiding or crawling
        if !jumped && !self.flying && !blocks_jump && self.timers.can_jump() {
            self.execute_jump(config, body);
            self.timers.consume();
            self.last_tap = time.now;
            jumped = true;
        }

        // Jump cut, re-applied every frame the button stays released
        if !input.jump_held {
            let mut velocity = body.velocity();
            if velocity.y > 0.0 {
                velocity.y *= config.jump_cut_multiplier;
                body.set_velocity(velocity);
            }
        }

        if self.flying {
            self.gliding = input.jump_held;
            if self.gliding {
                let mut velocity = body.velocity();
                if velocity.y < config.max_glide_fall_speed {
                    velocity.y = config.max_glide_fall_speed;
                    body.set_velocity(velocity);
                }
            }
        }

        body.set_gravity_scale(self.gravity_mode().scale(config));

        let mode = self.mode();
        if mode != previous_mode {
            log::debug!("move mode {:?} -> {:?}", previous_mode, mode);
        }

        jumped
    }

    /// Immediate jump: vertical velocity overridden with the jump force
    fn execute_jump(&mut self, config: &DragonConfig, body: &mut (impl PhysicsBody + ?Sized)) {
        let mut velocity = body.velocity();
        velocity.y = config.jump_force;
        body.set_velocity(velocity);
        self.timers.clear_press();
    }

    /// Enter flight with an upward impulse, keeping faster upward motion
    fn enter_flight(&mut self, config: &DragonConfig, body: &mut (impl PhysicsBody + ?Sized)) {
        let mut velocity = body.velocity();
        velocity.y = velocity.y.max(config.fly_impulse);
        body.set_velocity(velocity);
        self.flying = true;
    }
}
