// Dragon controller - per-frame orchestration of the movement systems

use super::animator::{AnimationSink, AnimatorFrame, Triggers};
use super::config::DragonConfig;
use super::flight::JumpFlightMachine;
use super::locomotion::{self, ModeFlags};
use super::state::MoveMode;
use crate::engine::frame::FrameTime;
use crate::engine::input::InputSnapshot;
use crate::engine::physics::{GroundSensor, PhysicsBody};

/// The dragon's character controller
///
/// Owns the jump/flight state machine and composes it with the mode
/// classifier, the speed controller and the animator projection. All engine
/// collaborators are injected: physics access and grounding come in through
/// traits, input as an immutable snapshot, and time explicitly, so a full
/// session can be replayed deterministically in tests.
#[derive(Debug)]
pub struct DragonController {
    config: DragonConfig,
    machine: JumpFlightMachine,
    facing_left: bool,
    last_frame: AnimatorFrame,
}

impl DragonController {
    /// Create a controller with the given tuning
    pub fn new(config: DragonConfig) -> Self {
        Self {
            config,
            machine: JumpFlightMachine::new(),
            facing_left: false,
            last_frame: AnimatorFrame::default(),
        }
    }

    /// The active tuning values
    pub fn config(&self) -> &DragonConfig {
        &self.config
    }

    /// The current discrete movement mode
    pub fn mode(&self) -> MoveMode {
        self.machine.mode()
    }

    /// Whether flight is active (gliding included)
    pub fn is_flying(&self) -> bool {
        self.machine.is_flying()
    }

    /// Whether the sprite currently faces left
    pub fn facing_left(&self) -> bool {
        self.facing_left
    }

    /// The animator frame produced by the last update
    pub fn animator_frame(&self) -> &AnimatorFrame {
        &self.last_frame
    }

    /// Return timers, flight state and facing to their initial values
    ///
    /// For level restarts and respawns; the physics body is not touched.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.facing_left = false;
        self.last_frame = AnimatorFrame::default();
    }

    /// Run one fixed update step
    ///
    /// Order within the frame: grounding query, mode classification, jump and
    /// flight transitions, horizontal speed control, animator projection. The
    /// caller steps the physics world afterwards.
    pub fn update<E, A>(
        &mut self,
        time: FrameTime,
        input: &InputSnapshot,
        physics: &mut E,
        sink: &mut A,
    ) -> AnimatorFrame
    where
        E: PhysicsBody + GroundSensor + ?Sized,
        A: AnimationSink + ?Sized,
    {
        let grounded = physics.is_grounded();
        let flags = ModeFlags::classify(input, grounded);

        let jumped = self.machine.update(
            &self.config,
            time,
            grounded,
            input,
            flags.blocks_jump(),
            physics,
        );

        locomotion::apply(&self.config, input, &flags, grounded, time.dt, physics);

        if input.has_horizontal() {
            self.facing_left = input.move_input.x < 0.0;
        }

        let velocity = physics.velocity();
        let frame = AnimatorFrame {
            grounded,
            moving: flags.moving,
            running: flags.running,
            crawling: flags.crawling,
            hiding: flags.hiding,
            flying: self.machine.is_flying(),
            horizontal_speed: velocity.x.abs(),
            vertical_speed: velocity.y,
            flip_horizontal: self.facing_left,
            triggers: Triggers {
                jump: jumped,
                kick: input.kick_pressed,
                attack: input.attack_pressed,
            },
        };

        sink.apply(&frame);
        self.last_frame = frame;
        frame
    }
}
