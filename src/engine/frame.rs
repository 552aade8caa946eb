/// Frame timing and control system
///
/// Implements a fixed timestep update loop with variable-rate presentation.
/// Input is sampled once per rendered frame, then zero or more fixed steps
/// run against that snapshot before the frame is presented.
use std::time::{Duration, Instant};

/// Target update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of fixed steps per frame to prevent spiral of death
const MAX_STEPS: u32 = 5;

/// Explicit time handed to every update call
///
/// `now` is accumulated simulated time, advanced by exactly `dt` per step.
/// Nothing in the control logic reads a global clock, so a scripted sequence
/// of `FrameTime`s replays deterministically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Simulated seconds since the clock started
    pub now: f32,
    /// Fixed step duration in seconds
    pub dt: f32,
}

impl FrameTime {
    /// Create a frame time for tests and scripted replays
    pub fn new(now: f32, dt: f32) -> Self {
        Self { now, dt }
    }
}

/// Fixed-timestep clock driving the controller update
pub struct FrameClock {
    /// Accumulated wall time not yet consumed by fixed steps
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Accumulated simulated time, advanced per step
    sim_time: f64,

    /// Whether the clock is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total fixed steps executed
    step_count: u64,

    /// Delta time of the last rendered frame (for presentation)
    render_delta_time: f32,
}

impl FrameClock {
    /// Create a new frame clock
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            sim_time: 0.0,
            paused: false,
            frame_count: 0,
            step_count: 0,
            render_delta_time: 0.0,
        }
    }

    /// Begin a new frame, returns the number of fixed steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;
        self.render_delta_time = frame_time.as_secs_f32();

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        steps
    }

    /// Take the time for the next fixed step, advancing simulated time
    pub fn step_time(&mut self) -> FrameTime {
        let time = FrameTime {
            now: self.sim_time as f32,
            dt: FIXED_TIMESTEP,
        };
        self.sim_time += FIXED_TIMESTEP as f64;
        self.step_count += 1;
        time
    }

    /// Get the fixed timestep duration (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get the delta time of the last rendered frame (in seconds)
    pub fn render_delta_time(&self) -> f32 {
        self.render_delta_time
    }

    /// Get the interpolation alpha between the last two fixed steps
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / FIXED_TIMESTEP
    }

    /// Get total simulated seconds
    pub fn sim_time(&self) -> f32 {
        self.sim_time as f32
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of fixed steps executed
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Check if the clock is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the clock
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Frame clock paused");
        }
    }

    /// Resume the clock
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a step burst
            self.accumulator = Duration::ZERO;
            log::info!("Frame clock resumed");
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
