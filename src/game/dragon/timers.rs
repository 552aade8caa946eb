// Coyote-time and jump-buffer countdowns

/// Tracks the two countdown windows that make jumping feel responsive
///
/// `last_grounded` is topped up to the coyote window every grounded frame and
/// counts down in the air. `last_jump_pressed` is topped up to the buffer
/// window on every jump press and counts down each frame. A jump is allowed
/// while both are still positive. Comparisons are strictly `> 0.0`; the
/// values themselves may drift below zero and that is fine.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpTimers {
    last_grounded: f32,
    last_jump_pressed: f32,
}

impl JumpTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the countdowns by one frame
    pub fn tick(&mut self, grounded: bool, dt: f32, coyote_time: f32) {
        if grounded {
            self.last_grounded = coyote_time;
        } else {
            self.last_grounded -= dt;
        }

        if self.last_jump_pressed > 0.0 {
            self.last_jump_pressed -= dt;
        }
    }

    /// Record a jump press, opening the buffer window
    pub fn note_press(&mut self, jump_buffer: f32) {
        self.last_jump_pressed = jump_buffer;
    }

    /// Whether a (possibly buffered) jump may fire this frame
    pub fn can_jump(&self) -> bool {
        self.last_grounded > 0.0 && self.last_jump_pressed > 0.0
    }

    /// Close the buffer window after an immediate jump
    pub fn clear_press(&mut self) {
        self.last_jump_pressed = 0.0;
    }

    /// Close both windows after a buffered/coyote jump
    pub fn consume(&mut self) {
        self.last_grounded = 0.0;
        self.last_jump_pressed = 0.0;
    }

    /// Remaining coyote window in seconds
    pub fn coyote_remaining(&self) -> f32 {
        self.last_grounded
    }

    /// Remaining buffer window in seconds
    pub fn buffer_remaining(&self) -> f32 {
        self.last_jump_pressed
    }

    /// Reset both countdowns to their initial (expired) state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
