// Input collection - buffers asynchronous events into per-frame snapshots

use super::action::{Button, InputEvent};
use super::snapshot::InputSnapshot;
use glam::Vec2;
use std::collections::HashSet;

/// Buffers asynchronous input events and drains them into snapshots
///
/// Host event callbacks may fire at any point relative to frame boundaries.
/// The collector accumulates them; [`InputCollector::snapshot`] is called
/// exactly once per frame, before any game logic runs, and yields the stable
/// view of input for that frame. Press events are never lost: a press and
/// release arriving between two snapshots still reports `*_pressed` once.
#[derive(Debug, Default)]
pub struct InputCollector {
    /// Latest move axis value, clamped on arrival
    move_axis: Vec2,

    /// Buttons currently held down
    held: HashSet<Button>,

    /// Buttons pressed since the last snapshot
    pressed_since_snapshot: HashSet<Button>,
}

impl InputCollector {
    /// Create a new collector with neutral state
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw input event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(button) => self.press(button),
            InputEvent::Released(button) => self.release(button),
            InputEvent::MoveAxis(axis) => self.set_move_axis(axis),
        }
    }

    /// Register a button press
    pub fn press(&mut self, button: Button) {
        if self.held.insert(button) {
            self.pressed_since_snapshot.insert(button);
        }
    }

    /// Register a button release
    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    /// Set the 2D move axis, componentwise clamped to [-1, 1]
    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.move_axis = axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    /// Check if a button is currently held
    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    /// Build the snapshot for this frame, consuming one-shot presses
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snap = InputSnapshot {
            move_input: self.move_axis,
            jump_pressed: self.pressed_since_snapshot.contains(&Button::Jump),
            jump_held: self.held.contains(&Button::Jump),
            run_held: self.held.contains(&Button::Run),
            kick_pressed: self.pressed_since_snapshot.contains(&Button::Kick),
            attack_pressed: self.pressed_since_snapshot.contains(&Button::Attack),
        };
        self.pressed_since_snapshot.clear();
        snap
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.move_axis = Vec2::ZERO;
        self.held.clear();
        self.pressed_since_snapshot.clear();
    }
}
