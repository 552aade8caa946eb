// Per-frame immutable input snapshot

use crate::core::math::AXIS_DEADZONE;
use glam::Vec2;

/// Stable per-frame view of player input
///
/// Built once per frame by the collector and read-only for the rest of the
/// frame. `*_pressed` fields are one-shot: they report presses that arrived
/// since the previous snapshot and are consumed when the snapshot is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// 2D move axis, componentwise clamped to [-1, 1]
    pub move_input: Vec2,
    /// Jump was pressed since the last snapshot
    pub jump_pressed: bool,
    /// Jump is currently held
    pub jump_held: bool,
    /// Run is currently held
    pub run_held: bool,
    /// Kick was pressed since the last snapshot
    pub kick_pressed: bool,
    /// Attack was pressed since the last snapshot
    pub attack_pressed: bool,
}

impl InputSnapshot {
    /// Whether the horizontal axis is outside the deadzone
    pub fn has_horizontal(&self) -> bool {
        self.move_input.x.abs() > AXIS_DEADZONE
    }

    /// Whether the down direction is held on the move axis
    pub fn down_held(&self) -> bool {
        self.move_input.y < -AXIS_DEADZONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let snap = InputSnapshot::default();
        assert!(!snap.has_horizontal());
        assert!(!snap.down_held());
        assert!(!snap.jump_pressed);
        assert!(!snap.jump_held);
    }

    #[test]
    fn test_has_horizontal_respects_deadzone() {
        let mut snap = InputSnapshot::default();
        snap.move_input = Vec2::new(0.005, 0.0);
        assert!(!snap.has_horizontal());
        snap.move_input = Vec2::new(-0.2, 0.0);
        assert!(snap.has_horizontal());
    }

    #[test]
    fn test_down_held() {
        let mut snap = InputSnapshot::default();
        snap.move_input = Vec2::new(0.0, -1.0);
        assert!(snap.down_held());
        snap.move_input = Vec2::new(0.0, 1.0);
        assert!(!snap.down_held());
    }
}
