// Game action definitions

use glam::Vec2;

/// Discrete buttons the controller reacts to
///
/// The 2D move axis is delivered separately; buttons are press/release only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Jump, double-tap flight entry and glide hold
    Jump,
    /// Run while held
    Run,
    /// Kick attack
    Kick,
    /// Claw/breath attack
    Attack,
}

/// A raw input event, delivered asynchronously by the host
///
/// Events are buffered by the [`InputCollector`](super::InputCollector) and
/// only become visible to game logic when a snapshot is taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button went down
    Pressed(Button),
    /// A button went up
    Released(Button),
    /// The 2D move axis changed (components clamped to [-1, 1])
    MoveAxis(Vec2),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::Jump, Button::Jump);
        assert_ne!(Button::Jump, Button::Kick);
    }

    #[test]
    fn test_event_carries_axis() {
        let event = InputEvent::MoveAxis(Vec2::new(0.5, -1.0));
        assert_eq!(event, InputEvent::MoveAxis(Vec2::new(0.5, -1.0)));
    }
}
