// Typed animator parameter projection

/// One-shot animation triggers, fired at most once per occurrence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    /// A jump executed this frame
    pub jump: bool,
    /// Kick was pressed this frame
    pub kick: bool,
    /// Attack was pressed this frame
    pub attack: bool,
}

impl Triggers {
    /// Whether any trigger fired this frame
    pub fn any(&self) -> bool {
        self.jump || self.kick || self.attack
    }
}

/// Read-only per-frame snapshot handed to the host animation system
///
/// Replaces hashed-string animator parameters with plain typed fields. The
/// host reads whatever it needs; blending and playback stay on its side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimatorFrame {
    /// Touching ground this frame
    pub grounded: bool,
    /// Horizontal input outside the deadzone
    pub moving: bool,
    /// Running on the ground
    pub running: bool,
    /// Crawling (down + horizontal input)
    pub crawling: bool,
    /// Hiding (down, no horizontal input)
    pub hiding: bool,
    /// Flight is active (gliding included)
    pub flying: bool,
    /// Horizontal speed magnitude
    pub horizontal_speed: f32,
    /// Signed vertical speed
    pub vertical_speed: f32,
    /// Sprite faces left
    pub flip_horizontal: bool,
    /// One-shot triggers for this frame
    pub triggers: Triggers,
}

/// Consumer of animator frames
pub trait AnimationSink {
    /// Receive this frame's parameters; called once per frame
    fn apply(&mut self, frame: &AnimatorFrame);
}

/// Sink that discards every frame, for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AnimationSink for NullSink {
    fn apply(&mut self, _frame: &AnimatorFrame) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_any() {
        assert!(!Triggers::default().any());
        let triggers = Triggers {
            kick: true,
            ..Default::default()
        };
        assert!(triggers.any());
    }

    #[test]
    fn test_null_sink_accepts_frames() {
        let mut sink = NullSink;
        sink.apply(&AnimatorFrame::default());
    }
}
