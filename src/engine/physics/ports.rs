// Capability traits decoupling the controller from the physics backend

use glam::Vec2;

/// Read/write access to a character's physics body
///
/// The controller only touches linear velocity and the gravity-scale
/// multiplier; integration, contacts and collision shapes stay with the
/// backend.
pub trait PhysicsBody {
    /// Current linear velocity (x horizontal, y vertical, up positive)
    fn velocity(&self) -> Vec2;

    /// Overwrite the linear velocity
    fn set_velocity(&mut self, velocity: Vec2);

    /// Current gravity-scale multiplier
    fn gravity_scale(&self) -> f32;

    /// Set the gravity-scale multiplier (1.0 = normal gravity)
    fn set_gravity_scale(&mut self, scale: f32);
}

/// Per-frame grounding query
///
/// Backends answer with a shape-overlap test against the ground layer. An
/// unconfigured sensor must answer `false` so that a misconfigured character
/// degrades to permanently airborne instead of failing.
pub trait GroundSensor {
    /// Whether the character touches ground this frame
    fn is_grounded(&self) -> bool;
}

/// Sensor used when no ground probe is configured: never grounded
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGroundSensor;

impl GroundSensor for NullGroundSensor {
    fn is_grounded(&self) -> bool {
        false
    }
}
