// rapier2d adapter implementing the controller's physics capabilities

use super::collision::ground_query_groups;
use super::ports::{GroundSensor, PhysicsBody};
use super::world::{PhysicsWorld, RigidBodyHandle};
use glam::Vec2;
use rapier2d::na as nalgebra;
use rapier2d::prelude::{vector, QueryFilter};

/// Where the ground-overlap test is performed, relative to the body origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    /// Probe center offset from the body translation (usually below the feet)
    pub offset: Vec2,
    /// Probe circle radius
    pub radius: f32,
}

impl GroundProbe {
    /// Probe below the feet of a character with the given height
    pub fn below_feet(height: f32, radius: f32) -> Self {
        Self {
            offset: Vec2::new(0.0, -height / 2.0),
            radius,
        }
    }
}

/// Borrowed view of one character's body inside a [`PhysicsWorld`]
///
/// Construct one per frame around the update call. A character built without
/// a probe reports never-grounded, which keeps a misconfigured scene running
/// instead of failing.
pub struct CharacterPhysics<'w> {
    world: &'w mut PhysicsWorld,
    handle: RigidBodyHandle,
    probe: Option<GroundProbe>,
}

impl<'w> CharacterPhysics<'w> {
    /// Wrap a body handle with a configured ground probe
    pub fn new(world: &'w mut PhysicsWorld, handle: RigidBodyHandle, probe: GroundProbe) -> Self {
        Self {
            world,
            handle,
            probe: Some(probe),
        }
    }

    /// Wrap a body handle without a ground probe (never grounded)
    pub fn without_probe(world: &'w mut PhysicsWorld, handle: RigidBodyHandle) -> Self {
        Self {
            world,
            handle,
            probe: None,
        }
    }

    /// Current body translation, zero if the body is gone
    pub fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
            .unwrap_or(Vec2::ZERO)
    }
}

impl PhysicsBody for CharacterPhysics<'_> {
    fn velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    fn gravity_scale(&self) -> f32 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| body.gravity_scale())
            .unwrap_or(1.0)
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            if body.gravity_scale() != scale {
                body.set_gravity_scale(scale, true);
            }
        }
    }
}

impl GroundSensor for CharacterPhysics<'_> {
    fn is_grounded(&self) -> bool {
        let Some(probe) = self.probe else {
            return false;
        };
        let Some(body) = self.world.get_rigid_body(self.handle) else {
            return false;
        };

        let center = vector![
            body.translation().x + probe.offset.x,
            body.translation().y + probe.offset.y
        ];
        let filter = QueryFilter::default()
            .exclude_rigid_body(self.handle)
            .groups(ground_query_groups());

        self.world.overlap_circle(center, probe.radius, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;
    use approx::assert_relative_eq;

    fn arena_with_dragon(spawn_y: f32) -> (PhysicsWorld, RigidBodyHandle) {
        let mut world = PhysicsWorld::new();
        let ground = world.add_rigid_body(presets::terrain_body(0.0, -0.5));
        world.add_collider(presets::terrain_collider(20.0, 1.0), ground);
        let dragon = world.add_rigid_body(presets::dragon_body(0.0, spawn_y));
        world.add_collider(presets::dragon_collider(1.0, 2.0), dragon);
        world.step();
        (world, dragon)
    }

    #[test]
    fn test_velocity_round_trip() {
        let (mut world, dragon) = arena_with_dragon(5.0);
        let mut character = CharacterPhysics::new(&mut world, dragon, GroundProbe::below_feet(2.0, 0.15));

        character.set_velocity(Vec2::new(3.0, -1.5));
        let v = character.velocity();
        assert_relative_eq!(v.x, 3.0);
        assert_relative_eq!(v.y, -1.5);
    }

    #[test]
    fn test_gravity_scale_round_trip() {
        let (mut world, dragon) = arena_with_dragon(5.0);
        let mut character = CharacterPhysics::new(&mut world, dragon, GroundProbe::below_feet(2.0, 0.15));

        assert_relative_eq!(character.gravity_scale(), 1.0);
        character.set_gravity_scale(0.3);
        assert_relative_eq!(character.gravity_scale(), 0.3);
    }

    #[test]
    fn test_grounded_on_terrain() {
        // Standing on the ground plane (capsule bottom at y=0)
        let (mut world, dragon) = arena_with_dragon(1.0);
        let character = CharacterPhysics::new(&mut world, dragon, GroundProbe::below_feet(2.0, 0.15));
        assert!(character.is_grounded());
    }

    #[test]
    fn test_airborne_high_above_terrain() {
        let (mut world, dragon) = arena_with_dragon(8.0);
        let character = CharacterPhysics::new(&mut world, dragon, GroundProbe::below_feet(2.0, 0.15));
        assert!(!character.is_grounded());
    }

    #[test]
    fn test_missing_probe_never_grounded() {
        let (mut world, dragon) = arena_with_dragon(1.0);
        let character = CharacterPhysics::without_probe(&mut world, dragon);
        assert!(!character.is_grounded());
    }
}
