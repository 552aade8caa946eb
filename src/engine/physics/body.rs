use super::collision::Layer;
use rapier2d::prelude::*;

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    linvel: Vector<Real>,
    gravity_scale: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            gravity_scale: 1.0,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            gravity_scale: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the initial linear velocity
    pub fn linvel(mut self, x: Real, y: Real) -> Self {
        self.linvel = vector![x, y];
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (required for upright characters)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .linvel(self.linvel)
            .gravity_scale(self.gravity_scale)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Common rigid body configurations for the arena
pub mod presets {
    use super::*;

    /// Create the dragon's body (dynamic, rotation locked, never sleeps)
    pub fn dragon_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .lock_rotation()
            .gravity_scale(1.0)
            .can_sleep(false)
            .build()
    }

    /// Create the dragon's collider (capsule shape)
    pub fn dragon_collider(width: Real, height: Real) -> Collider {
        let radius = width / 2.0;
        let half_height = (height / 2.0) - radius; // Subtract radius to get capsule half-height
        let a = point![0.0, -half_height];
        let b = point![0.0, half_height];

        ColliderBuilder::new(SharedShape::capsule(a, b, radius))
            .collision_groups(Layer::Dragon.to_interaction_groups())
            .friction(0.0) // No friction, the speed controller owns horizontal velocity
            .restitution(0.0)
            .density(1.0)
            .build()
    }

    /// Create a terrain body (fixed/static)
    pub fn terrain_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Create a terrain collider (box shape)
    pub fn terrain_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(Layer::Terrain.to_interaction_groups())
            .friction(0.3)
            .restitution(0.0)
            .build()
    }
}
