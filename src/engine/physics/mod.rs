// Physics system using rapier2d

pub mod body;
mod character;
mod collision;
mod ports;
mod world;

pub use character::{CharacterPhysics, GroundProbe};
pub use collision::{ground_query_groups, Layer};
pub use ports::{GroundSensor, NullGroundSensor, PhysicsBody};
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
#[allow(unused_imports)]
pub use rapier2d::prelude::{Isometry, QueryFilter, Real, RigidBodyType, Vector};

pub use body::BodyBuilder;
pub use world::{ColliderHandle, RigidBodyHandle};
