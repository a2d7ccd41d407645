//! The body container and the physics world stepping it.

pub use self::body_collection::{BodyCollection, BodyHandle};
pub use self::physics_world::{PhysicsWorld, StepStats};

mod body_collection;
mod physics_world;
