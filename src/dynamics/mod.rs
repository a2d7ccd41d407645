//! Rigid bodies, their forces, and how they respond to collisions.

pub use self::body_dynamics::{BodyDynamics, DefaultForces, ForceGenerator};
pub use self::body_kinematics::{BodyKinematics, INITIAL_ELAPSED_TIME};
pub use self::collision_handler::CollisionHandler;
pub use self::physics_parameters::{PhysicsParameters, ResolutionParameters};
pub use self::rigid_body::{BodySnapshot, RigidBody, STATIC_BODY_MASS};

mod body_dynamics;
mod body_kinematics;
mod collision_handler;
mod physics_parameters;
mod rigid_body;
