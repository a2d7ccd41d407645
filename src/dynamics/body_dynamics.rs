use crate::dynamics::{PhysicsParameters, RigidBody};
use crate::math::{AngVector, Real, Vector};
use alloc::sync::Arc;
use core::fmt;

/// A source of force and torque acting on a rigid body.
pub trait ForceGenerator: Send + Sync {
    /// The force applied to `body` during the next step.
    fn force(&self, body: &RigidBody) -> Vector<Real>;

    /// The torque applied to `body` during the next step.
    fn torque(&self, body: &RigidBody) -> AngVector<Real>;
}

/// How a rigid body is driven between collisions.
#[derive(Clone)]
pub enum BodyDynamics {
    /// The body is subject to the forces of a generator.
    Dynamic(Arc<dyn ForceGenerator>),
    /// The body moves freely: zero force and zero torque.
    ForceFree,
    /// The body is static: zero force and zero torque, and other bodies treat it as immovable.
    Static,
}

impl BodyDynamics {
    /// Shorthand for [`BodyDynamics::Dynamic`].
    pub fn dynamic(generator: impl ForceGenerator + 'static) -> Self {
        BodyDynamics::Dynamic(Arc::new(generator))
    }

    /// Is this the [`BodyDynamics::Static`] variant?
    #[inline]
    pub fn is_static(&self) -> bool {
        matches!(self, BodyDynamics::Static)
    }
}

impl fmt::Debug for BodyDynamics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyDynamics::Dynamic(_) => f.write_str("Dynamic(..)"),
            BodyDynamics::ForceFree => f.write_str("ForceFree"),
            BodyDynamics::Static => f.write_str("Static"),
        }
    }
}

/// Gravity plus linear air resistance.
///
/// * `force = mass * gravity - air_resistance * (velocity + wind_speed)`
/// * `torque = -air_resistance * angular_velocity`
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DefaultForces {
    /// Gravity and wind.
    pub parameters: PhysicsParameters,
    /// The coefficient of air resistance.
    pub air_resistance: Real,
}

impl DefaultForces {
    /// Creates a new force generator.
    pub fn new(parameters: PhysicsParameters, air_resistance: Real) -> Self {
        DefaultForces {
            parameters,
            air_resistance,
        }
    }

    /// The weight of `body`.
    pub fn gravity(&self, body: &RigidBody) -> Vector<Real> {
        self.parameters.gravity * body.mass()
    }

    /// The air drag on `body`.
    pub fn air_resistance(&self, body: &RigidBody) -> Vector<Real> {
        -(body.velocity() + self.parameters.wind_speed) * self.air_resistance
    }
}

impl ForceGenerator for DefaultForces {
    fn force(&self, body: &RigidBody) -> Vector<Real> {
        self.gravity(body) + self.air_resistance(body)
    }

    fn torque(&self, body: &RigidBody) -> AngVector<Real> {
        -body.angular_velocity() * self.air_resistance
    }
}
