use crate::math::{Real, Vector};

/// Environmental forces shared by bodies using [`DefaultForces`](crate::dynamics::DefaultForces).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PhysicsParameters {
    /// The gravitational acceleration.
    pub gravity: Vector<Real>,
    /// The wind speed.
    pub wind_speed: Vector<Real>,
}

impl PhysicsParameters {
    /// Creates a new set of parameters.
    pub fn new(gravity: Vector<Real>, wind_speed: Vector<Real>) -> Self {
        PhysicsParameters {
            gravity,
            wind_speed,
        }
    }
}

impl Default for PhysicsParameters {
    fn default() -> Self {
        Self::new(Vector::zeros(), Vector::zeros())
    }
}

/// Tuning of the positional correction applied by elastic collision handlers.
///
/// Before its velocity is changed, a penetrating body is pushed back along the contact normal
/// by `correction * penetration_depth`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ResolutionParameters {
    /// Correction factor when the other body is static. Defaults to `1.5`.
    pub static_correction: Real,
    /// Correction factor when the other body is not static. Defaults to `0.75`.
    pub dynamic_correction: Real,
}

impl Default for ResolutionParameters {
    fn default() -> Self {
        ResolutionParameters {
            static_correction: 1.5,
            dynamic_correction: 0.75,
        }
    }
}
