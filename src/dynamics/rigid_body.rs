use crate::dynamics::{
    BodyDynamics, BodyKinematics, CollisionHandler, ForceGenerator, ResolutionParameters,
};
use crate::math::{AngVector, Isometry, Matrix, Point, Real, Rotation, Transform, Vector};
use crate::shape::Hull;
use alloc::sync::Arc;

/// The mass given to static bodies.
pub const STATIC_BODY_MASS: Real = 1.0e10;

// The inertia of a uniform sphere approximation: `mass * radius²` on the diagonal.
fn sphere_inertia(mass: Real, radius: Real) -> Matrix<Real> {
    Matrix::from_diagonal_element(mass * radius * radius)
}

/// A rigid body: Verlet kinematics, mass, collision shape and collision behavior.
///
/// The mass must be strictly positive.
#[derive(Clone, Debug)]
pub struct RigidBody {
    kinematics: BodyKinematics,
    mass: Real,
    bounding_radius: Real,
    hull: Arc<Hull>,
    handler: CollisionHandler,
    dynamics: BodyDynamics,
}

impl RigidBody {
    /// Creates a body at rest.
    pub fn new(
        position: Point<Real>,
        orientation: AngVector<Real>,
        mass: Real,
        bounding_radius: Real,
        hull: Arc<Hull>,
        handler: CollisionHandler,
        dynamics: BodyDynamics,
    ) -> Self {
        RigidBody {
            kinematics: BodyKinematics::at_rest(position, orientation),
            mass,
            bounding_radius,
            hull,
            handler,
            dynamics,
        }
    }

    /// Creates a body at rest driven by a force generator.
    pub fn dynamic(
        position: Point<Real>,
        orientation: AngVector<Real>,
        mass: Real,
        bounding_radius: Real,
        hull: Arc<Hull>,
        handler: CollisionHandler,
        forces: Arc<dyn ForceGenerator>,
    ) -> Self {
        Self::new(
            position,
            orientation,
            mass,
            bounding_radius,
            hull,
            handler,
            BodyDynamics::Dynamic(forces),
        )
    }

    /// Creates a body at rest subject to no force.
    pub fn force_free(
        position: Point<Real>,
        orientation: AngVector<Real>,
        mass: Real,
        bounding_radius: Real,
        hull: Arc<Hull>,
        handler: CollisionHandler,
    ) -> Self {
        Self::new(
            position,
            orientation,
            mass,
            bounding_radius,
            hull,
            handler,
            BodyDynamics::ForceFree,
        )
    }

    /// Creates a static body: mass [`STATIC_BODY_MASS`], no force, and collisions leave it
    /// untouched.
    pub fn fixed(
        position: Point<Real>,
        orientation: AngVector<Real>,
        bounding_radius: Real,
        hull: Arc<Hull>,
    ) -> Self {
        Self::new(
            position,
            orientation,
            STATIC_BODY_MASS,
            bounding_radius,
            hull,
            CollisionHandler::Static,
            BodyDynamics::Static,
        )
    }

    /// The Verlet state of this body.
    #[inline]
    pub fn kinematics(&self) -> &BodyKinematics {
        &self.kinematics
    }

    /// The position of this body.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        self.kinematics.position
    }

    /// Moves this body without changing its velocity.
    #[inline]
    pub fn set_position(&mut self, position: Point<Real>) {
        self.kinematics.set_position(position)
    }

    /// The orientation of this body, as an axis-angle vector.
    #[inline]
    pub fn orientation(&self) -> AngVector<Real> {
        self.kinematics.orientation
    }

    /// Rotates this body without changing its angular velocity.
    #[inline]
    pub fn set_orientation(&mut self, orientation: AngVector<Real>) {
        self.kinematics.set_orientation(orientation)
    }

    /// The linear velocity of this body.
    #[inline]
    pub fn velocity(&self) -> Vector<Real> {
        self.kinematics.velocity()
    }

    /// Sets the linear velocity of this body.
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vector<Real>) {
        self.kinematics.set_velocity(velocity)
    }

    /// The angular velocity of this body.
    #[inline]
    pub fn angular_velocity(&self) -> AngVector<Real> {
        self.kinematics.angular_velocity()
    }

    /// Sets the angular velocity of this body.
    #[inline]
    pub fn set_angular_velocity(&mut self, angular_velocity: AngVector<Real>) {
        self.kinematics.set_angular_velocity(angular_velocity)
    }

    /// `mass * velocity`.
    #[inline]
    pub fn momentum(&self) -> Vector<Real> {
        self.velocity() * self.mass
    }

    /// `mass * angular_velocity`.
    #[inline]
    pub fn angular_momentum(&self) -> AngVector<Real> {
        self.angular_velocity() * self.mass
    }

    /// The mass of this body.
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// Sets the mass of this body.
    #[inline]
    pub fn set_mass(&mut self, mass: Real) {
        self.mass = mass
    }

    /// The radius of the sphere, centered on the body position, used by the broad-phase.
    #[inline]
    pub fn bounding_radius(&self) -> Real {
        self.bounding_radius
    }

    /// The collision shape of this body.
    #[inline]
    pub fn hull(&self) -> &Arc<Hull> {
        &self.hull
    }

    /// The collision behavior of this body.
    #[inline]
    pub fn handler(&self) -> CollisionHandler {
        self.handler
    }

    /// How this body is driven.
    #[inline]
    pub fn dynamics(&self) -> &BodyDynamics {
        &self.dynamics
    }

    /// Is this a static body?
    #[inline]
    pub fn is_static(&self) -> bool {
        self.dynamics.is_static()
    }

    /// The rotation described by the orientation of this body.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.kinematics.rotation()
    }

    /// The rigid motion from the body frame to world-space.
    #[inline]
    pub fn pose(&self) -> Isometry<Real> {
        self.kinematics.pose()
    }

    /// The transform from the body frame to world-space: rotation first, then translation.
    #[inline]
    pub fn position_transform(&self) -> Transform<Real> {
        self.kinematics.position_transform()
    }

    /// The moment of inertia, approximating the body as a sphere of radius
    /// `bounding_radius`.
    #[inline]
    pub fn moment_of_inertia(&self) -> Matrix<Real> {
        sphere_inertia(self.mass, self.bounding_radius)
    }

    /// The force applied to this body during the next step.
    pub fn force(&self) -> Vector<Real> {
        match &self.dynamics {
            BodyDynamics::Dynamic(generator) => generator.force(self),
            BodyDynamics::ForceFree | BodyDynamics::Static => Vector::zeros(),
        }
    }

    /// The torque applied to this body during the next step.
    pub fn torque(&self) -> AngVector<Real> {
        match &self.dynamics {
            BodyDynamics::Dynamic(generator) => generator.torque(self),
            BodyDynamics::ForceFree | BodyDynamics::Static => AngVector::zeros(),
        }
    }

    /// Advances this body by one step.
    ///
    /// `dt` is first blended into the smoothed timestep, then the position and the orientation
    /// are advanced by one Verlet step using `force / mass` and `torque / mass`.
    pub fn update(&mut self, dt: Real) {
        self.kinematics.smooth_elapsed_time(dt);
        let acceleration = self.force() / self.mass;
        let angular_acceleration = self.torque() / self.mass;
        self.kinematics.integrate(&acceleration, &angular_acceleration);
    }

    /// Applies this body’s collision handler.
    ///
    /// `other` is the state of the other body before this collision was resolved, `normal`
    /// points away from this body.
    pub fn handle(
        &mut self,
        other: &BodySnapshot,
        point: &Point<Real>,
        normal: &Vector<Real>,
        dist: Real,
        params: &ResolutionParameters,
    ) {
        let handler = self.handler;
        handler.collide(self, other, point, normal, dist, params)
    }

    /// A copy of the state the collision handlers need to know about this body.
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            kinematics: self.kinematics,
            mass: self.mass,
            bounding_radius: self.bounding_radius,
            is_static: self.is_static(),
        }
    }
}

/// The state of a body as seen by the collision handler of another body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodySnapshot {
    /// The Verlet state of the body.
    pub kinematics: BodyKinematics,
    /// The mass of the body.
    pub mass: Real,
    /// The bounding radius of the body.
    pub bounding_radius: Real,
    /// Is the body static?
    pub is_static: bool,
}

impl BodySnapshot {
    /// The position of the body.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        self.kinematics.position
    }

    /// The linear velocity of the body.
    #[inline]
    pub fn velocity(&self) -> Vector<Real> {
        self.kinematics.velocity()
    }

    /// The angular velocity of the body.
    #[inline]
    pub fn angular_velocity(&self) -> AngVector<Real> {
        self.kinematics.angular_velocity()
    }

    /// The rotation of the body.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.kinematics.rotation()
    }

    /// The moment of inertia of the body.
    #[inline]
    pub fn moment_of_inertia(&self) -> Matrix<Real> {
        sphere_inertia(self.mass, self.bounding_radius)
    }
}
