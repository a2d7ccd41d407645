use crate::math::{AngVector, Isometry, Point, Real, Rotation, Transform, Vector};

/// The smoothed timestep of a newly created body.
pub const INITIAL_ELAPSED_TIME: Real = 0.05;

/// Position-Verlet state of a rigid body.
///
/// Velocities are not stored: they are derived from the current and previous positions and
/// the smoothed timestep, as `(current - previous) / (2 * elapsed_time)`. Setting a velocity
/// rewrites the previous position. Setting a position keeps the velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyKinematics {
    /// The current position.
    pub position: Point<Real>,
    /// The position one step ago.
    pub previous_position: Point<Real>,
    /// The current orientation, as an axis-angle vector.
    pub orientation: AngVector<Real>,
    /// The orientation one step ago.
    pub previous_orientation: AngVector<Real>,
    /// The smoothed timestep.
    pub elapsed_time: Real,
}

impl BodyKinematics {
    /// A body at rest at the given position and orientation.
    pub fn at_rest(position: Point<Real>, orientation: AngVector<Real>) -> Self {
        BodyKinematics {
            position,
            previous_position: position,
            orientation,
            previous_orientation: orientation,
            elapsed_time: INITIAL_ELAPSED_TIME,
        }
    }

    /// The linear velocity.
    #[inline]
    pub fn velocity(&self) -> Vector<Real> {
        (self.position - self.previous_position) / (2.0 * self.elapsed_time)
    }

    /// Sets the linear velocity by rewriting the previous position.
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vector<Real>) {
        self.previous_position = self.position - velocity * (2.0 * self.elapsed_time);
    }

    /// The angular velocity.
    #[inline]
    pub fn angular_velocity(&self) -> AngVector<Real> {
        (self.orientation - self.previous_orientation) / (2.0 * self.elapsed_time)
    }

    /// Sets the angular velocity by rewriting the previous orientation.
    #[inline]
    pub fn set_angular_velocity(&mut self, angular_velocity: AngVector<Real>) {
        self.previous_orientation =
            self.orientation - angular_velocity * (2.0 * self.elapsed_time);
    }

    /// Moves the body without changing its velocity.
    pub fn set_position(&mut self, position: Point<Real>) {
        let velocity = self.velocity();
        self.position = position;
        self.set_velocity(velocity);
    }

    /// Rotates the body without changing its angular velocity.
    pub fn set_orientation(&mut self, orientation: AngVector<Real>) {
        let angular_velocity = self.angular_velocity();
        self.orientation = orientation;
        self.set_angular_velocity(angular_velocity);
    }

    /// Blends `dt` into the smoothed timestep: `elapsed = 0.1 * dt + 0.9 * elapsed`.
    #[inline]
    pub fn smooth_elapsed_time(&mut self, dt: Real) {
        self.elapsed_time = 0.1 * dt + 0.9 * self.elapsed_time;
    }

    /// Advances positions and orientations by one Verlet step of the smoothed timestep.
    pub fn integrate(
        &mut self,
        acceleration: &Vector<Real>,
        angular_acceleration: &AngVector<Real>,
    ) {
        let dt2 = self.elapsed_time * self.elapsed_time;
        let next_position =
            self.position + (self.position - self.previous_position) + acceleration * dt2;
        let next_orientation = self.orientation * 2.0 - self.previous_orientation
            + angular_acceleration * dt2;

        self.previous_position = self.position;
        self.position = next_position;
        self.previous_orientation = self.orientation;
        self.orientation = next_orientation;
    }

    /// The rotation described by the orientation vector. A zero vector is the identity.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::new(self.orientation)
    }

    /// The rigid motion from the body frame to world-space: rotation first, then translation.
    #[inline]
    pub fn pose(&self) -> Isometry<Real> {
        Isometry::new(self.position.coords, self.orientation)
    }

    /// [`Self::pose`] as a general transform.
    #[inline]
    pub fn position_transform(&self) -> Transform<Real> {
        Transform::from_matrix_unchecked(self.pose().to_homogeneous())
    }
}
