use crate::dynamics::{BodySnapshot, ResolutionParameters, RigidBody};
use crate::math::{Matrix, Point, Real, Rotation, Vector};

/// How a body responds when it collides with another one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CollisionHandler {
    /// Push the body out of the contact, then apply an impulse along the contact normal.
    Elastic {
        /// Scales the exchanged impulse. `1.0` is a perfectly elastic collision.
        elasticity: Real,
    },
    /// Ignore the collision.
    Static,
}

impl CollisionHandler {
    /// Shorthand for [`CollisionHandler::Elastic`].
    pub fn elastic(elasticity: Real) -> Self {
        CollisionHandler::Elastic { elasticity }
    }

    /// Resolves a collision from the point of view of `body`.
    ///
    /// `other` is the state of the other body before any resolution of this collision. `normal`
    /// points away from `body` and `dist` is the penetration depth along it. Only `body` is
    /// modified.
    pub fn collide(
        &self,
        body: &mut RigidBody,
        other: &BodySnapshot,
        point: &Point<Real>,
        normal: &Vector<Real>,
        dist: Real,
        params: &ResolutionParameters,
    ) {
        match *self {
            CollisionHandler::Elastic { elasticity } => {
                resolve_elastic(elasticity, body, other, point, normal, dist, params)
            }
            CollisionHandler::Static => {}
        }
    }
}

// The rotational response direction `I⁻¹ Rᵀ (r × n)`. A singular inertia gives no response.
fn angular_response(
    rotation: &Rotation<Real>,
    inertia: &Matrix<Real>,
    r: &Vector<Real>,
    normal: &Vector<Real>,
) -> Vector<Real> {
    let inv_inertia = inertia.try_inverse().unwrap_or_else(Matrix::zeros);
    inv_inertia * rotation.inverse_transform_vector(&r.cross(normal))
}

fn resolve_elastic(
    elasticity: Real,
    body: &mut RigidBody,
    other: &BodySnapshot,
    point: &Point<Real>,
    normal: &Vector<Real>,
    dist: Real,
    params: &ResolutionParameters,
) {
    let correction = if other.is_static {
        params.static_correction
    } else {
        params.dynamic_correction
    };
    body.set_position(body.position() - normal * (correction * dist));

    let body_r = point - body.position();
    let other_r = point - other.position();
    let body_inertia = body.moment_of_inertia();
    let other_inertia = other.moment_of_inertia();
    let body_q = angular_response(&body.rotation(), &body_inertia, &body_r, normal);
    let other_q = angular_response(&other.rotation(), &other_inertia, &other_r, normal);

    let relative_motion = (body.velocity() - other.velocity()).dot(normal)
        + body.angular_velocity().dot(&(body_inertia * body_q))
        - other.angular_velocity().dot(&(other_inertia * other_q));
    let effective_inverse_mass = (1.0 / body.mass() + 1.0 / other.mass)
        + body_q.dot(&(body_inertia * body_q))
        + other_q.dot(&(other_inertia * other_q));
    let lambda = elasticity * 2.0 * relative_motion / effective_inverse_mass;

    let final_velocity = body.velocity() - normal * (lambda / body.mass());
    let final_angular_velocity = body.angular_velocity() - body_q * lambda;
    body.set_velocity(final_velocity);
    body.set_angular_velocity(final_angular_velocity);
}
