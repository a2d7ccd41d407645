use crate::math::{Point, Real, Vector};

/// Geometric description of a penetration between two objects.
///
/// `T` identifies the objects involved, e.g. the convex hulls of a shape-level query.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionResult<T> {
    /// The first object involved in the collision.
    pub left: T,
    /// The second object involved in the collision.
    pub right: T,
    /// The normal of the common surface, pointing away from `left`.
    pub normal: Vector<Real>,
    /// The world-space point common to both surfaces.
    pub point: Point<Real>,
    /// The penetration depth along `normal`.
    pub dist: Real,
}

impl<T> CollisionResult<T> {
    /// Creates a new collision result.
    #[inline]
    pub fn new(left: T, right: T, normal: Vector<Real>, point: Point<Real>, dist: Real) -> Self {
        CollisionResult {
            left,
            right,
            normal,
            point,
            dist,
        }
    }

    /// Negates the normal of this collision.
    #[inline]
    pub fn flip_normal(&mut self) {
        self.normal = -self.normal;
    }

    /// Keeps the geometry of this collision but attaches it to other objects.
    #[inline]
    pub fn with_objects<U>(self, left: U, right: U) -> CollisionResult<U> {
        CollisionResult::new(left, right, self.normal, self.point, self.dist)
    }
}
