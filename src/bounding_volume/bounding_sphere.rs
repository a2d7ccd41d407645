//! Bounding sphere.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};

/// A Bounding Sphere.
///
/// Every rigid body carries one, centered on its position.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The sphere radius.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The cube circumscribing this sphere.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_sphere(self.center, self.radius)
    }

    /// Does this sphere contain the given point? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        na::distance_squared(&self.center, point) <= self.radius * self.radius
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (other.center - self.center).norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let distance = (other.center - self.center).norm();
        distance + other.radius <= self.radius
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let mut dir = *other.center() - *self.center();
        let norm = dir.normalize_mut();

        if norm == 0.0 {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn touching_spheres_intersect() {
        let a = BoundingSphere::new(Point::origin(), 1.0);
        let b = BoundingSphere::new(Point::new(2.0, 0.0, 0.0), 1.0);
        let c = BoundingSphere::new(Point::new(2.5, 0.0, 0.0), 1.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn merged_sphere_contains_both() {
        let a = BoundingSphere::new(Point::origin(), 1.0);
        let b = BoundingSphere::new(Point::new(4.0, 0.0, 0.0), 1.0);
        let m = a.merged(&b);
        assert_relative_eq!(m.center, Point::new(2.0, 0.0, 0.0), epsilon = 1.0e-6);
        assert_relative_eq!(m.radius, 3.0, epsilon = 1.0e-6);
        assert!(m.loosely_contains(&a) && m.loosely_contains(&b));
    }

    trait LooselyContains {
        fn loosely_contains(&self, other: &Self) -> bool;
    }

    impl LooselyContains for BoundingSphere {
        fn loosely_contains(&self, other: &Self) -> bool {
            (other.center - self.center).norm() + other.radius <= self.radius + 1.0e-5
        }
    }
}
