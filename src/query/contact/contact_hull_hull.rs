use crate::math::{Real, Transform};
use crate::query::details::contact_convex_hull_convex_hull;
use crate::query::CollisionResult;
use crate::shape::{ConvexHull, Hull};

/// Computes the penetration between two hulls placed in world-space by `left_pose` and
/// `right_pose`.
///
/// Vertices of `right` are first tested against `left`. If none penetrates, vertices of `left`
/// are tested against `right` and the resulting normal is negated, so the normal always points
/// away from `left`. When it comes from the second test the `left` and `right` fields of the
/// result are the hulls in the roles they played during that test.
///
/// Only the first component of each hull takes part in the test.
pub fn contact_hull_hull<'a>(
    left: &'a Hull,
    left_pose: &Transform<Real>,
    right: &'a Hull,
    right_pose: &Transform<Real>,
) -> Option<CollisionResult<&'a ConvexHull>> {
    let left_hull = left.convex_hulls().first()?;
    let right_hull = right.convex_hulls().first()?;

    contact_convex_hull_convex_hull(left_hull, left_pose, right_hull, right_pose).or_else(|| {
        let mut res =
            contact_convex_hull_convex_hull(right_hull, right_pose, left_hull, left_pose)?;
        res.flip_normal();
        Some(res)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Isometry, Vector};
    use crate::shape::ConvexSegment;
    use alloc::sync::Arc;

    fn pose(x: Real) -> Transform<Real> {
        Transform::from_matrix_unchecked(Isometry::translation(x, 0.0, 0.0).to_homogeneous())
    }

    fn cube_hull(half: Real) -> Hull {
        Hull::from_segment(Arc::new(ConvexSegment::cuboid(Vector::repeat(half))))
    }

    #[test]
    fn reverse_test_negates_the_normal() {
        let small = cube_hull(0.5);
        let big = cube_hull(1.0);

        let direct = contact_hull_hull(&big, &pose(1.25), &small, &pose(0.0)).unwrap();
        assert_relative_eq!(direct.normal, -Vector::x(), epsilon = 1.0e-6);
        assert_relative_eq!(direct.dist, 0.25, epsilon = 1.0e-6);

        // No vertex of the big cube is inside of the small one: only the reversed test hits.
        let reversed = contact_hull_hull(&small, &pose(0.0), &big, &pose(1.25)).unwrap();
        assert_relative_eq!(reversed.normal, Vector::x(), epsilon = 1.0e-6);
        assert_relative_eq!(reversed.point, direct.point, epsilon = 1.0e-6);
        assert!(core::ptr::eq(reversed.left, &big.convex_hulls()[0]));
    }

    #[test]
    fn empty_hull_never_collides() {
        let empty = Hull::new(vec![]);
        let cube = cube_hull(1.0);
        assert!(contact_hull_hull(&empty, &pose(0.0), &cube, &pose(0.0)).is_none());
        assert!(contact_hull_hull(&cube, &pose(0.0), &empty, &pose(0.0)).is_none());
    }
}
