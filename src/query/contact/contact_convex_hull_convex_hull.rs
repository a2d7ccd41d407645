use crate::math::{Real, Transform};
use crate::query::CollisionResult;
use crate::shape::{ConvexHull, ConvexSegment};

/// Finds the vertex of `right` that penetrates `left` the deepest.
///
/// Both segments must already be expressed in the same (world) frame. Only strictly positive
/// depths count, and the first vertex reaching the largest depth wins.
pub fn contact_convex_segment_convex_segment(
    left: &ConvexSegment,
    right: &ConvexSegment,
) -> Option<CollisionResult<()>> {
    let mut deepest: Option<CollisionResult<()>> = None;
    let mut furthest_distance: Real = 0.0;

    for v in right.vertices() {
        let containment = left.point_containment(v);

        if containment.is_inside && containment.closest_distance > furthest_distance {
            furthest_distance = containment.closest_distance;
            deepest = Some(CollisionResult::new(
                (),
                (),
                containment.closest_face_normal,
                *v,
                containment.closest_distance,
            ));
        }
    }

    deepest
}

/// Tests whether a vertex of `right` penetrates `left`.
///
/// `left_pose` and `right_pose` take each hull's parent (usually a rigid body) to world-space.
/// Only the vertices of `right` are tested against the faces of `left`: the reverse test is up
/// to the caller. The returned normal is the normal of a face of `left`.
pub fn contact_convex_hull_convex_hull<'a>(
    left: &'a ConvexHull,
    left_pose: &Transform<Real>,
    right: &'a ConvexHull,
    right_pose: &Transform<Real>,
) -> Option<CollisionResult<&'a ConvexHull>> {
    let left_segment = left.world_segment(left_pose);
    let right_segment = right.world_segment(right_pose);

    contact_convex_segment_convex_segment(&left_segment, &right_segment)
        .map(|res| res.with_objects(left, right))
}
