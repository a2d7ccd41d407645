use crate::math::{Point, Real, Vector};
use crate::shape::ConvexSegment;

/// Result of a point-in-convex-segment test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointContainment {
    /// Is the point strictly behind every face?
    pub is_inside: bool,
    /// Normal of the face closest to the point, among the faces visited.
    pub closest_face_normal: Vector<Real>,
    /// Distance from the point to the plane of the closest face, among the faces visited.
    ///
    /// `Real::INFINITY` if no face was visited.
    pub closest_distance: Real,
}

/// Tests whether `point` is strictly inside of `segment`.
///
/// Faces are visited in order and the search stops at the first face the point is not behind,
/// so `closest_face_normal` and `closest_distance` are only meaningful when `is_inside` is
/// `true`. A point exactly on a face plane is outside. A segment without faces contains nothing.
pub fn point_containment(segment: &ConvexSegment, point: &Point<Real>) -> PointContainment {
    let mut result = PointContainment {
        is_inside: segment.num_faces() != 0,
        closest_face_normal: Vector::zeros(),
        closest_distance: Real::INFINITY,
    };

    for (face, normal) in segment.faces().iter().zip(segment.normals()) {
        let a = segment.vertices()[face[0] as usize];
        let cos_theta = normal.dot(&(point - a));
        let distance = -cos_theta;

        result.is_inside &= cos_theta < 0.0;

        if distance < result.closest_distance {
            result.closest_face_normal = *normal;
            result.closest_distance = distance;
        }

        if !result.is_inside {
            break;
        }
    }

    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_inside_cube_reports_closest_face() {
        let cube = ConvexSegment::cuboid(Vector::repeat(1.0));
        let res = point_containment(&cube, &Point::new(0.75, 0.1, -0.2));

        assert!(res.is_inside);
        assert_relative_eq!(res.closest_distance, 0.25, epsilon = 1.0e-6);
        assert_relative_eq!(res.closest_face_normal, Vector::x(), epsilon = 1.0e-6);
    }

    #[test]
    fn boundary_and_outside_points_are_rejected() {
        let cube = ConvexSegment::cuboid(Vector::repeat(1.0));
        assert!(!point_containment(&cube, &Point::new(1.0, 0.0, 0.0)).is_inside);
        assert!(!point_containment(&cube, &Point::new(0.0, -3.0, 0.0)).is_inside);
        assert!(point_containment(&cube, &Point::origin()).is_inside);
    }

    #[test]
    fn empty_segment_contains_nothing() {
        let empty = ConvexSegment::new(vec![Point::origin()], vec![]).unwrap();
        let res = point_containment(&empty, &Point::origin());
        assert!(!res.is_inside);
        assert_eq!(res.closest_distance, Real::INFINITY);
    }

    #[test]
    fn degenerate_face_rejects_every_point() {
        let vertices = vec![
            Point::new(-1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
        ];
        let seg = ConvexSegment::new(vertices, vec![[0, 1, 2]]).unwrap();
        assert!(!seg.contains_point(&Point::new(0.0, 0.0, -1.0)));
    }
}
