use rand::{rngs::StdRng, Rng, SeedableRng};
use rigid3d::math::{Isometry, Point, Transform, Vector};
use rigid3d::shape::ConvexSegment;

#[test]
fn random_points_against_a_moved_box() {
    let half_extents = Vector::new(1.0, 2.0, 0.5);
    let iso = Isometry::translation(5.0, -3.0, 1.0);
    let segment = ConvexSegment::cuboid(half_extents)
        .transformed(&Transform::from_matrix_unchecked(iso.to_homogeneous()));
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..1000 {
        let local = Vector::new(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-1.0..1.0),
        );
        // Stay away from the faces.
        let margins = half_extents - local.abs();
        if margins.iter().any(|m| m.abs() < 1.0e-3) {
            continue;
        }

        let expected = margins.iter().all(|m| *m > 0.0);
        let res = segment.point_containment(&(iso * Point::from(local)));
        assert_eq!(res.is_inside, expected, "{}", local);

        if expected {
            assert!((res.closest_distance - margins.min()).abs() < 1.0e-4);
        }
    }
}

#[test]
fn a_point_on_a_face_is_outside() {
    let segment = ConvexSegment::cuboid(Vector::repeat(1.0));
    assert!(!segment.contains_point(&Point::new(1.0, 0.0, 0.0)));
    assert!(!segment.contains_point(&Point::new(1.0, 1.0, 1.0)));
    assert!(segment.contains_point(&Point::new(0.999, 0.0, 0.0)));
}
