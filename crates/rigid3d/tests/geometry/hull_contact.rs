use rigid3d::math::{AngVector, Isometry, Real, Transform, Vector};
use rigid3d::query::contact_hull_hull;
use rigid3d::shape::{ConvexSegment, Hull};
use std::sync::Arc;

fn cube_hull(half: Real) -> Hull {
    Hull::from_segment(Arc::new(ConvexSegment::cuboid(Vector::repeat(half))))
}

fn pose(translation: Vector<Real>, axisangle: AngVector<Real>) -> Transform<Real> {
    Transform::from_matrix_unchecked(Isometry::new(translation, axisangle).to_homogeneous())
}

#[test]
fn swapping_the_hulls_negates_the_normal() {
    let big = cube_hull(1.0);
    let small = cube_hull(0.5);
    let angles = [0.0, 0.1, 0.3];

    for angle in angles {
        let big_pose = pose(Vector::zeros(), Vector::z() * angle);
        let small_pose = pose(Vector::new(1.2, 0.1, 0.0), Vector::y() * angle);

        let direct = contact_hull_hull(&big, &big_pose, &small, &small_pose).unwrap();
        let swapped = contact_hull_hull(&small, &small_pose, &big, &big_pose).unwrap();

        assert!((direct.normal + swapped.normal).norm() < 1.0e-5);
        assert!((direct.point - swapped.point).norm() < 1.0e-5);
        assert!((direct.dist - swapped.dist).abs() < 1.0e-5);
        assert!(direct.dist > 0.0);
    }
}

#[test]
fn separated_hulls_do_not_collide() {
    let a = cube_hull(1.0);
    let b = cube_hull(1.0);
    let pa = pose(Vector::zeros(), Vector::zeros());
    let pb = pose(Vector::new(2.5, 0.0, 0.0), Vector::x() * 0.7);

    assert!(contact_hull_hull(&a, &pa, &b, &pb).is_none());
    assert!(contact_hull_hull(&b, &pb, &a, &pa).is_none());
}
