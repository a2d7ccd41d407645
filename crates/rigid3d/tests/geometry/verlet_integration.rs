use rigid3d::dynamics::{
    CollisionHandler, DefaultForces, PhysicsParameters, RigidBody, INITIAL_ELAPSED_TIME,
};
use rigid3d::math::{AngVector, Point, Real, Vector};
use rigid3d::shape::{ConvexSegment, Hull};
use std::sync::Arc;

fn cube_hull() -> Arc<Hull> {
    Arc::new(Hull::from_segment(Arc::new(ConvexSegment::cuboid(
        Vector::repeat(0.5),
    ))))
}

#[test]
fn bodies_at_rest_do_not_drift() {
    let start = Point::new(1.25, -3.5, 7.0);
    let mut body = RigidBody::force_free(
        start,
        AngVector::new(0.1, 0.2, 0.3),
        2.0,
        1.0,
        cube_hull(),
        CollisionHandler::elastic(1.0),
    );

    for i in 0..1000 {
        body.update(0.01 + (i % 7) as Real * 0.003);
    }

    assert_eq!(body.position(), start);
    assert_eq!(body.orientation(), AngVector::new(0.1, 0.2, 0.3));
    assert_eq!(body.velocity(), Vector::zeros());
}

#[test]
fn constant_velocity_without_forces() {
    let mut body = RigidBody::force_free(
        Point::origin(),
        AngVector::zeros(),
        1.0,
        1.0,
        cube_hull(),
        CollisionHandler::elastic(1.0),
    );
    body.set_velocity(Vector::new(1.0, 0.0, -2.0));
    body.set_angular_velocity(Vector::y());

    let step = body.position() - body.kinematics().previous_position;
    for _ in 0..100 {
        body.update(INITIAL_ELAPSED_TIME);
    }

    let expected = Point::origin() + step * 100.0;
    assert!((body.position() - expected).norm() < 1.0e-4);
    assert!((body.velocity() - Vector::new(1.0, 0.0, -2.0)).norm() < 1.0e-3);
    assert!((body.angular_velocity() - Vector::y()).norm() < 1.0e-3);
}

#[test]
fn free_fall_follows_the_verlet_recurrence() {
    let gravity = Vector::new(0.0, -10.0, 0.0);
    let forces = Arc::new(DefaultForces::new(
        PhysicsParameters::new(gravity, Vector::zeros()),
        0.0,
    ));
    let mut body = RigidBody::dynamic(
        Point::origin(),
        AngVector::zeros(),
        3.0,
        1.0,
        cube_hull(),
        CollisionHandler::elastic(1.0),
        forces,
    );

    let n = 20;
    for _ in 0..n {
        body.update(INITIAL_ELAPSED_TIME);
    }

    // x_n = x_0 + a e² n (n + 1) / 2 for a body starting at rest.
    let e2 = INITIAL_ELAPSED_TIME * INITIAL_ELAPSED_TIME;
    let expected = gravity.y * e2 * (n * (n + 1)) as Real / 2.0;
    assert!((body.position().y - expected).abs() < 1.0e-3);
    assert_eq!(body.position().x, 0.0);
    assert_eq!(body.angular_velocity(), Vector::zeros());
}
