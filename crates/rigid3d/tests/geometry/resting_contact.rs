use rigid3d::dynamics::{CollisionHandler, DefaultForces, PhysicsParameters, RigidBody};
use rigid3d::math::{AngVector, Point, Real, Vector};
use rigid3d::pipeline::PhysicsWorld;
use rigid3d::shape::{ConvexSegment, Hull};
use std::sync::Arc;

fn box_hull(half_extents: Vector<Real>) -> Arc<Hull> {
    Arc::new(Hull::from_segment(Arc::new(ConvexSegment::cuboid(
        half_extents,
    ))))
}

#[test]
fn cube_settles_on_a_static_floor() {
    let gravity = Vector::new(0.0, -9.81, 0.0);
    let forces = Arc::new(DefaultForces::new(
        PhysicsParameters::new(gravity, Vector::zeros()),
        0.1,
    ));

    let mut world = PhysicsWorld::new();
    let floor = world.add_body(RigidBody::fixed(
        Point::new(0.0, -2.0, 0.0),
        AngVector::zeros(),
        Vector::<Real>::new(50.0, 2.0, 50.0).norm(),
        box_hull(Vector::new(50.0, 2.0, 50.0)),
    ));
    let cube = world.add_body(RigidBody::dynamic(
        Point::new(0.0, 0.8, 0.0),
        AngVector::zeros(),
        1.0,
        0.5 * 3.0f32.sqrt(),
        box_hull(Vector::repeat(0.5)),
        CollisionHandler::elastic(0.5),
        forces,
    ));

    let mut collisions = 0;
    for _ in 0..1000 {
        collisions += world.step(0.02).collisions;

        let y = world.body(cube).unwrap().position().y;
        // The bottom face stays on the floor surface at y = 0.
        assert!(y > 0.45, "the cube sank into the floor: {}", y);
    }

    assert!(collisions > 0);
    let floor = world.body(floor).unwrap();
    assert_eq!(floor.position(), Point::new(0.0, -2.0, 0.0));
    assert_eq!(floor.velocity(), Vector::zeros());

    let cube = world.body(cube).unwrap();
    assert!(cube.position().y < 0.8);
    assert!(cube.position().x.abs() < 40.0 && cube.position().z.abs() < 40.0);
}
