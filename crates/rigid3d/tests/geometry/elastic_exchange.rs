use rigid3d::dynamics::{CollisionHandler, RigidBody};
use rigid3d::math::{AngVector, Point, Vector};
use rigid3d::pipeline::{BodyHandle, PhysicsWorld};
use rigid3d::shape::{ConvexSegment, Hull};
use std::sync::Arc;

fn octahedron() -> ConvexSegment {
    let vertices = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ];
    let faces = vec![
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    ConvexSegment::new(vertices, faces).unwrap()
}

fn body(segment: ConvexSegment, x: f32, radius: f32, velocity: f32) -> RigidBody {
    let mut body = RigidBody::force_free(
        Point::new(x, 0.0, 0.0),
        AngVector::zeros(),
        1.0,
        radius,
        Arc::new(Hull::from_segment(Arc::new(segment))),
        CollisionHandler::elastic(1.0),
    );
    body.set_velocity(Vector::x() * velocity);
    body
}

#[test]
fn equal_masses_exchange_velocities_head_on() {
    let octahedron = octahedron();
    for n in octahedron.normals() {
        assert!(n.norm() > 0.99);
    }

    let cube = body(ConvexSegment::cuboid(Vector::repeat(1.0)), 0.0, 3.0f32.sqrt(), 1.0);
    let octahedron = body(octahedron, 1.95, 1.0, -1.0);
    let mut world = PhysicsWorld::from_bodies([cube, octahedron]);

    let stats = world.step(0.05);
    assert_eq!(stats.pairs_tested, 1);
    assert_eq!(stats.collisions, 1);

    let cube = world.body(BodyHandle(0)).unwrap();
    let octahedron = world.body(BodyHandle(1)).unwrap();
    assert!((cube.velocity() + Vector::x()).norm() < 1.0e-3);
    assert!((octahedron.velocity() - Vector::x()).norm() < 1.0e-3);
    assert!(cube.angular_velocity().norm() < 1.0e-3);
    assert!(octahedron.angular_velocity().norm() < 1.0e-3);

    // Total momentum is preserved.
    let momentum = cube.momentum() + octahedron.momentum();
    assert!(momentum.norm() < 1.0e-3);
}
