use rigid3d::dynamics::{CollisionHandler, RigidBody};
use rigid3d::math::{AngVector, Point, Real, Vector};
use rigid3d::pipeline::PhysicsWorld;
use rigid3d::shape::{ConvexSegment, Hull};
use std::sync::Arc;

fn world_of(count: usize, spacing: Real) -> PhysicsWorld {
    let hull = Arc::new(Hull::from_segment(Arc::new(ConvexSegment::cuboid(
        Vector::repeat(0.5),
    ))));
    PhysicsWorld::from_bodies((0..count).map(|i| {
        RigidBody::force_free(
            Point::new(i as Real * spacing, 0.0, 0.0),
            AngVector::zeros(),
            1.0,
            100.0,
            hull.clone(),
            CollisionHandler::elastic(1.0),
        )
    }))
}

#[test]
fn each_unordered_pair_is_tested_once() {
    for n in [0, 1, 2, 7, 20] {
        let mut world = world_of(n, 3.0);
        let stats = world.step(0.05);
        assert_eq!(stats.pairs_tested, n * n.saturating_sub(1) / 2);
        assert_eq!(stats.collisions, 0);
    }
}

#[test]
fn static_bodies_only_meet_dynamic_ones() {
    let mut world = world_of(4, 3.0);
    let hull = Arc::new(Hull::from_segment(Arc::new(ConvexSegment::cuboid(
        Vector::repeat(0.5),
    ))));
    for i in 0..3 {
        let _ = world.add_body(RigidBody::fixed(
            Point::new(i as Real * 3.0, 10.0, 0.0),
            AngVector::zeros(),
            100.0,
            hull.clone(),
        ));
    }

    // 4 dynamic bodies: 6 pairs, 3 static bodies: 3 * 4 mixed pairs, static pairs skipped.
    let stats = world.step(0.05);
    assert_eq!(stats.pairs_tested, 6 + 12);
}

#[test]
fn queries_see_the_bodies_after_a_step() {
    let mut world = world_of(5, 3.0);
    let _ = world.step(0.05);

    let near = world.k_nearest_neighbors(&Point::new(12.5, 0.0, 0.0), 2, false);
    let xs: Vec<_> = near
        .iter()
        .map(|h| world.body(*h).unwrap().position().x)
        .collect();
    assert_eq!(xs, vec![12.0, 9.0]);

    let found = world.find_in_sphere(&Point::new(-500.0, 0.0, 0.0), 1.0, true);
    assert!(found.is_empty());
    let found = world.find_in_sphere(&Point::new(-150.0, 0.0, 0.0), 70.0, false);
    assert_eq!(found.len(), 5);
}
