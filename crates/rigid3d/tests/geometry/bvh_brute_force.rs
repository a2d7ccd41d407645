use rand::{rngs::StdRng, Rng, SeedableRng};
use rigid3d::dynamics::{CollisionHandler, RigidBody};
use rigid3d::math::{AngVector, Point, Real, Vector};
use rigid3d::pipeline::{BodyCollection, BodyHandle};
use rigid3d::shape::{ConvexSegment, Hull};
use std::sync::Arc;

fn random_point(rng: &mut StdRng, extent: Real) -> Point<Real> {
    Point::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

fn random_bodies(rng: &mut StdRng, count: usize) -> Vec<RigidBody> {
    let hull = Arc::new(Hull::from_segment(Arc::new(ConvexSegment::cuboid(
        Vector::repeat(0.5),
    ))));

    (0..count)
        .map(|_| {
            let position = random_point(rng, 50.0);
            let radius = rng.gen_range(0.0..3.0);
            RigidBody::force_free(
                position,
                AngVector::zeros(),
                1.0,
                radius,
                hull.clone(),
                CollisionHandler::elastic(1.0),
            )
        })
        .collect()
}

fn brute_force(bodies: &BodyCollection, center: &Point<Real>, radius: Real) -> Vec<BodyHandle> {
    let mut result: Vec<_> = bodies
        .iter()
        .filter(|(_, b)| {
            let max_dist = b.bounding_radius() + radius;
            rigid3d::na::distance_squared(&b.position(), center) <= max_dist * max_dist
        })
        .map(|(h, _)| h)
        .collect();
    result.sort();
    result
}

fn check_queries(bodies: &BodyCollection, rng: &mut StdRng) {
    for _ in 0..200 {
        let center = random_point(rng, 55.0);
        let radius = rng.gen_range(0.0..10.0);
        let mut found = bodies.find(&center, radius);
        found.sort();
        assert_eq!(found, brute_force(bodies, &center, radius));
    }
}

#[test]
fn sphere_queries_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut bodies = BodyCollection::from_bodies(random_bodies(&mut rng, 1000));
    bodies.bvh().assert_well_formed();
    check_queries(&bodies, &mut rng);

    // Move everything, then rebuild.
    let handles: Vec<_> = bodies.handles().collect();
    for h in &handles {
        let p = random_point(&mut rng, 50.0);
        bodies.get_mut(*h).unwrap().set_position(p);
    }
    bodies.rebuild();
    bodies.bvh().assert_well_formed();
    check_queries(&bodies, &mut rng);

    // Remove half of the bodies and insert new ones.
    for h in handles.iter().step_by(2) {
        assert!(bodies.remove(*h).is_some());
    }
    for body in random_bodies(&mut rng, 250) {
        let _ = bodies.insert(body);
    }
    assert_eq!(bodies.len(), 750);
    assert_eq!(bodies.bvh().leaf_count(), 750);
    bodies.bvh().assert_well_formed();
    check_queries(&bodies, &mut rng);
}

#[test]
fn k_nearest_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    let bodies = BodyCollection::from_bodies(random_bodies(&mut rng, 1000));

    for k in [0, 1, 10, 999, 1000, 2000] {
        let point = random_point(&mut rng, 60.0);
        let found = bodies.k_nearest(&point, k, false);
        assert_eq!(found.len(), k.min(1000));

        let dists: Vec<_> = found
            .iter()
            .map(|h| rigid3d::na::distance_squared(&bodies.get(*h).unwrap().position(), &point))
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));

        if let Some(farthest) = dists.last() {
            let closer = bodies
                .iter()
                .filter(|(_, b)| rigid3d::na::distance_squared(&b.position(), &point) < *farthest)
                .count();
            assert!(closer < k);
        }
    }
}
