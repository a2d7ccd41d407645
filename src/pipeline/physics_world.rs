use crate::dynamics::{ResolutionParameters, RigidBody};
use crate::math::{Point, Real};
use crate::particles::ParticleSystem;
use crate::pipeline::{BodyCollection, BodyHandle};
use crate::query::contact_hull_hull;
use alloc::vec::Vec;
use hashbrown::HashSet;

/// What happened during one [`PhysicsWorld::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// The number of body pairs given to the narrow-phase.
    pub pairs_tested: usize,
    /// The number of pairs found in contact.
    pub collisions: usize,
}

/// A closed world of rigid bodies and particle systems advanced together.
#[derive(Clone, Debug, Default)]
pub struct PhysicsWorld {
    bodies: BodyCollection,
    particle_systems: Vec<ParticleSystem>,
    resolution: ResolutionParameters,
}

impl PhysicsWorld {
    /// An empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// A world initialized with the given bodies.
    pub fn from_bodies(bodies: impl IntoIterator<Item = RigidBody>) -> Self {
        PhysicsWorld {
            bodies: BodyCollection::from_bodies(bodies),
            ..Self::default()
        }
    }

    /// The parameters given to the collision handlers.
    #[inline]
    pub fn resolution_parameters(&self) -> &ResolutionParameters {
        &self.resolution
    }

    /// The parameters given to the collision handlers.
    #[inline]
    pub fn resolution_parameters_mut(&mut self) -> &mut ResolutionParameters {
        &mut self.resolution
    }

    /// All the bodies of this world.
    #[inline]
    pub fn bodies(&self) -> &BodyCollection {
        &self.bodies
    }

    /// The body with the given handle.
    #[inline]
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    /// The body with the given handle.
    #[inline]
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    /// Adds a body to this world.
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        self.bodies.insert(body)
    }

    /// Removes a body from this world.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        self.bodies.remove(handle)
    }

    /// The particle systems of this world.
    #[inline]
    pub fn particle_systems(&self) -> &[ParticleSystem] {
        &self.particle_systems
    }

    /// Adds a particle system to this world and returns its index.
    pub fn add_particle_system(&mut self, system: ParticleSystem) -> usize {
        self.particle_systems.push(system);
        self.particle_systems.len() - 1
    }

    /// Removes the particle system at index `i`. Later systems are shifted down by one.
    pub fn remove_particle_system(&mut self, i: usize) -> Option<ParticleSystem> {
        (i < self.particle_systems.len()).then(|| self.particle_systems.remove(i))
    }

    /// The bodies whose bounding sphere intersects the given sphere.
    pub fn find_in_sphere(
        &self,
        center: &Point<Real>,
        radius: Real,
        ignore_static: bool,
    ) -> Vec<BodyHandle> {
        let mut found = self.bodies.find(center, radius);
        if ignore_static {
            found.retain(|h| self.bodies.get(*h).is_some_and(|b| !b.is_static()));
        }
        found
    }

    /// The `k` bodies closest to `point`, closest first.
    pub fn k_nearest_neighbors(
        &self,
        point: &Point<Real>,
        k: usize,
        ignore_static: bool,
    ) -> Vec<BodyHandle> {
        self.bodies.k_nearest(point, k, ignore_static)
    }

    /// Advances this world by `dt`.
    ///
    /// Every body is integrated, then the hierarchy is rebuilt. Each body, in hierarchy order,
    /// is then tested against the neighbors found within its bounding radius that were not
    /// tested as a first body already. Pairs of static bodies are skipped. When two bodies
    /// touch, both handlers run, each seeing the state the other had before the collision.
    /// Particle systems are updated last.
    pub fn step(&mut self, dt: Real) -> StepStats {
        for (_, body) in self.bodies.iter_mut() {
            body.update(dt);
        }

        self.bodies.rebuild();

        let mut stats = StepStats::default();
        let handles: Vec<_> = self.bodies.handles().collect();
        let mut visited = HashSet::with_capacity(handles.len());

        for h1 in handles {
            let _ = visited.insert(h1);
            let Some(b1) = self.bodies.get(h1) else {
                continue;
            };

            for h2 in self.bodies.find(&b1.position(), b1.bounding_radius()) {
                if visited.contains(&h2) {
                    continue;
                }

                let (Some(b1), Some(b2)) = (self.bodies.get(h1), self.bodies.get(h2)) else {
                    continue;
                };

                if b1.is_static() && b2.is_static() {
                    continue;
                }

                stats.pairs_tested += 1;

                let Some(contact) = contact_hull_hull(
                    b1.hull(),
                    &b1.position_transform(),
                    b2.hull(),
                    &b2.position_transform(),
                ) else {
                    continue;
                };

                stats.collisions += 1;
                log::trace!(
                    "contact between bodies {} and {}: depth {}",
                    h1.0,
                    h2.0,
                    contact.dist
                );

                let (point, normal, dist) = (contact.point, contact.normal, contact.dist);
                let (s1, s2) = (b1.snapshot(), b2.snapshot());

                if let Some(b1) = self.bodies.get_mut(h1) {
                    b1.handle(&s2, &point, &normal, dist, &self.resolution);
                }
                if let Some(b2) = self.bodies.get_mut(h2) {
                    b2.handle(&s1, &point, &-normal, dist, &self.resolution);
                }
            }
        }

        for system in &mut self.particle_systems {
            system.update(dt);
        }

        log::debug!(
            "step of {} bodies: {} pairs tested, {} collisions",
            self.bodies.len(),
            stats.pairs_tested,
            stats.collisions
        );

        stats
    }
}
