use crate::bounding_volume::Aabb;
use crate::dynamics::RigidBody;
use crate::math::{Point, Real};
use crate::partitioning::Bvh;
use alloc::vec::Vec;
use ordered_float::OrderedFloat;
use slab::Slab;

/// The identifier of a body inside of a [`BodyCollection`].
///
/// Handles of removed bodies may be reused by later insertions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

fn body_aabb(body: &RigidBody) -> Aabb {
    Aabb::from_sphere(body.position(), body.bounding_radius())
}

/// A set of rigid bodies indexed by a bounding volume hierarchy.
///
/// Each body is given the AABB of its bounding sphere. These boxes are only updated by
/// [`BodyCollection::rebuild`], so spatial queries may miss bodies that moved since the last
/// rebuild.
#[derive(Clone, Debug, Default)]
pub struct BodyCollection {
    bodies: Slab<RigidBody>,
    bvh: Bvh,
}

impl BodyCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from a set of bodies, building a balanced hierarchy at once.
    ///
    /// The handles are given in iteration order, starting at zero.
    pub fn from_bodies(bodies: impl IntoIterator<Item = RigidBody>) -> Self {
        let mut slab = Slab::new();
        for body in bodies {
            let _ = slab.insert(body);
        }

        let bvh = Bvh::from_iter(slab.iter().map(|(key, body)| (key as u32, body_aabb(body))));

        BodyCollection { bodies: slab, bvh }
    }

    /// The number of bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Is this collection empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The underlying bounding volume hierarchy. Its leaves carry the body handles.
    #[inline]
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// Adds a body to this collection.
    pub fn insert(&mut self, body: RigidBody) -> BodyHandle {
        let aabb = body_aabb(&body);
        let handle = BodyHandle(self.bodies.insert(body) as u32);
        self.bvh.insert(aabb, handle.0);
        handle
    }

    /// Removes a body from this collection.
    ///
    /// The hierarchy is searched with the box the body has at its current position. If that
    /// search fails because the body moved since the last rebuild, the hierarchy is rebuilt
    /// from the remaining bodies.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        let body = self.bodies.try_remove(handle.index())?;

        if !self.bvh.remove(handle.0, &body_aabb(&body)) {
            log::warn!(
                "body {} not found in the hierarchy, rebuilding it from {} bodies",
                handle.0,
                self.bodies.len()
            );
            self.bvh = Bvh::from_iter(
                self.bodies
                    .iter()
                    .map(|(key, body)| (key as u32, body_aabb(body))),
            );
        }

        Some(body)
    }

    /// The body with the given handle.
    #[inline]
    pub fn get(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.index())
    }

    /// The body with the given handle.
    #[inline]
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.index())
    }

    /// The handles of all the bodies, in the order of the hierarchy leaves.
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.bvh.leaves(|_| true).map(BodyHandle)
    }

    /// Iterates through all the bodies, in the order of the hierarchy leaves.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.handles()
            .filter_map(move |handle| Some((handle, self.get(handle)?)))
    }

    /// Iterates mutably through all the bodies, in no particular order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut RigidBody)> + '_ {
        self.bodies
            .iter_mut()
            .map(|(key, body)| (BodyHandle(key as u32), body))
    }

    /// The bodies whose bounding sphere intersects the sphere at `center` with the given
    /// `radius`.
    ///
    /// Candidates are found with the hierarchy boxes, then kept if the distance between the
    /// centers is at most `radius` plus their bounding radius.
    pub fn find(&self, center: &Point<Real>, radius: Real) -> Vec<BodyHandle> {
        let query = Aabb::from_sphere(*center, radius);

        self.bvh
            .intersect_aabb(&query)
            .map(BodyHandle)
            .filter(|handle| {
                self.get(*handle).is_some_and(|body| {
                    let max_dist = body.bounding_radius() + radius;
                    na::distance_squared(&body.position(), center) <= max_dist * max_dist
                })
            })
            .collect()
    }

    /// The `k` bodies closest to `point`, sorted by increasing distance.
    ///
    /// Fewer than `k` handles are returned if there are not enough bodies. Static bodies are
    /// skipped if `ignore_static` is `true`.
    pub fn k_nearest(&self, point: &Point<Real>, k: usize, ignore_static: bool) -> Vec<BodyHandle> {
        let mut candidates: Vec<_> = self
            .iter()
            .filter(|(_, body)| !(ignore_static && body.is_static()))
            .map(|(handle, body)| {
                (
                    OrderedFloat(na::distance_squared(&body.position(), point)),
                    handle,
                )
            })
            .collect();

        candidates.sort_by_key(|(dist, _)| *dist);
        candidates.truncate(k);
        candidates.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Rebuilds the hierarchy from the current body positions.
    pub fn rebuild(&mut self) {
        let bodies = &self.bodies;
        self.bvh.rebuild(|data| {
            bodies
                .get(data as usize)
                .map(body_aabb)
                .unwrap_or_else(Aabb::new_invalid)
        });
    }
}
