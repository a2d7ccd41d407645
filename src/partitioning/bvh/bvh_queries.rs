use super::Bvh;
use crate::bounding_volume::{Aabb, BoundingVolume};

impl Bvh {
    /// Iterates through all the leaves with an AABB intersecting the given `aabb`.
    ///
    /// This is a superset of the actual matches: the leaf of a single-leaf tree is always
    /// returned, and leaf AABBs may be stale if the tree wasn’t refit.
    pub fn intersect_aabb<'a>(&'a self, aabb: &'a Aabb) -> impl Iterator<Item = u32> + 'a {
        self.leaves(move |node| node.aabb().intersects(aabb))
    }
}
