use super::{Bvh, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::DIM;
use alloc::vec::Vec;

impl Bvh {
    /// Creates a new BVH from `(leaf_data, aabb)` pairs.
    ///
    /// The tree is built top-down: at depth `d` the leaves are sorted along the axis `d % 3` by
    /// the center of their AABB and split at the median. Leaves are read back in that order
    /// by the leaf iterators.
    pub fn from_iter<It>(leaves: It) -> Self
    where
        It: IntoIterator<Item = (u32, Aabb)>,
    {
        let mut leaves: Vec<_> = leaves
            .into_iter()
            .map(|(data, aabb)| BvhNode::leaf(aabb, data))
            .collect();
        let mut result = Self::new();

        if !leaves.is_empty() {
            result.nodes.reserve(leaves.len() * 2 - 1);
            result.leaf_count = leaves.len() as u32;
            let root = result.build_recurse(&mut leaves, 0);
            result.root = Some(root);
        }

        result
    }

    /// Creates a new BVH with a slice of AABBs.
    ///
    /// Each leaf will be associated an index equal to its position into the slice.
    pub fn from_leaves(leaves: &[Aabb]) -> Self {
        Self::from_iter(leaves.iter().enumerate().map(|(i, aabb)| (i as u32, *aabb)))
    }

    fn build_recurse(&mut self, leaves: &mut [BvhNode], depth: usize) -> u32 {
        if let [leaf] = leaves {
            return self.alloc_node(*leaf);
        }

        let axis = depth % DIM;
        leaves.sort_by(|a, b| a.center()[axis].total_cmp(&b.center()[axis]));

        let mid = leaves.len() / 2;
        let (left_leaves, right_leaves) = leaves.split_at_mut(mid);
        let left = self.build_recurse(left_leaves, depth + 1);
        let right = self.build_recurse(right_leaves, depth + 1);
        let aabb = self.nodes[left as usize]
            .aabb
            .merged(&self.nodes[right as usize].aabb);

        self.alloc_node(BvhNode::internal(aabb, left, right))
    }
}
