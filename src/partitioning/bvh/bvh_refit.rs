use super::bvh_tree::BvhNodeContent;
use super::Bvh;
use crate::bounding_volume::{Aabb, BoundingVolume};
use alloc::vec::Vec;

impl Bvh {
    /// Updates the AABB of every leaf with `leaf_aabb`, then the ones of internal nodes
    /// bottom-up. The topology is unchanged.
    pub fn refit(&mut self, leaf_aabb: impl Fn(u32) -> Aabb) {
        if let Some(root) = self.root {
            let _ = self.refit_recurse(root, &leaf_aabb);
        }
    }

    fn refit_recurse(&mut self, node_id: u32, leaf_aabb: &impl Fn(u32) -> Aabb) -> Aabb {
        let aabb = match self.nodes[node_id as usize].content {
            BvhNodeContent::Leaf(data) => leaf_aabb(data),
            BvhNodeContent::Internal { left, right } => {
                let left_aabb = self.refit_recurse(left, leaf_aabb);
                let right_aabb = self.refit_recurse(right, leaf_aabb);
                left_aabb.merged(&right_aabb)
            }
        };

        self.nodes[node_id as usize].aabb = aabb;
        aabb
    }

    /// Rebuilds this tree from scratch.
    ///
    /// The leaves are collected in iteration order, given their AABB by `leaf_aabb`, and a new
    /// median-split tree is built from them (see [`Bvh::from_iter`]).
    pub fn rebuild(&mut self, leaf_aabb: impl Fn(u32) -> Aabb) {
        let leaves: Vec<_> = self
            .leaves(|_| true)
            .map(|data| (data, leaf_aabb(data)))
            .collect();
        *self = Self::from_iter(leaves);
        self.refit(leaf_aabb);
    }
}
