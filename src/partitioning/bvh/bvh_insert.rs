use super::bvh_tree::BvhNodeContent;
use super::{Bvh, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};

impl Bvh {
    /// Inserts a new leaf into this BVH.
    ///
    /// Starting at the root, the new leaf descends into the child whose AABB overlaps its own
    /// AABB the most (the right child on ties). Once it reaches a leaf, that leaf is replaced by
    /// an internal node holding both. The AABBs along the descent path are enlarged to contain
    /// the new leaf.
    pub fn insert(&mut self, aabb: Aabb, leaf_data: u32) {
        self.leaf_count += 1;

        match self.root {
            None => {
                let root = self.alloc_node(BvhNode::leaf(aabb, leaf_data));
                self.root = Some(root);
            }
            Some(root) => {
                let new_root = self.insert_recurse(root, aabb, leaf_data);
                self.root = Some(new_root);
            }
        }
    }

    fn insert_recurse(&mut self, node_id: u32, aabb: Aabb, leaf_data: u32) -> u32 {
        match self.nodes[node_id as usize].content {
            BvhNodeContent::Leaf(_) => {
                let new_leaf = self.alloc_node(BvhNode::leaf(aabb, leaf_data));
                let merged = self.nodes[node_id as usize].aabb.merged(&aabb);
                self.alloc_node(BvhNode::internal(merged, node_id, new_leaf))
            }
            BvhNodeContent::Internal {
                mut left,
                mut right,
            } => {
                let left_overlap = self.nodes[left as usize].aabb.intersection_volume(&aabb);
                let right_overlap = self.nodes[right as usize].aabb.intersection_volume(&aabb);

                if left_overlap > right_overlap {
                    left = self.insert_recurse(left, aabb, leaf_data);
                } else {
                    right = self.insert_recurse(right, aabb, leaf_data);
                }

                let merged = self.nodes[left as usize]
                    .aabb
                    .merged(&self.nodes[right as usize].aabb);
                self.nodes[node_id as usize] = BvhNode::internal(merged, left, right);
                node_id
            }
        }
    }
}
