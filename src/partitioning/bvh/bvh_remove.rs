use super::bvh_tree::BvhNodeContent;
use super::Bvh;
use crate::bounding_volume::{Aabb, BoundingVolume};

impl Bvh {
    /// Removes the leaf carrying `leaf_data`.
    ///
    /// The search only descends into children whose AABB intersects `aabb`, so `aabb` must
    /// intersect the AABB the leaf currently has in the tree. When a leaf is removed its
    /// sibling takes the place of their parent. AABBs are not shrunk.
    ///
    /// Returns `false` if no leaf was found.
    pub fn remove(&mut self, leaf_data: u32, aabb: &Aabb) -> bool {
        let Some(root) = self.root else {
            return false;
        };

        let mut removed = false;
        self.root = self.remove_recurse(root, leaf_data, aabb, &mut removed);

        if removed {
            self.leaf_count -= 1;
        }

        removed
    }

    // Returns the node taking the place of `node_id` in its parent.
    fn remove_recurse(
        &mut self,
        node_id: u32,
        leaf_data: u32,
        aabb: &Aabb,
        removed: &mut bool,
    ) -> Option<u32> {
        match self.nodes[node_id as usize].content {
            BvhNodeContent::Leaf(data) => {
                if data == leaf_data && !*removed {
                    *removed = true;
                    self.free_node(node_id);
                    None
                } else {
                    Some(node_id)
                }
            }
            BvhNodeContent::Internal { left, right } => {
                let new_left = if self.nodes[left as usize].aabb.intersects(aabb) {
                    self.remove_recurse(left, leaf_data, aabb, removed)
                } else {
                    Some(left)
                };
                let new_right = if self.nodes[right as usize].aabb.intersects(aabb) {
                    self.remove_recurse(right, leaf_data, aabb, removed)
                } else {
                    Some(right)
                };

                match (new_left, new_right) {
                    (Some(left), Some(right)) => {
                        if let BvhNodeContent::Internal { left: l, right: r } =
                            &mut self.nodes[node_id as usize].content
                        {
                            *l = left;
                            *r = right;
                        }
                        Some(node_id)
                    }
                    (Some(child), None) | (None, Some(child)) => {
                        self.free_node(node_id);
                        Some(child)
                    }
                    (None, None) => {
                        self.free_node(node_id);
                        None
                    }
                }
            }
        }
    }
}
