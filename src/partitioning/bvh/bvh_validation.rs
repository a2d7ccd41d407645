use super::bvh_tree::BvhNodeContent;
use crate::bounding_volume::BoundingVolume;
use crate::partitioning::Bvh;
use hashbrown::HashSet;

impl Bvh {
    /// Counts the number of leaves that can be reached from the node at index `id`.
    ///
    /// This is mostly a utility for debugging.
    pub fn reachable_leaf_count(&self, id: u32) -> u32 {
        match self.nodes[id as usize].content {
            BvhNodeContent::Leaf(_) => 1,
            BvhNodeContent::Internal { left, right } => {
                self.reachable_leaf_count(left) + self.reachable_leaf_count(right)
            }
        }
    }

    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (every node is reachable at most
    /// once, no free node is reachable, the leaf count is accurate) and geometrically correct
    /// (the AABB of a parent contains the ones of its children).
    pub fn assert_well_formed(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.leaf_count, 0);
            return;
        };

        let mut loop_detection = HashSet::new();
        let leaf_count = self.assert_well_formed_recurse(root, &mut loop_detection);
        assert_eq!(leaf_count, self.leaf_count);

        for free in &self.free_nodes {
            assert!(
                !loop_detection.contains(free),
                "free node {} is still reachable",
                free
            );
        }
    }

    fn assert_well_formed_recurse(&self, node_id: u32, loop_detection: &mut HashSet<u32>) -> u32 {
        assert!(
            loop_detection.insert(node_id),
            "node {} reached twice",
            node_id
        );

        let node = &self.nodes[node_id as usize];

        match node.content {
            BvhNodeContent::Leaf(_) => 1,
            BvhNodeContent::Internal { left, right } => {
                assert!(node.aabb.contains(&self.nodes[left as usize].aabb));
                assert!(node.aabb.contains(&self.nodes[right as usize].aabb));
                self.assert_well_formed_recurse(left, loop_detection)
                    + self.assert_well_formed_recurse(right, loop_detection)
            }
        }
    }
}
