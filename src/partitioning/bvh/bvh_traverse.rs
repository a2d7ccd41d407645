use super::bvh_tree::BvhNodeContent;
use super::BvhNode;
use crate::partitioning::Bvh;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// Depth-first iterator through the leaf nodes of a [`Bvh`], pruned by a node predicate.
pub struct LeafNodes<'a, Check: Fn(&BvhNode) -> bool> {
    tree: &'a Bvh,
    stack: SmallVec<[u32; TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, Check: Fn(&BvhNode) -> bool> LeafNodes<'a, Check> {
    /// Starts iterating from the root of `tree`. The root itself is never checked.
    pub fn new(tree: &'a Bvh, check: Check) -> LeafNodes<'a, Check> {
        let mut stack = SmallVec::new();
        stack.extend(tree.root);
        LeafNodes { tree, stack, check }
    }
}

impl<'a, Check: Fn(&BvhNode) -> bool> Iterator for LeafNodes<'a, Check> {
    type Item = &'a BvhNode;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;

        loop {
            let node = &tree.nodes[self.stack.pop()? as usize];

            match node.content {
                BvhNodeContent::Leaf(_) => return Some(node),
                BvhNodeContent::Internal { left, right } => {
                    // Right first so the left sub-tree is yielded first.
                    if (self.check)(&tree.nodes[right as usize]) {
                        self.stack.push(right);
                    }
                    if (self.check)(&tree.nodes[left as usize]) {
                        self.stack.push(left);
                    }
                }
            }
        }
    }
}

impl Bvh {
    /// Iterates through the leaf nodes, in depth-first order, left children first.
    ///
    /// The `check_node` closure is called on every traversed node except the root. If it returns
    /// `false` then the node and all its descendants won’t be iterated on. This is useful for
    /// pruning whole sub-trees based on a geometric predicate on the node’s AABB.
    pub fn leaf_nodes<F: Fn(&BvhNode) -> bool>(&self, check_node: F) -> LeafNodes<'_, F> {
        LeafNodes::new(self, check_node)
    }

    /// Iterates through the data of the leaves, in depth-first order, left children first.
    ///
    /// See [`Bvh::leaf_nodes`] for the meaning of `check_node`. With `|_| true` this enumerates
    /// every leaf in the tree’s canonical order.
    pub fn leaves<'a, F: Fn(&BvhNode) -> bool + 'a>(
        &'a self,
        check_node: F,
    ) -> impl Iterator<Item = u32> + 'a {
        self.leaf_nodes(check_node).filter_map(BvhNode::leaf_data)
    }
}
