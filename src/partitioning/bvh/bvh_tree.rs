use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use alloc::vec::Vec;

/// The content of a BVH node: either a leaf or two children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub(super) enum BvhNodeContent {
    Leaf(u32),
    Internal { left: u32, right: u32 },
}

/// A node of the BVH: a leaf carrying user data, or an internal node with two children.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhNode {
    /// The bounding volume of this node.
    ///
    /// Leaf volumes are the ones given at insertion (or at the last refit). Internal volumes
    /// contain the volumes of both children.
    pub(super) aabb: Aabb,
    pub(super) content: BvhNodeContent,
}

impl BvhNode {
    /// Initialized a leaf.
    #[inline(always)]
    pub fn leaf(aabb: Aabb, leaf_data: u32) -> BvhNode {
        Self {
            aabb,
            content: BvhNodeContent::Leaf(leaf_data),
        }
    }

    #[inline(always)]
    pub(super) fn internal(aabb: Aabb, left: u32, right: u32) -> BvhNode {
        Self {
            aabb,
            content: BvhNodeContent::Internal { left, right },
        }
    }

    /// If this node is a leaf, returns its associated index provided at construction time.
    #[inline(always)]
    pub fn leaf_data(&self) -> Option<u32> {
        match self.content {
            BvhNodeContent::Leaf(data) => Some(data),
            BvhNodeContent::Internal { .. } => None,
        }
    }

    /// Is this node a leaf?
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.leaf_data().is_some()
    }

    /// If this node is internal, the arena indices of its left and right children.
    #[inline(always)]
    pub fn children(&self) -> Option<[u32; 2]> {
        match self.content {
            BvhNodeContent::Leaf(_) => None,
            BvhNodeContent::Internal { left, right } => Some([left, right]),
        }
    }

    /// This node’s AABB.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The center of this node’s AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.aabb.center()
    }
}

/// A binary Bounding Volume Hierarchy used as the broad-phase of the physics world.
///
/// Nodes live in an arena and refer to each other by index. Every leaf carries a `u32` chosen
/// by the caller (body handles, in practice). Insertions and removals keep the tree consistent
/// but never shrink the bounding volumes: call [`Bvh::rebuild`] or [`Bvh::refit`] once the
/// leaves have moved.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bvh {
    pub(super) nodes: Vec<BvhNode>,
    pub(super) free_nodes: Vec<u32>,
    pub(super) root: Option<u32>,
    pub(super) leaf_count: u32,
}

impl Bvh {
    /// An empty BVH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does this tree have no leaf?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of leaves of this tree.
    #[inline]
    pub fn leaf_count(&self) -> u32 {
        self.leaf_count
    }

    /// The AABB bounding everything contained by this BVH, if it isn’t empty.
    pub fn root_aabb(&self) -> Option<Aabb> {
        self.root.map(|root| self.nodes[root as usize].aabb)
    }

    /// The root node of this tree, if it isn’t empty.
    pub fn root(&self) -> Option<&BvhNode> {
        self.root.map(|root| &self.nodes[root as usize])
    }

    /// The node at the given arena index.
    #[inline]
    pub fn node(&self, id: u32) -> &BvhNode {
        &self.nodes[id as usize]
    }

    /// The depth of the sub-tree rooted at the node `node_id`.
    ///
    /// This is mostly a utility for debugging.
    pub fn subtree_depth(&self, node_id: u32) -> u32 {
        match self.nodes[node_id as usize].content {
            BvhNodeContent::Leaf(_) => 1,
            BvhNodeContent::Internal { left, right } => {
                1 + self.subtree_depth(left).max(self.subtree_depth(right))
            }
        }
    }

    pub(super) fn alloc_node(&mut self, node: BvhNode) -> u32 {
        if let Some(id) = self.free_nodes.pop() {
            self.nodes[id as usize] = node;
            id
        } else {
            self.nodes.push(node);
            self.nodes.len() as u32 - 1
        }
    }

    pub(super) fn free_node(&mut self, id: u32) {
        self.free_nodes.push(id);
    }

    /// Removes every leaf of this tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_nodes.clear();
        self.root = None;
        self.leaf_count = 0;
    }
}
