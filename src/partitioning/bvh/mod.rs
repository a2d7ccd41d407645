pub use bvh_traverse::LeafNodes;
pub use bvh_tree::{Bvh, BvhNode};

mod bvh_build;
mod bvh_insert;
mod bvh_queries;
mod bvh_refit;
mod bvh_remove;
mod bvh_traverse;
mod bvh_tree;
mod bvh_validation;
