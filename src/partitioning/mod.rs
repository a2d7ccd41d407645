//! Spatial partitioning tools.

pub use self::bvh::{Bvh, BvhNode, LeafNodes};

mod bvh;
