//! Shapes supported by rigid3d.

pub use self::convex_hull::ConvexHull;
pub use self::convex_segment::{ConvexSegment, ConvexSegmentError};
pub use self::hull::Hull;
pub use self::triangle::Triangle;

mod convex_hull;
mod convex_segment;
mod hull;
mod triangle;
